//! Directory walking and navigation tree derivation.
//!
//! The builder turns a documentation source folder into a nested menu:
//!
//! ```text
//! docs/src/                     [
//! ├── README.md                     (root landing page, not listed)
//! ├── intro.md                      "intro",
//! ├── .vuepress/                    (hidden, skipped)
//! ├── guide/                        { text: "guide", prefix: "guide/", link: "guide/",
//! │   ├── README.md                   children: [
//! │   ├── install.md                    "install",
//! │   └── crypto/                       { text: "crypto", prefix: "guide/crypto/",
//! │       └── hash.md                     children: ["hash"] } ] },
//! └── drafts/                       (no documents, omitted)
//!     └── notes.txt             ]
//! ```
//!
//! ## Rules
//!
//! - Folders become groups; a folder with no content documents anywhere below
//!   it is dropped.
//! - Content files (by extension) become leaves named by their stem.
//! - The index file (`README.md` by default) is never a leaf; its presence
//!   sets the group's `link`.
//! - Hidden entries and files with other extensions are ignored.
//!
//! The walk goes through a [`DirectoryReader`], so tests can drive it with an
//! in-memory tree and a fixed listing order.

use crate::config::{ConfigError, NavConfig};
use crate::naming::{self, SortOrder};
use crate::types::{GroupNode, NavNode, NavStats};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("cannot read directory {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// What a directory entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    Document,
    /// Sockets, devices, symlinked folders, dangling symlinks.
    Other,
}

/// A single directory listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Capability to list a directory's immediate children.
pub trait DirectoryReader {
    /// List entries of `path` in the reader's native order.
    fn list(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>>;
}

/// [`DirectoryReader`] over the real filesystem.
///
/// Entries are returned in the order `read_dir` yields them. Symlinks to
/// files count as documents; symlinks to folders and dangling symlinks are
/// `Other`, so a link can never re-enter a folder or duplicate a group.
/// Names that are not valid UTF-8 are left out.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl DirectoryReader for FsReader {
    fn list(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let entry_path = entry.path();
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::debug!(name = ?raw, dir = %path.display(), "skipping non-UTF-8 entry");
                    continue;
                }
            };
            let file_type = entry.file_type()?;
            let kind = if file_type.is_symlink() {
                classify_symlink(&entry_path)?
            } else if file_type.is_dir() {
                EntryKind::Folder
            } else if file_type.is_file() {
                EntryKind::Document
            } else {
                EntryKind::Other
            };
            entries.push(DirectoryEntry {
                name,
                path: entry_path,
                kind,
            });
        }
        Ok(entries)
    }
}

/// Classify a symlink by its target without ever treating it as a folder.
fn classify_symlink(path: &Path) -> io::Result<EntryKind> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(EntryKind::Document),
        Ok(meta) => {
            if meta.is_dir() {
                tracing::debug!(path = %path.display(), "skipping symlinked folder");
            }
            Ok(EntryKind::Other)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "skipping dangling symlink");
            Ok(EntryKind::Other)
        }
        Err(err) => Err(io::Error::new(
            err.kind(),
            format!("{}: {err}", path.display()),
        )),
    }
}

/// Derive the navigation tree of `root` from the real filesystem.
pub fn build_navigation(root: &Path, config: &NavConfig) -> Result<Vec<NavNode>, NavError> {
    build_navigation_with(&FsReader, root, config)
}

/// Derive the navigation tree of `root` through an arbitrary reader.
pub fn build_navigation_with<R: DirectoryReader>(
    reader: &R,
    root: &Path,
    config: &NavConfig,
) -> Result<Vec<NavNode>, NavError> {
    let (nodes, _) = walk(reader, root, "", config)?;
    let stats = NavStats::collect(&nodes);
    tracing::info!(
        root = %root.display(),
        groups = stats.groups,
        leaves = stats.leaves,
        "navigation built"
    );
    Ok(nodes)
}

/// Load `nav.toml` from `root` and derive its navigation tree.
pub fn load_and_build(root: &Path) -> Result<(NavConfig, Vec<NavNode>), NavError> {
    let config = crate::config::load_config(root)?;
    let nodes = build_navigation(root, &config)?;
    Ok((config, nodes))
}

/// Walk one folder. Returns its child nodes and whether it holds the index file.
fn walk<R: DirectoryReader>(
    reader: &R,
    dir: &Path,
    prefix: &str,
    config: &NavConfig,
) -> Result<(Vec<NavNode>, bool), NavError> {
    let mut entries = reader.list(dir).map_err(|source| NavError::Filesystem {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::debug!(dir = %dir.display(), prefix, entries = entries.len(), "scanning folder");

    order_entries(&mut entries, config.order);

    let mut nodes = Vec::new();
    let mut has_index = false;

    for entry in &entries {
        if entry.name.starts_with('.') {
            continue;
        }
        match entry.kind {
            EntryKind::Folder => {
                let child_prefix = format!("{prefix}{}/", entry.name);
                let (children, child_has_index) = walk(reader, &entry.path, &child_prefix, config)?;
                if children.is_empty() {
                    tracing::debug!(prefix = %child_prefix, "skipping group without documents");
                    continue;
                }
                let (label, icon) = config.group_display(&child_prefix, &entry.name);
                nodes.push(NavNode::Group(GroupNode {
                    label,
                    icon,
                    link: child_has_index.then(|| child_prefix.clone()),
                    prefix: child_prefix,
                    children,
                }));
            }
            EntryKind::Document if entry.name == config.index_file => has_index = true,
            EntryKind::Document if config.is_content_file(&entry.name) => {
                nodes.push(NavNode::leaf(file_stem(&entry.name)));
            }
            EntryKind::Document | EntryKind::Other => {}
        }
    }

    Ok((nodes, has_index))
}

/// Apply the sibling ordering policy in place.
fn order_entries(entries: &mut [DirectoryEntry], order: SortOrder) {
    match order {
        SortOrder::Filesystem => {}
        SortOrder::Name => entries.sort_by(|a, b| name_key(a).cmp(&name_key(b))),
    }
}

/// Documents before folders, then numeric prefix, then name.
fn name_key(entry: &DirectoryEntry) -> (bool, (bool, Option<u32>, &str)) {
    (
        entry.kind == EntryKind::Folder,
        naming::order_key(sort_stem(entry), &entry.name),
    )
}

fn sort_stem(entry: &DirectoryEntry) -> &str {
    match entry.kind {
        EntryKind::Folder => &entry.name,
        _ => file_stem(&entry.name),
    }
}

/// Filename with its last extension removed. Dotfiles keep their name.
fn file_stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if pos > 0 => &name[..pos],
        _ => name,
    }
}
