//! Shared test utilities for the docnav test suite.
//!
//! Provides on-disk tree builders, an in-memory [`DirectoryReader`] with a
//! controllable listing order, and lookups over derived navigation trees.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = write_tree(&["intro.md", "guide/README.md", "guide/a.md"]);
//! let nav = build_navigation(tmp.path(), &NavConfig::default()).unwrap();
//!
//! let guide = find_group(&nav, "guide");
//! assert_eq!(leaf_ids(&guide.children), vec!["a"]);
//! ```

use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::scan::{DirectoryEntry, DirectoryReader, EntryKind};
use crate::types::{GroupNode, NavNode};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp directory holding the given relative file paths.
///
/// Parent folders are created as needed. Each file gets a heading line so it
/// looks like a real document.
pub fn write_tree(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for rel in files {
        let path = tmp.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, format!("# {rel}\n")).unwrap();
    }
    tmp
}

/// Copy `fixtures/docs/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/docs");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// In-memory reader
// =========================================================================

/// A [`DirectoryReader`] over an in-memory tree.
///
/// Listings come back in insertion order, which lets tests pin down the
/// "filesystem" ordering without depending on the host OS. Parent folders
/// are registered automatically the first time a child is added.
#[derive(Debug, Default)]
pub struct MemoryReader {
    entries: Vec<(PathBuf, EntryKind)>,
    denied: Vec<PathBuf>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(mut self, path: &str) -> Self {
        self.insert(Path::new(path), EntryKind::Folder);
        self
    }

    pub fn file(mut self, path: &str) -> Self {
        self.insert(Path::new(path), EntryKind::Document);
        self
    }

    pub fn other(mut self, path: &str) -> Self {
        self.insert(Path::new(path), EntryKind::Other);
        self
    }

    /// Make listing `path` fail with `PermissionDenied`.
    pub fn deny(mut self, path: &str) -> Self {
        self.denied.push(PathBuf::from(path));
        self
    }

    fn insert(&mut self, path: &Path, kind: EntryKind) {
        if let Some(parent) = path.parent()
            && !self.is_dir(parent)
        {
            self.insert(parent, EntryKind::Folder);
        }
        if !self.entries.iter().any(|(p, _)| p == path) {
            self.entries.push((path.to_path_buf(), kind));
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.entries
            .iter()
            .any(|(p, kind)| p == path && *kind == EntryKind::Folder)
    }
}

impl DirectoryReader for MemoryReader {
    fn list(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        if self.denied.iter().any(|p| p == path) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        if !self.is_dir(path) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        Ok(self
            .entries
            .iter()
            .filter(|(p, _)| p.parent() == Some(path))
            .filter_map(|(p, kind)| {
                Some(DirectoryEntry {
                    name: p.file_name()?.to_str()?.to_string(),
                    path: p.clone(),
                    kind: *kind,
                })
            })
            .collect())
    }
}

// =========================================================================
// Tree lookups — panics with a clear message on miss
// =========================================================================

/// Find a group by label among `nodes`. Panics if not found.
pub fn find_group<'a>(nodes: &'a [NavNode], label: &str) -> &'a GroupNode {
    nodes
        .iter()
        .filter_map(NavNode::as_group)
        .find(|g| g.label == label)
        .unwrap_or_else(|| {
            let labels: Vec<&str> = nodes
                .iter()
                .filter_map(NavNode::as_group)
                .map(|g| g.label.as_str())
                .collect();
            panic!("group '{label}' not found. Available: {labels:?}")
        })
}

/// Leaf ids among `nodes`, in order. Groups are skipped.
pub fn leaf_ids(nodes: &[NavNode]) -> Vec<&str> {
    nodes
        .iter()
        .filter_map(|n| match n {
            NavNode::Leaf(leaf) => Some(leaf.id.as_str()),
            NavNode::Group(_) => None,
        })
        .collect()
}

/// Every group prefix in the tree, depth-first.
pub fn all_prefixes(nodes: &[NavNode]) -> Vec<&str> {
    let mut out = Vec::new();
    for group in nodes.iter().filter_map(NavNode::as_group) {
        out.push(group.prefix.as_str());
        out.extend(all_prefixes(&group.children));
    }
    out
}
