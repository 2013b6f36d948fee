//! # docnav
//!
//! Derives the navigation menu of a documentation site from the layout of
//! its source directory. Folders become groups, markdown files become
//! entries, and the result is handed to the site theme as its sidebar.
//!
//! ```text
//! docs/src/               →   [ "intro",
//! ├── intro.md                  { text: "guide", prefix: "guide/",
//! └── guide/                      children: ["install"] } ]
//!     └── install.md
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the source directory and derives the tree |
//! | [`types`] | `NavNode` and its sidebar serialization |
//! | [`naming`] | Sibling ordering and the `NNN-name` prefix convention |
//! | [`config`] | `nav.toml` loading, merging over defaults, validation |
//! | [`output`] | CLI text rendering of a derived tree |
//!
//! # Design Decisions
//!
//! ## One Pass, No State
//!
//! The tree is derived synchronously from the directory as it is at call
//! time. Nothing is cached or persisted; any change to the sources means a
//! fresh build. Documentation trees are small, so a depth-first walk is all
//! that is needed.
//!
//! ## Deterministic Order by Default
//!
//! `read_dir` order depends on the platform and filesystem. The default
//! [`naming::SortOrder::Name`] lists documents before folders and sorts each
//! by numeric prefix, then name. `order = "filesystem"` keeps the raw
//! listing for sites that rely on it.
//!
//! ## Empty Groups Vanish
//!
//! A folder contributes a group only if some content document exists below
//! it. Asset folders and folders holding only an index file never show up
//! as empty menu headers.
//!
//! ## Fail Loudly
//!
//! A missing or unreadable directory is a [`scan::NavError::Filesystem`]
//! that aborts the build. There is no partial result.

pub mod config;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

pub use config::NavConfig;
pub use scan::{NavError, build_navigation, build_navigation_with};
pub use types::{GroupNode, LeafNode, NavNode};

#[cfg(test)]
pub(crate) mod test_helpers;
