//! Navigation tree types.
//!
//! A derived menu is a `Vec<NavNode>`. Leaves are documents, groups are
//! folders that contain at least one document somewhere below them.
//!
//! The serialized form is the sidebar shape the site theme reads directly:
//!
//! ```json
//! [
//!   "intro",
//!   { "text": "guide", "icon": "book", "prefix": "guide/", "link": "guide/",
//!     "children": ["install", "usage"] }
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// One entry of the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavNode {
    Leaf(LeafNode),
    Group(GroupNode),
}

/// A document entry, identified by its filename without extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeafNode {
    pub id: String,
}

/// A folder entry with its nested children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupNode {
    /// Display label; the folder name unless overridden in `nav.toml`.
    #[serde(rename = "text")]
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,
    /// Path of the folder relative to the root, always `/`-terminated.
    pub prefix: String,
    /// Landing page of the group. Present when the folder has an index file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub children: Vec<NavNode>,
}

impl NavNode {
    pub fn leaf(id: impl Into<String>) -> Self {
        NavNode::Leaf(LeafNode { id: id.into() })
    }

    pub fn as_group(&self) -> Option<&GroupNode> {
        match self {
            NavNode::Group(group) => Some(group),
            NavNode::Leaf(_) => None,
        }
    }

    /// Leaf id or group label.
    pub fn title(&self) -> &str {
        match self {
            NavNode::Leaf(leaf) => &leaf.id,
            NavNode::Group(group) => &group.label,
        }
    }
}

/// Totals over a navigation tree, used by `docnav check`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavStats {
    pub groups: usize,
    pub leaves: usize,
    pub max_depth: usize,
}

impl NavStats {
    pub fn collect(nodes: &[NavNode]) -> Self {
        let mut stats = NavStats::default();
        stats.visit(nodes, 1);
        stats
    }

    fn visit(&mut self, nodes: &[NavNode], depth: usize) {
        for node in nodes {
            self.max_depth = self.max_depth.max(depth);
            match node {
                NavNode::Leaf(_) => self.leaves += 1,
                NavNode::Group(group) => {
                    self.groups += 1;
                    self.visit(&group.children, depth + 1);
                }
            }
        }
    }
}
