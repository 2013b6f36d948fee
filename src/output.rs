//! CLI output formatting.
//!
//! # Tree Listing
//!
//! Every node gets a header line with its positional index among its
//! siblings. Groups show their prefix and carry indented context lines for
//! icon and landing page; their children follow one level deeper.
//!
//! ```text
//! 001 intro
//! 002 Guide (guide/)
//!     Icon: book
//!     Link: guide/
//!     001 install
//!     002 crypto (guide/crypto/)
//!         001 hash
//! ```
//!
//! Format functions return `Vec<String>` and do no I/O; `print_*` wrappers
//! write to stdout.

use crate::types::{NavNode, NavStats};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Format a navigation tree as an indented listing.
pub fn format_nav_tree(nodes: &[NavNode]) -> Vec<String> {
    let mut lines = Vec::new();
    format_level(nodes, 0, &mut lines);
    lines
}

fn format_level(nodes: &[NavNode], depth: usize, lines: &mut Vec<String>) {
    let pad = indent(depth);
    for (i, node) in nodes.iter().enumerate() {
        let index = format_index(i + 1);
        match node {
            NavNode::Leaf(leaf) => lines.push(format!("{pad}{index} {}", leaf.id)),
            NavNode::Group(group) => {
                lines.push(format!("{pad}{index} {} ({})", group.label, group.prefix));
                let context = indent(depth + 1);
                if !group.icon.is_empty() {
                    lines.push(format!("{context}Icon: {}", group.icon));
                }
                if let Some(link) = &group.link {
                    lines.push(format!("{context}Link: {link}"));
                }
                format_level(&group.children, depth + 1, lines);
            }
        }
    }
}

/// One-line summary used by `docnav check`.
pub fn format_summary(stats: &NavStats) -> String {
    format!(
        "{}, {}, depth {}",
        plural(stats.groups, "group", "groups"),
        plural(stats.leaves, "document", "documents"),
        stats.max_depth
    )
}

pub fn print_nav_tree(nodes: &[NavNode]) {
    for line in format_nav_tree(nodes) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GroupNode;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<NavNode> {
        vec![
            NavNode::leaf("intro"),
            NavNode::Group(GroupNode {
                label: "Guide".to_string(),
                icon: "book".to_string(),
                prefix: "guide/".to_string(),
                link: Some("guide/".to_string()),
                children: vec![
                    NavNode::leaf("install"),
                    NavNode::Group(GroupNode {
                        label: "crypto".to_string(),
                        icon: String::new(),
                        prefix: "guide/crypto/".to_string(),
                        link: None,
                        children: vec![NavNode::leaf("hash")],
                    }),
                ],
            }),
        ]
    }

    #[test]
    fn nested_tree_listing() {
        assert_eq!(
            format_nav_tree(&sample()),
            vec![
                "001 intro",
                "002 Guide (guide/)",
                "    Icon: book",
                "    Link: guide/",
                "    001 install",
                "    002 crypto (guide/crypto/)",
                "        001 hash",
            ]
        );
    }

    #[test]
    fn empty_tree_has_no_lines() {
        assert!(format_nav_tree(&[]).is_empty());
    }

    #[test]
    fn index_is_zero_padded() {
        let nodes: Vec<NavNode> = (0..12).map(|i| NavNode::leaf(format!("p{i}"))).collect();
        let lines = format_nav_tree(&nodes);
        assert_eq!(lines[0], "001 p0");
        assert_eq!(lines[11], "012 p11");
    }

    #[test]
    fn summary_counts() {
        let stats = NavStats::collect(&sample());
        assert_eq!(format_summary(&stats), "2 groups, 3 documents, depth 3");
    }

    #[test]
    fn summary_singular() {
        let stats = NavStats {
            groups: 1,
            leaves: 1,
            max_depth: 2,
        };
        assert_eq!(format_summary(&stats), "1 group, 1 document, depth 2");
    }
}
