//! Sibling ordering for navigation entries.
//!
//! Directory listings come back in whatever order the OS reports, which
//! differs between platforms and filesystems. [`SortOrder::Name`] replaces it
//! with a stable order; [`SortOrder::Filesystem`] keeps the raw listing.
//!
//! ## Name Ordering
//!
//! Entries may carry an optional numeric prefix (`NNN-`) to pin their
//! position:
//! - `010-install.md` sorts before `020-usage.md`
//! - numbered entries sort before unnumbered ones
//! - ties and unnumbered entries fall back to byte-wise name order
//!
//! The prefix is only used for ordering. Identifiers and labels keep the
//! full name.

use serde::{Deserialize, Serialize};

/// How sibling entries are ordered in the derived tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Documents first, then folders; each by numeric prefix, then name.
    #[default]
    Name,
    /// Keep the order the directory reader reported.
    Filesystem,
}

/// Result of parsing an entry name like `020-getting-started`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName<'a> {
    /// Number prefix if present (e.g., `20` from `020-getting-started`)
    pub number: Option<u32>,
    /// Part after `NNN-`. For unnumbered entries, this is the full input.
    pub name: &'a str,
}

/// Parse an entry name following the `NNN-name` convention.
///
/// - `"020-getting-started"` → number=Some(20), name="getting-started"
/// - `"001"` → number=Some(1), name=""
/// - `"wip-drafts"` → number=None, name="wip-drafts"
pub fn parse_entry_name(name: &str) -> ParsedName<'_> {
    if let Some((prefix, rest)) = name.split_once('-')
        && let Ok(num) = prefix.parse::<u32>()
    {
        return ParsedName {
            number: Some(num),
            name: rest,
        };
    }
    if let Ok(num) = name.parse::<u32>() {
        return ParsedName {
            number: Some(num),
            name: "",
        };
    }
    ParsedName { number: None, name }
}

/// Sort key for one sibling under [`SortOrder::Name`].
///
/// `stem` is the name the prefix is read from (file stem for documents,
/// folder name for folders); `full` breaks ties. Unnumbered entries sort
/// after every numbered one, including `u32::MAX`.
pub fn order_key<'a>(stem: &str, full: &'a str) -> (bool, Option<u32>, &'a str) {
    let number = parse_entry_name(stem).number;
    (number.is_none(), number, full)
}
