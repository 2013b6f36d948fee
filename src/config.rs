//! Navigation configuration.
//!
//! An optional `nav.toml` in the source root sets the structural conventions
//! the builder relies on and per-group display overrides. Every key is
//! optional; the user file is merged over the stock defaults, so a file only
//! needs the values it changes.
//!
//! ```toml
//! index_file = "README.md"
//! extensions = ["md"]
//! order = "name"
//! default_icon = ""
//!
//! [groups."guide/crypto/"]
//! label = "Cryptography"
//! icon = "lock"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::naming::SortOrder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the source root.
pub const CONFIG_FILE: &str = "nav.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Conventions and overrides used when deriving the navigation tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Reserved filename of a folder's landing page. Never listed as a child.
    pub index_file: String,
    /// Extensions (without dot) that mark a file as a content document.
    pub extensions: Vec<String>,
    /// Sibling ordering policy.
    pub order: SortOrder,
    /// Icon tag for groups that have no override.
    pub default_icon: String,
    /// Display overrides keyed by group prefix (e.g. `"guide/crypto/"`).
    pub groups: BTreeMap<String, GroupOverride>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            index_file: "README.md".to_string(),
            extensions: vec!["md".to_string()],
            order: SortOrder::Name,
            default_icon: String::new(),
            groups: BTreeMap::new(),
        }
    }
}

/// Per-group label and icon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroupOverride {
    pub label: Option<String>,
    pub icon: Option<String>,
}

impl NavConfig {
    /// Validate values the builder depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.index_file.is_empty() {
            return Err(ConfigError::Validation(
                "index_file must not be empty".into(),
            ));
        }
        if self.index_file.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "index_file must be a bare filename".into(),
            ));
        }
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        for ext in &self.extensions {
            if ext.is_empty() || ext.starts_with('.') {
                return Err(ConfigError::Validation(format!(
                    "extensions entries must be non-empty and have no leading dot: {ext:?}"
                )));
            }
        }
        for prefix in self.groups.keys() {
            if !prefix.ends_with('/') {
                return Err(ConfigError::Validation(format!(
                    "groups key must end with '/': {prefix:?}"
                )));
            }
        }
        Ok(())
    }

    /// Whether `file_name` has one of the content extensions (case-insensitive).
    pub fn is_content_file(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .map(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| ext.eq_ignore_ascii_case(allowed.as_str()))
            })
            .unwrap_or(false)
    }

    /// Label and icon for the group at `prefix`, falling back to the folder
    /// name and `default_icon`.
    pub fn group_display(&self, prefix: &str, dir_name: &str) -> (String, String) {
        let entry = self.groups.get(prefix);
        let label = entry
            .and_then(|g| g.label.clone())
            .unwrap_or_else(|| dir_name.to_string());
        let icon = entry
            .and_then(|g| g.icon.clone())
            .unwrap_or_else(|| self.default_icon.clone());
        (label, icon)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(NavConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `nav.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<NavConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: NavConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `nav.toml` in the given directory, or the defaults when
/// there is none.
pub fn load_config(root: &Path) -> Result<NavConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `nav.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docnav Configuration
# ====================
# All settings are optional. Values shown below are the defaults.
# Place this file as nav.toml in the documentation source root.
# Unknown keys will cause an error.

# Landing-page filename of a folder. It is never listed as a menu entry;
# a group whose folder contains it links to the folder itself.
index_file = "README.md"

# File extensions (without the dot) that count as content documents.
# Matching is case-insensitive. Everything else is ignored.
extensions = ["md"]

# Sibling ordering:
#   "name"       documents before folders, NNN- prefixed entries first by
#                number, then the rest by name
#   "filesystem" the order the OS lists entries in (not reproducible)
order = "name"

# Icon tag for groups without an override. Empty means no icon.
default_icon = ""

# ---------------------------------------------------------------------------
# Per-group overrides, keyed by the group prefix (path + trailing slash)
# ---------------------------------------------------------------------------
# [groups."guide/"]
# label = "Guide"
# icon = "book"
#
# [groups."guide/crypto/"]
# label = "Cryptography"
# icon = "lock"
"##
}
