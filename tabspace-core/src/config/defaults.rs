//! Default configuration values.
//!
//! Used by `serde`'s `default` attribute on the configuration structures when a value
//! is absent from `config.toml`.

use std::path::PathBuf;

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_log_file_path() -> Option<PathBuf> {
    None
}

pub(super) fn default_log_format() -> String {
    "text".to_string()
}

pub(super) fn default_bool_false() -> bool {
    false
}

pub(super) fn default_bool_true() -> bool {
    true
}

/// Directory under the profile that holds the workspace document.
pub(super) fn default_store_dir() -> String {
    "tab-workspaces".to_string()
}

pub(super) fn default_store_file() -> String {
    "Workspaces.json".to_string()
}

pub(super) fn default_workspace_name() -> String {
    "Default Workspace".to_string()
}

pub(super) fn new_workspace_name() -> String {
    "New Workspace".to_string()
}
