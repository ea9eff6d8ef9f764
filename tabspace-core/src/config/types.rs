//! Configuration data structures for tabspace.
//!
//! These structs are populated by deserializing `config.toml`. Missing fields take the
//! values from [`super::defaults`], and unknown fields are rejected through
//! `#[serde(deny_unknown_fields)]`.

use serde::Deserialize;
use std::path::PathBuf;
use super::defaults;

/// Configuration settings for the logging subsystem.
///
/// ```
/// use tabspace_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let default_log_config = LoggingConfig::default();
/// assert_eq!(default_log_config.level, "info");
/// assert_eq!(default_log_config.file_path, None);
/// assert_eq!(default_log_config.format, "text");
///
/// let log_config: LoggingConfig = toml::from_str(r#"
/// level = "debug"
/// file_path = "/var/log/tabspace.log"
/// format = "json"
/// "#).unwrap();
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/tabspace.log")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level: "trace", "debug", "info", "warn" or "error" (case-insensitive).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional log file. Relative paths are resolved against the app state directory.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// "text" or "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_log_level(),
            file_path: defaults::default_log_file_path(),
            format: defaults::default_log_format(),
        }
    }
}

/// What happens to tabs whose workspace has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrphanedTabPolicy {
    /// Tabs keep the tag of the removed workspace and stay hidden.
    #[default]
    Keep,
    /// Tabs are retagged with the default workspace (or the workspace that becomes active).
    ReassignToDefault,
}

/// Settings for the workspace feature.
///
/// `enabled` is the single gate for the whole subsystem: when it is `false` every
/// workspace manager entry point is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspacesConfig {
    #[serde(default = "defaults::default_bool_false")]
    pub enabled: bool,
    /// Profile directory holding the store directory. Defaults to the app data dir.
    #[serde(default)]
    pub profile_dir: Option<PathBuf>,
    #[serde(default = "defaults::default_store_dir")]
    pub store_dir: String,
    #[serde(default = "defaults::default_store_file")]
    pub store_file: String,
    /// Name given to the workspace created on first run.
    #[serde(default = "defaults::default_workspace_name")]
    pub default_workspace_name: String,
    /// Name used when a workspace is created without one.
    #[serde(default = "defaults::new_workspace_name")]
    pub new_workspace_name: String,
    #[serde(default)]
    pub orphaned_tabs: OrphanedTabPolicy,
    /// Promote the first workspace when the stored document has neither an active nor a
    /// default workspace. When `false` the manager reports the inconsistency instead.
    #[serde(default = "defaults::default_bool_true")]
    pub repair_missing_default: bool,
}

impl Default for WorkspacesConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::default_bool_false(),
            profile_dir: None,
            store_dir: defaults::default_store_dir(),
            store_file: defaults::default_store_file(),
            default_workspace_name: defaults::default_workspace_name(),
            new_workspace_name: defaults::new_workspace_name(),
            orphaned_tabs: OrphanedTabPolicy::default(),
            repair_missing_default: defaults::default_bool_true(),
        }
    }
}

/// Root configuration structure.
///
/// ```
/// use tabspace_core::config::CoreConfig;
///
/// let loaded: CoreConfig = toml::from_str(r#"
/// [logging]
/// level = "warn"
///
/// [workspaces]
/// enabled = true
/// "#).unwrap();
/// assert_eq!(loaded.logging.level, "warn");
/// assert!(loaded.workspaces.enabled);
/// assert_eq!(loaded.workspaces.store_file, "Workspaces.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub workspaces: WorkspacesConfig,
}
