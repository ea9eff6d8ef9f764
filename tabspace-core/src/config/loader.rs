//! Configuration loading for tabspace.
//!
//! [`ConfigLoader::load`] reads `config.toml` from the application config directory
//! (see [`crate::utils::paths::get_app_config_dir`]). A missing file yields the default
//! configuration. Parsed or default values then go through validation, which:
//! - normalizes log level and format and rejects unknown values,
//! - resolves a relative log file path against the app state directory and creates its
//!   parent directory,
//! - rejects empty workspace names and store file names that are not plain file names.

use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

use crate::config::CoreConfig;
use crate::error::{ConfigError, CoreError};
use crate::utils::fs as tab_fs;
use crate::utils::paths::{get_app_config_dir, get_app_state_dir};

/// File name looked up inside the app config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Namespace for configuration loading.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the configuration from the app config directory.
    pub fn load() -> Result<CoreConfig, CoreError> {
        let path = get_app_config_dir()?.join(CONFIG_FILE_NAME);
        Self::load_from_path(&path)
    }

    /// Loads and validates the configuration from `path`.
    ///
    /// A missing or blank file yields [`CoreConfig::default`].
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        let mut config = match fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => {
                debug!(path = %path.display(), "Configuration file is empty, using defaults");
                CoreConfig::default()
            }
            Ok(content) => toml::from_str(&content).map_err(ConfigError::ParseError)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No configuration file found, using defaults");
                CoreConfig::default()
            }
            Err(e) => {
                return Err(CoreError::Config(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }));
            }
        };

        Self::validate_config(&mut config)?;
        Ok(config)
    }

    /// Validates `config` in place, resolving relative log paths against the app state dir.
    pub fn validate_config(config: &mut CoreConfig) -> Result<(), CoreError> {
        let needs_state_dir = config
            .logging
            .file_path
            .as_ref()
            .map_or(false, |p| !p.is_absolute());
        let state_dir = if needs_state_dir { Some(get_app_state_dir()?) } else { None };
        Self::validate_with_state_dir(config, state_dir.as_deref())
    }

    fn validate_with_state_dir(config: &mut CoreConfig, state_dir: Option<&Path>) -> Result<(), CoreError> {
        let level_lower = config.logging.level.to_lowercase();
        match level_lower.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => config.logging.level = level_lower,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                    config.logging.level
                ))
                .into());
            }
        }

        let format_lower = config.logging.format.to_lowercase();
        match format_lower.as_str() {
            "text" | "json" => config.logging.format = format_lower,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: '{}'. Must be one of text, json.",
                    config.logging.format
                ))
                .into());
            }
        }

        if let Some(log_path) = config.logging.file_path.take() {
            let absolute: PathBuf = if log_path.is_absolute() {
                log_path
            } else {
                let base = state_dir.ok_or_else(|| {
                    CoreError::Internal("relative log path without a state directory".to_string())
                })?;
                base.join(log_path)
            };
            if let Some(parent) = absolute.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    tab_fs::ensure_dir_exists(parent)?;
                }
            }
            config.logging.file_path = Some(absolute);
        }

        let ws = &config.workspaces;
        if ws.default_workspace_name.trim().is_empty() {
            return Err(ConfigError::ValidationError("workspaces.default_workspace_name must not be empty.".to_string()).into());
        }
        if ws.new_workspace_name.trim().is_empty() {
            return Err(ConfigError::ValidationError("workspaces.new_workspace_name must not be empty.".to_string()).into());
        }
        for (key, value) in [("store_dir", &ws.store_dir), ("store_file", &ws.store_file)] {
            if !is_plain_file_name(value) {
                return Err(ConfigError::ValidationError(format!(
                    "workspaces.{} must be a single path component, got '{}'.",
                    key, value
                ))
                .into());
            }
        }

        Ok(())
    }
}

fn is_plain_file_name(value: &str) -> bool {
    let mut components = Path::new(value).components();
    matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
}
