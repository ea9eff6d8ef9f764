//! XDG base directories and application-specific paths.
//!
//! Relies on `directories-next`. Every function returns
//! [`CoreError::Config`]`(`[`ConfigError::DirectoryUnavailable`]`)` when the directory
//! cannot be determined, typically because `HOME` is unset.

use directories_next::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

use crate::config::WorkspacesConfig;
use crate::error::{ConfigError, CoreError};

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "Tabspace";
const APPLICATION: &str = "tabspace";

fn unavailable(dir_type: &str) -> CoreError {
    CoreError::Config(ConfigError::DirectoryUnavailable { dir_type: dir_type.to_string() })
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// `$XDG_STATE_HOME` on Linux (`~/.local/state` fallback), the local data dir elsewhere.
pub fn get_state_base_dir() -> Result<PathBuf, CoreError> {
    BaseDirs::new()
        .map(|dirs| {
            #[cfg(target_os = "linux")]
            {
                match std::env::var("XDG_STATE_HOME") {
                    Ok(state_home) if !state_home.is_empty() => PathBuf::from(state_home),
                    _ => dirs.home_dir().join(".local/state"),
                }
            }
            #[cfg(not(target_os = "linux"))]
            {
                dirs.data_local_dir().to_path_buf()
            }
        })
        .ok_or_else(|| unavailable("State Base"))
}

/// e.g. `~/.config/tabspace`.
pub fn get_app_config_dir() -> Result<PathBuf, CoreError> {
    project_dirs()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| unavailable("App Config"))
}

/// e.g. `~/.local/share/tabspace`. Used as the profile directory when none is configured.
pub fn get_app_data_dir() -> Result<PathBuf, CoreError> {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| unavailable("App Data"))
}

/// e.g. `~/.local/state/Tabspace/tabspace`.
pub fn get_app_state_dir() -> Result<PathBuf, CoreError> {
    get_state_base_dir().map(|base| base.join(ORGANIZATION).join(APPLICATION))
}

/// Location of the workspace document: `<profile>/<store_dir>/<store_file>`.
///
/// ```
/// use tabspace_core::config::WorkspacesConfig;
/// use tabspace_core::utils::paths::workspace_store_path;
/// use std::path::PathBuf;
///
/// let config = WorkspacesConfig { profile_dir: Some(PathBuf::from("/profile")), ..Default::default() };
/// assert_eq!(
///     workspace_store_path(&config).unwrap(),
///     PathBuf::from("/profile/tab-workspaces/Workspaces.json")
/// );
/// ```
pub fn workspace_store_path(config: &WorkspacesConfig) -> Result<PathBuf, CoreError> {
    let profile = match &config.profile_dir {
        Some(dir) => dir.clone(),
        None => get_app_data_dir()?,
    };
    Ok(profile.join(&config.store_dir).join(&config.store_file))
}
