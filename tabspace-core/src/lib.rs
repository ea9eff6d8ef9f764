//! # Tabspace Core Library (`tabspace-core`)
//!
//! `tabspace-core` is the foundational layer of the tabspace project. It carries the
//! ambient concerns every other crate relies on, so that the domain layer can focus on
//! workspaces and tabs.
//!
//! ## Purpose
//!
//! - **Error Handling**: a unified error system through the [`CoreError`] enum and its
//!   more specific [`ConfigError`] and [`LoggingError`] types.
//! - **Configuration Management**: TOML configuration loaded by [`ConfigLoader`] into
//!   [`CoreConfig`], including the [`WorkspacesConfig`] section that gates the whole
//!   workspace feature.
//! - **Logging**: a `tracing` based setup with console and optional rolling file output
//!   in text or JSON format.
//! - **Utility Functions**: filesystem helpers (`utils::fs`) and path resolution
//!   (`utils::paths`).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tabspace_core::config::ConfigLoader;
//! use tabspace_core::logging::init_logging;
//! use tabspace_core::error::CoreError;
//!
//! fn main() -> Result<(), CoreError> {
//!     let config = ConfigLoader::load()?;
//!     init_logging(&config.logging, false)?;
//!     tracing::info!(enabled = config.workspaces.enabled, "tabspace core initialized");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod utils;

// Re-export key types for convenience
pub use config::{ConfigLoader, CoreConfig, LoggingConfig, OrphanedTabPolicy, WorkspacesConfig};
pub use error::{ConfigError, CoreError, LoggingError};
pub use logging::{init_logging, init_minimal_logging};
pub use utils::ensure_dir_exists;
