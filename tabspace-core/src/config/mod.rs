//! Configuration management for tabspace.
//!
//! - [`types`]: the schema ([`CoreConfig`], [`LoggingConfig`], [`WorkspacesConfig`]).
//! - [`defaults`]: default values applied by `serde` for absent fields.
//! - [`loader`]: [`ConfigLoader`], which locates, parses and validates `config.toml`.
//!
//! A missing configuration file is not an error: the defaults are used, which leaves the
//! workspace feature disabled.

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CoreConfig, LoggingConfig, OrphanedTabPolicy, WorkspacesConfig};
