//! Domain layer for tabspace.
//!
//! Partitions a browser's tabs into named workspaces, exactly one of which is shown at
//! a time. The [`workspaces`] module holds the data model, the JSON persistence store
//! and its cache, the tab strip contract, and the [`DefaultWorkspaceManager`] that runs
//! the switch and creation protocols.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tabspace_core::ConfigLoader;
//! use tabspace_domain::workspaces::{
//!     DefaultWorkspaceManager, InMemoryTabStrip, JsonFileStore, NoopNotifier, WorkspaceManagerService,
//! };
//!
//! let config = ConfigLoader::load()?;
//! let store = Arc::new(JsonFileStore::from_config(&config.workspaces)?);
//! let manager = DefaultWorkspaceManager::new(
//!     config.workspaces,
//!     store,
//!     Box::new(InMemoryTabStrip::new()),
//!     Arc::new(NoopNotifier),
//!     64,
//! );
//! manager.initialize().await?;
//! ```

// Re-export core module
pub use tabspace_core as core;

pub mod workspaces;

pub use workspaces::{
    DefaultWorkspaceManager, Workspace, WorkspaceDocument, WorkspaceEvent, WorkspaceId, WorkspaceManagerError,
    WorkspaceManagerService,
};
