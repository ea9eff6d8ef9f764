pub mod assignment;
pub mod core;
pub mod events;
pub mod manager;
pub mod store;
pub mod tabs;
pub mod view;

pub use self::core::{
    IdGenerator, TabId, UuidV4Generator, Workspace, WorkspaceCoreError, WorkspaceDocument, WorkspaceId,
};
pub use events::WorkspaceEvent;
pub use manager::{DefaultWorkspaceManager, WorkspaceManagerError, WorkspaceManagerService};
pub use store::{InMemoryWorkspaceStore, JsonFileStore, WorkspaceCache, WorkspaceStore, WorkspaceStoreError};
pub use tabs::{InMemoryTabStrip, TabStrip, TabStripError};
pub use view::{render, NoopNotifier, WorkspaceEntry, WorkspaceNotifier, WorkspacesView};
