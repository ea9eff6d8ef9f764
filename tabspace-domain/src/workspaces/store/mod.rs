pub mod cache;
pub mod errors;
pub mod memory;
pub mod provider;

pub use cache::WorkspaceCache;
pub use errors::WorkspaceStoreError;
pub use memory::InMemoryWorkspaceStore;
pub use provider::{JsonFileStore, WorkspaceStore};

#[cfg(test)]
pub use provider::MockWorkspaceStore;
