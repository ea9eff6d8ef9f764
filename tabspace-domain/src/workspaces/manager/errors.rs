use thiserror::Error;

use crate::workspaces::core::{WorkspaceCoreError, WorkspaceId};
use crate::workspaces::store::WorkspaceStoreError;
use crate::workspaces::tabs::TabStripError;

#[derive(Error, Debug)]
pub enum WorkspaceManagerError {
    #[error("Workspace with ID '{0}' not found.")]
    UnknownWorkspace(WorkspaceId),

    #[error("Workspace document is inconsistent: {0}")]
    InconsistentState(String),

    #[error("Cannot remove '{0}': it is the last workspace.")]
    CannotRemoveLastWorkspace(WorkspaceId),

    #[error("Could not generate a unique workspace ID after {attempts} attempts.")]
    DuplicateWorkspaceId { attempts: usize },

    #[error("No active workspace is currently set.")]
    NoActiveWorkspace,

    #[error("Workspace store error: {0}")]
    Store(#[from] WorkspaceStoreError),

    #[error("Workspace core error: {0}")]
    Core(#[from] WorkspaceCoreError),

    #[error("Tab strip error: {0}")]
    TabStrip(#[from] TabStripError),

    #[error("Internal workspace manager error: {context}")]
    Internal { context: String },
}
