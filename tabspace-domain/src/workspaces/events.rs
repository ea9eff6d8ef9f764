use serde::{Deserialize, Serialize};

use crate::workspaces::core::{TabId, WorkspaceId};

/// Broadcast by the workspace manager after a mutation has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkspaceEvent {
    WorkspaceCreated {
        id: WorkspaceId,
        name: String,
        position: usize,
    },
    WorkspaceRemoved {
        id: WorkspaceId,
        orphaned_tabs: usize,
        reassigned_to: Option<WorkspaceId>,
    },
    ActiveWorkspaceChanged {
        old_id: Option<WorkspaceId>,
        new_id: WorkspaceId,
    },
    WorkspaceRenamed {
        id: WorkspaceId,
        old_name: String,
        new_name: String,
    },
    WorkspaceIconChanged {
        id: WorkspaceId,
        icon: Option<String>,
    },
    TabMoved {
        tab: TabId,
        from: Option<WorkspaceId>,
        to: WorkspaceId,
    },
    /// The document had neither an active nor a default workspace; `id` was promoted.
    DefaultWorkspaceRepaired {
        id: WorkspaceId,
    },
}
