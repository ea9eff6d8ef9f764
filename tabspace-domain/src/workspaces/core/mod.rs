// Core workspace definitions: identifiers, the workspace record and the persisted document.

pub mod errors;
pub mod ids;
pub mod types;
pub mod workspace;

pub use errors::{WorkspaceCoreError, MAX_WORKSPACE_NAME_LENGTH};
pub use ids::{IdGenerator, UuidV4Generator};
pub use types::{TabId, WorkspaceId};
pub use workspace::{Workspace, WorkspaceDocument};
