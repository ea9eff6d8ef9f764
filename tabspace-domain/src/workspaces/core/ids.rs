use uuid::Uuid;

use super::types::WorkspaceId;

/// Source of fresh workspace identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> WorkspaceId;
}

/// Random UUID v4 strings, the format persisted documents use.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn generate(&self) -> WorkspaceId {
        WorkspaceId::from(Uuid::new_v4().to_string().as_str())
    }
}
