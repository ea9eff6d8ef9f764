use serde::{Deserialize, Serialize};
use std::fmt;
use super::errors::WorkspaceCoreError;

/// Opaque workspace identifier.
///
/// Ids are generated as UUID strings by default, but any non-empty string read from the
/// store is accepted and compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct WorkspaceId(String);

impl WorkspaceId {
    pub fn new(id: impl Into<String>) -> Result<Self, WorkspaceCoreError> {
        let id = id.into();
        if id.is_empty() {
            Err(WorkspaceCoreError::IdCannotBeEmpty)
        } else {
            Ok(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WorkspaceId {
    fn from(s: &str) -> Self {
        // `new` is the validating constructor; this one is for literals and tests.
        debug_assert!(!s.is_empty(), "WorkspaceId created from empty string via From<&str>");
        Self(s.to_string())
    }
}

/// Handle of a tab owned by the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-{}", self.0)
    }
}
