use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceStoreError {
    #[error("Workspace store at '{path}' has not been initialized.")]
    NotInitialized { path: String },

    #[error("I/O error on workspace store '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize workspace document: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Failed to deserialize workspace document: {message}{}", snippet.as_ref().map(|s| format!(" (snippet: {:.50})", s)).unwrap_or_default())]
    Deserialization {
        message: String,
        snippet: Option<String>,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Invalid workspace document: {reason}{}", path.as_ref().map(|p| format!(" (path: {})", p)).unwrap_or_default())]
    InvalidData {
        reason: String,
        path: Option<String>,
    },
}

impl WorkspaceStoreError {
    pub fn invalid_data(reason: impl Into<String>, path: Option<String>) -> Self {
        WorkspaceStoreError::InvalidData { reason: reason.into(), path }
    }
}
