use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tabspace_core::config::WorkspacesConfig;
use tabspace_core::error::CoreError;
use tabspace_core::utils::paths::workspace_store_path;
use tracing::{debug, info, warn};

use super::errors::WorkspaceStoreError;
use crate::workspaces::core::WorkspaceDocument;

/// Whole-document persistence for the workspace set.
///
/// There are no partial updates: `write` replaces the stored document.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkspaceStore: Send + Sync {
    /// Creates an empty document if none exists. Returns `true` when it created one.
    async fn initialize(&self) -> Result<bool, WorkspaceStoreError>;
    async fn exists(&self) -> Result<bool, WorkspaceStoreError>;
    /// Fails with [`WorkspaceStoreError::NotInitialized`] when the document is missing.
    async fn read(&self) -> Result<WorkspaceDocument, WorkspaceStoreError>;
    async fn write(&self, document: &WorkspaceDocument) -> Result<(), WorkspaceStoreError>;
}

/// JSON file backed store, usually `<profile>/tab-workspaces/Workspaces.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolves the document location from the `[workspaces]` configuration section.
    pub fn from_config(config: &WorkspacesConfig) -> Result<Self, CoreError> {
        Ok(Self::new(workspace_store_path(config)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn io_error(&self, source: std::io::Error) -> WorkspaceStoreError {
        WorkspaceStoreError::Io { path: self.display_path(), source }
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }

    /// Writes `contents` next to the target and renames it into place.
    async fn write_atomically(&self, contents: &str) -> Result<(), WorkspaceStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| self.io_error(e))?;
            }
        }
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, contents).await.map_err(|e| self.io_error(e))?;
        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            warn!("Failed to move '{}' into place: {}", temp_path.display(), e);
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(self.io_error(e));
        }
        Ok(())
    }
}

#[async_trait]
impl WorkspaceStore for JsonFileStore {
    async fn initialize(&self) -> Result<bool, WorkspaceStoreError> {
        if self.exists().await? {
            debug!("Workspace store '{}' already present", self.path.display());
            return Ok(false);
        }
        self.write_atomically("{}").await?;
        info!("Created empty workspace store at '{}'", self.path.display());
        Ok(true)
    }

    async fn exists(&self) -> Result<bool, WorkspaceStoreError> {
        match tokio::fs::metadata(&self.path).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(self.io_error(e)),
        }
    }

    async fn read(&self) -> Result<WorkspaceDocument, WorkspaceStoreError> {
        debug!("Reading workspace document from '{}'", self.path.display());
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(WorkspaceStoreError::NotInitialized { path: self.display_path() });
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let document: WorkspaceDocument = serde_json::from_str(&raw).map_err(|e| {
            warn!("Malformed workspace document at '{}': {}", self.path.display(), e);
            WorkspaceStoreError::Deserialization {
                message: format!("Failed to parse JSON at '{}'", self.path.display()),
                snippet: Some(raw.chars().take(200).collect()),
                source: Some(e),
            }
        })?;

        document
            .validate()
            .map_err(|reason| WorkspaceStoreError::invalid_data(reason, Some(self.display_path())))?;
        Ok(document)
    }

    async fn write(&self, document: &WorkspaceDocument) -> Result<(), WorkspaceStoreError> {
        if let Err(reason) = document.validate() {
            return Err(WorkspaceStoreError::invalid_data(reason, Some(self.display_path())));
        }

        let json = serde_json::to_string_pretty(document).map_err(|e| WorkspaceStoreError::Serialization {
            message: format!("Failed to serialize document for '{}'", self.path.display()),
            source: Some(e),
        })?;

        self.write_atomically(&json).await?;
        debug!(workspaces = document.len(), "Wrote workspace document to '{}'", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspaces::core::{Workspace, WorkspaceId};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn ws(id: &str, name: &str) -> Workspace {
        Workspace::new(WorkspaceId::from(id), name).unwrap()
    }

    #[tokio::test]
    async fn read_before_initialize_is_not_initialized() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("tab-workspaces/Workspaces.json"));
        assert!(!store.exists().await.unwrap());
        assert!(matches!(store.read().await, Err(WorkspaceStoreError::NotInitialized { .. })));
    }

    #[tokio::test]
    async fn initialize_writes_empty_object_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tab-workspaces/Workspaces.json");
        let store = JsonFileStore::new(&path);

        assert!(store.initialize().await.unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
        assert!(store.read().await.unwrap().is_empty());

        store.write(&WorkspaceDocument::new(vec![ws("a", "A")])).await.unwrap();
        assert!(!store.initialize().await.unwrap());
        assert_eq!(store.read().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn write_then_read_preserves_order_and_flags() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("Workspaces.json"));
        let doc = WorkspaceDocument::new(vec![
            ws("c", "Third").with_default(true),
            ws("a", "First").with_active(true),
            ws("b", "Second"),
        ]);

        store.write(&doc).await.unwrap();
        assert_eq!(store.read().await.unwrap(), doc);
        assert!(!dir.path().join("Workspaces.json.tmp").exists());
    }

    #[tokio::test]
    async fn written_file_uses_persisted_field_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Workspaces.json");
        let store = JsonFileStore::new(&path);
        store.write(&WorkspaceDocument::new(vec![ws("a", "A").with_active(true)])).await.unwrap();

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"workspaces": [{"id": "a", "name": "A", "icon": "", "default": false, "used": true}]})
        );
    }

    #[tokio::test]
    async fn malformed_document_is_a_deserialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Workspaces.json");
        std::fs::write(&path, "{\"workspaces\": [").unwrap();
        let store = JsonFileStore::new(&path);
        match store.read().await {
            Err(WorkspaceStoreError::Deserialization { snippet, .. }) => {
                assert_eq!(snippet.as_deref(), Some("{\"workspaces\": ["));
            }
            other => panic!("Expected Deserialization error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn duplicate_ids_are_rejected_on_read_and_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Workspaces.json");
        std::fs::write(
            &path,
            r#"{"workspaces":[{"id":"a","name":"A"},{"id":"a","name":"B"}]}"#,
        )
        .unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.read().await, Err(WorkspaceStoreError::InvalidData { .. })));

        let doc = WorkspaceDocument::new(vec![ws("x", "X"), ws("x", "Y")]);
        assert!(matches!(store.write(&doc).await, Err(WorkspaceStoreError::InvalidData { .. })));
    }

    #[test]
    fn from_config_uses_profile_dir() {
        let config = WorkspacesConfig {
            profile_dir: Some(PathBuf::from("/profiles/p1")),
            ..WorkspacesConfig::default()
        };
        let store = JsonFileStore::from_config(&config).unwrap();
        assert_eq!(store.path(), Path::new("/profiles/p1/tab-workspaces/Workspaces.json"));
    }
}
