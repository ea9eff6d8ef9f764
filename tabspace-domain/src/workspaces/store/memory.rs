use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

use super::errors::WorkspaceStoreError;
use super::provider::WorkspaceStore;
use crate::workspaces::core::WorkspaceDocument;

const MEMORY_PATH: &str = "<memory>";

/// Non-durable store. Counts successful writes.
#[derive(Debug, Default)]
pub struct InMemoryWorkspaceStore {
    document: Mutex<Option<WorkspaceDocument>>,
    writes: AtomicUsize,
}

impl InMemoryWorkspaceStore {
    /// An uninitialized store; `read` fails until `initialize` or `write` runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `document`.
    pub fn with_document(document: WorkspaceDocument) -> Self {
        Self { document: Mutex::new(Some(document)), writes: AtomicUsize::new(0) }
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn snapshot(&self) -> Option<WorkspaceDocument> {
        self.document.lock().await.clone()
    }
}

#[async_trait]
impl WorkspaceStore for InMemoryWorkspaceStore {
    async fn initialize(&self) -> Result<bool, WorkspaceStoreError> {
        let mut guard = self.document.lock().await;
        if guard.is_some() {
            return Ok(false);
        }
        *guard = Some(WorkspaceDocument::default());
        Ok(true)
    }

    async fn exists(&self) -> Result<bool, WorkspaceStoreError> {
        Ok(self.document.lock().await.is_some())
    }

    async fn read(&self) -> Result<WorkspaceDocument, WorkspaceStoreError> {
        self.document
            .lock()
            .await
            .clone()
            .ok_or_else(|| WorkspaceStoreError::NotInitialized { path: MEMORY_PATH.to_string() })
    }

    async fn write(&self, document: &WorkspaceDocument) -> Result<(), WorkspaceStoreError> {
        document
            .validate()
            .map_err(|reason| WorkspaceStoreError::invalid_data(reason, None))?;
        *self.document.lock().await = Some(document.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
