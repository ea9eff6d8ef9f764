use std::sync::Arc;
use tracing::debug;

use super::errors::WorkspaceStoreError;
use super::provider::WorkspaceStore;
use crate::workspaces::core::{Workspace, WorkspaceDocument};

/// Lazily loaded copy of the persisted document.
///
/// Every write path drops the copy, so the next [`get`](Self::get) re-reads the store.
/// The cache lives inside the manager's locked state and has no locking of its own.
pub struct WorkspaceCache {
    store: Arc<dyn WorkspaceStore>,
    cached: Option<WorkspaceDocument>,
}

impl WorkspaceCache {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store, cached: None }
    }

    pub fn store(&self) -> &Arc<dyn WorkspaceStore> {
        &self.store
    }

    pub fn is_loaded(&self) -> bool {
        self.cached.is_some()
    }

    /// Returns the cached document, reading the store on a miss.
    pub async fn get(&mut self) -> Result<&WorkspaceDocument, WorkspaceStoreError> {
        let document = match self.cached.take() {
            Some(document) => document,
            None => {
                debug!("Workspace cache miss, reading store");
                self.store.read().await?
            }
        };
        Ok(&*self.cached.insert(document))
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Writes `document` as given, then invalidates.
    pub async fn persist(&mut self, document: &WorkspaceDocument) -> Result<(), WorkspaceStoreError> {
        let result = self.store.write(document).await;
        self.invalidate();
        result
    }

    /// Reads the store directly, appends `workspace`, writes, then invalidates.
    pub async fn append(&mut self, workspace: Workspace) -> Result<(), WorkspaceStoreError> {
        let mut document = self.store.read().await?;
        document.push(workspace);
        self.persist(&document).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspaces::core::WorkspaceId;
    use crate::workspaces::store::memory::InMemoryWorkspaceStore;
    use crate::workspaces::store::provider::MockWorkspaceStore;
    use mockall::Sequence;

    fn ws(id: &str) -> Workspace {
        Workspace::new(WorkspaceId::from(id), id.to_uppercase()).unwrap()
    }

    #[tokio::test]
    async fn get_reads_store_once_until_invalidated() {
        let mut mock = MockWorkspaceStore::new();
        mock.expect_read()
            .times(2)
            .returning(|| Ok(WorkspaceDocument::new(vec![ws("a")])));
        let mut cache = WorkspaceCache::new(Arc::new(mock));

        assert!(!cache.is_loaded());
        assert_eq!(cache.get().await.unwrap().len(), 1);
        assert_eq!(cache.get().await.unwrap().len(), 1);
        assert!(cache.is_loaded());

        cache.invalidate();
        assert!(!cache.is_loaded());
        cache.get().await.unwrap();
    }

    #[tokio::test]
    async fn persist_invalidates_even_when_the_write_fails() {
        let mut mock = MockWorkspaceStore::new();
        let mut seq = Sequence::new();
        mock.expect_read()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(WorkspaceDocument::default()));
        mock.expect_write()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Err(WorkspaceStoreError::Io {
                    path: "mock".to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
                })
            });
        let mut cache = WorkspaceCache::new(Arc::new(mock));

        let document = cache.get().await.unwrap().clone();
        assert!(matches!(cache.persist(&document).await, Err(WorkspaceStoreError::Io { .. })));
        assert!(!cache.is_loaded());
    }

    #[tokio::test]
    async fn write_then_get_round_trips_through_the_store() {
        let store = Arc::new(InMemoryWorkspaceStore::with_document(WorkspaceDocument::default()));
        let mut cache = WorkspaceCache::new(store.clone());
        let doc = WorkspaceDocument::new(vec![ws("a"), ws("b")]);

        cache.persist(&doc).await.unwrap();
        assert!(!cache.is_loaded());
        assert_eq!(cache.get().await.unwrap(), &doc);
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn append_bypasses_a_stale_cache() {
        let store = Arc::new(InMemoryWorkspaceStore::with_document(WorkspaceDocument::new(vec![ws("a")])));
        let mut cache = WorkspaceCache::new(store.clone());
        cache.get().await.unwrap();

        // Another writer changes the store behind the cache's back.
        store.write(&WorkspaceDocument::new(vec![ws("a"), ws("b")])).await.unwrap();

        cache.append(ws("c")).await.unwrap();
        let ids: Vec<String> = cache
            .get()
            .await
            .unwrap()
            .workspaces
            .iter()
            .map(|w| w.id().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
