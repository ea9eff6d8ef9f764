use async_trait::async_trait;
use std::sync::Arc;
use tabspace_core::config::{OrphanedTabPolicy, WorkspacesConfig};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, error, info, warn};

use crate::workspaces::assignment;
use crate::workspaces::core::{
    IdGenerator, TabId, UuidV4Generator, Workspace, WorkspaceDocument, WorkspaceId,
};
use crate::workspaces::events::WorkspaceEvent;
use crate::workspaces::store::{WorkspaceCache, WorkspaceStore};
use crate::workspaces::tabs::TabStrip;
use crate::workspaces::view::{render, WorkspaceNotifier, WorkspacesView};

pub mod errors;

pub use errors::WorkspaceManagerError;

/// Upper bound on id regeneration when a generated id collides with a stored one.
const MAX_ID_ATTEMPTS: usize = 8;

// --- WorkspaceManagerService Trait ---

#[async_trait]
pub trait WorkspaceManagerService: Send + Sync {
    /// Prepares the store, ensures a workspace exists and is active, and shows it.
    async fn initialize(&self) -> Result<(), WorkspaceManagerError>;
    async fn switch_workspace(&self, id: WorkspaceId) -> Result<(), WorkspaceManagerError>;
    /// Returns `Ok(None)` when the feature is disabled.
    async fn create_workspace(&self, name: Option<String>) -> Result<Option<WorkspaceId>, WorkspaceManagerError>;
    async fn remove_workspace(&self, id: WorkspaceId) -> Result<(), WorkspaceManagerError>;
    async fn rename_workspace(&self, id: WorkspaceId, new_name: String) -> Result<(), WorkspaceManagerError>;
    async fn set_workspace_icon(&self, id: WorkspaceId, icon: Option<String>) -> Result<(), WorkspaceManagerError>;
    /// Tags an untagged tab with the current workspace. Returns whether it was tagged.
    async fn assign_tab_to_active_workspace(&self, tab: TabId) -> Result<bool, WorkspaceManagerError>;
    async fn move_tab_to_workspace(&self, tab: TabId, id: WorkspaceId) -> Result<(), WorkspaceManagerError>;
    async fn document(&self) -> Result<WorkspaceDocument, WorkspaceManagerError>;
    async fn active_workspace(&self) -> Result<Option<Workspace>, WorkspaceManagerError>;
    /// The workspace the tab strip is currently showing, as last switched to.
    async fn current_workspace_id(&self) -> Option<WorkspaceId>;
    async fn view(&self) -> Result<WorkspacesView, WorkspaceManagerError>;
    fn is_enabled(&self) -> bool;
    fn subscribe(&self) -> broadcast::Receiver<WorkspaceEvent>;
}

// --- WorkspaceManagerState Struct ---

struct WorkspaceManagerState {
    cache: WorkspaceCache,
    tab_strip: Box<dyn TabStrip>,
    current: Option<WorkspaceId>,
}

// --- DefaultWorkspaceManager Implementation ---

/// Every entry point holds the state lock for its whole duration, so protocols never
/// interleave.
#[derive(Clone)]
pub struct DefaultWorkspaceManager {
    internal: Arc<Mutex<WorkspaceManagerState>>,
    config: Arc<WorkspacesConfig>,
    id_generator: Arc<dyn IdGenerator>,
    notifier: Arc<dyn WorkspaceNotifier>,
    event_publisher: broadcast::Sender<WorkspaceEvent>,
}

impl DefaultWorkspaceManager {
    pub fn new(
        config: WorkspacesConfig,
        store: Arc<dyn WorkspaceStore>,
        tab_strip: Box<dyn TabStrip>,
        notifier: Arc<dyn WorkspaceNotifier>,
        broadcast_capacity: usize,
    ) -> Self {
        let (event_publisher, _) = broadcast::channel(broadcast_capacity);
        let state = WorkspaceManagerState {
            cache: WorkspaceCache::new(store),
            tab_strip,
            current: None,
        };
        Self {
            internal: Arc::new(Mutex::new(state)),
            config: Arc::new(config),
            id_generator: Arc::new(UuidV4Generator),
            notifier,
            event_publisher,
        }
    }

    pub fn with_id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    fn publish(&self, event: WorkspaceEvent) {
        let _ = self.event_publisher.send(event);
    }

    fn fresh_id(&self, document: &WorkspaceDocument) -> Result<WorkspaceId, WorkspaceManagerError> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.id_generator.generate();
            if !document.contains(&id) {
                return Ok(id);
            }
            warn!(attempt, "Generated workspace id '{}' already exists, regenerating", id);
        }
        Err(WorkspaceManagerError::DuplicateWorkspaceId { attempts: MAX_ID_ATTEMPTS })
    }

    async fn refresh_view(&self, state: &mut WorkspaceManagerState) -> Result<(), WorkspaceManagerError> {
        let document = state.cache.get().await?;
        self.notifier.refresh(&render(document));
        Ok(())
    }

    async fn switch_locked(
        &self,
        state: &mut WorkspaceManagerState,
        id: WorkspaceId,
    ) -> Result<(), WorkspaceManagerError> {
        if state.current.as_ref() == Some(&id) {
            debug!("Workspace '{}' is already current, nothing to switch", id);
            return Ok(());
        }

        let mut document = state.cache.get().await?.clone();
        if !document.contains(&id) {
            return Err(WorkspaceManagerError::UnknownWorkspace(id));
        }

        // Written before any tab changes, so a failed write leaves the strip as it was.
        document.set_active(&id);
        state.cache.persist(&document).await?;

        let strip = &mut *state.tab_strip;
        let total = strip.tabs().len();
        if assignment::count_not_in(&*strip, &id)? == total {
            let tab = strip.open_tab();
            assignment::tag_unassigned(strip, tab, &id)?;
            debug!("Workspace '{}' had no tabs, opened {}", id, tab);
        }

        let mut first_tab = None;
        for tab in assignment::tabs_for(&*strip, &id)? {
            assignment::set_hidden(strip, tab, false)?;
            first_tab.get_or_insert(tab);
        }
        for tab in strip.tabs() {
            if strip.workspace_tag(tab)?.as_ref() != Some(&id) {
                assignment::set_hidden(strip, tab, true)?;
            }
        }

        let first_tab = first_tab.ok_or_else(|| WorkspaceManagerError::Internal {
            context: format!("workspace '{}' has no tab to select after switching", id),
        })?;
        state.tab_strip.select(first_tab)?;

        let old_id = state.current.replace(id.clone());
        info!(old = ?old_id, "Switched to workspace '{}'", id);
        self.publish(WorkspaceEvent::ActiveWorkspaceChanged { old_id, new_id: id });
        self.notifier.refresh(&render(&document));
        Ok(())
    }

    async fn create_locked(
        &self,
        state: &mut WorkspaceManagerState,
        name: String,
    ) -> Result<WorkspaceId, WorkspaceManagerError> {
        let document = state.cache.get().await?.clone();
        let id = self.fresh_id(&document)?;
        let workspace = Workspace::new(id.clone(), name.clone())?
            .with_default(document.default_workspace().is_none())
            .with_active(true);

        state.cache.append(workspace).await?;
        let tagged = assignment::tag_all_unassigned(&mut *state.tab_strip, &id)?;
        info!(tagged_tabs = tagged, "Created workspace '{}' ({})", name, id);

        self.publish(WorkspaceEvent::WorkspaceCreated {
            id: id.clone(),
            name,
            position: document.len(),
        });
        self.switch_locked(state, id.clone()).await?;
        Ok(id)
    }

    /// Picks the workspace to show after startup, persisting any correction it makes.
    async fn resolve_active(
        &self,
        state: &mut WorkspaceManagerState,
        mut document: WorkspaceDocument,
    ) -> Result<WorkspaceId, WorkspaceManagerError> {
        if let Some(active) = document.active() {
            return Ok(active.id().clone());
        }

        if let Some(default) = document.default_workspace() {
            let id = default.id().clone();
            info!("No active workspace stored, falling back to default '{}'", id);
            document.set_active(&id);
            state.cache.persist(&document).await?;
            return Ok(id);
        }

        if !self.config.repair_missing_default {
            return Err(WorkspaceManagerError::InconsistentState(
                "no workspace is flagged active or default".to_string(),
            ));
        }

        let first = document.workspaces.first_mut().ok_or_else(|| WorkspaceManagerError::Internal {
            context: "cannot repair an empty workspace document".to_string(),
        })?;
        first.set_default(true);
        let id = first.id().clone();
        error!("Workspace document has neither an active nor a default workspace; promoting '{}'", id);
        document.set_active(&id);
        state.cache.persist(&document).await?;
        self.publish(WorkspaceEvent::DefaultWorkspaceRepaired { id: id.clone() });
        Ok(id)
    }

    /// Picks a visible tab of the current workspace to select instead of `leaving`.
    fn reselect_in_current(
        strip: &mut dyn TabStrip,
        current: &WorkspaceId,
        leaving: TabId,
    ) -> Result<TabId, WorkspaceManagerError> {
        for tab in assignment::tabs_for(&*strip, current)? {
            if tab != leaving && !strip.is_hidden(tab)? {
                strip.select(tab)?;
                return Ok(tab);
            }
        }
        let tab = strip.open_tab();
        assignment::tag_unassigned(strip, tab, current)?;
        Ok(tab)
    }
}

#[async_trait]
impl WorkspaceManagerService for DefaultWorkspaceManager {
    async fn initialize(&self) -> Result<(), WorkspaceManagerError> {
        let mut guard = self.internal.lock().await;
        let state = &mut *guard;

        if state.cache.store().initialize().await? {
            info!("Initialized empty workspace store");
        }
        if !self.config.enabled {
            info!("Workspaces are disabled, skipping initialization");
            return Ok(());
        }

        state.cache.invalidate();
        let document = state.cache.get().await?.clone();
        if document.is_empty() {
            info!("No workspaces stored, creating '{}'", self.config.default_workspace_name);
            self.create_locked(state, self.config.default_workspace_name.clone()).await?;
            return Ok(());
        }

        let active_id = self.resolve_active(state, document).await?;
        let adopted = assignment::tag_all_unassigned(&mut *state.tab_strip, &active_id)?;
        if adopted > 0 {
            debug!("Tagged {} unassigned tabs with '{}'", adopted, active_id);
        }
        self.switch_locked(state, active_id).await
    }

    async fn switch_workspace(&self, id: WorkspaceId) -> Result<(), WorkspaceManagerError> {
        if !self.config.enabled {
            return Ok(());
        }
        let mut guard = self.internal.lock().await;
        self.switch_locked(&mut guard, id).await
    }

    async fn create_workspace(&self, name: Option<String>) -> Result<Option<WorkspaceId>, WorkspaceManagerError> {
        if !self.config.enabled {
            return Ok(None);
        }
        let name = name.unwrap_or_else(|| self.config.new_workspace_name.clone());
        let mut guard = self.internal.lock().await;
        self.create_locked(&mut guard, name).await.map(Some)
    }

    async fn remove_workspace(&self, id: WorkspaceId) -> Result<(), WorkspaceManagerError> {
        if !self.config.enabled {
            return Ok(());
        }
        let mut guard = self.internal.lock().await;
        let state = &mut *guard;

        state.cache.invalidate();
        let mut document = state.cache.get().await?.clone();
        if !document.contains(&id) {
            return Err(WorkspaceManagerError::UnknownWorkspace(id));
        }
        if document.len() == 1 {
            return Err(WorkspaceManagerError::CannotRemoveLastWorkspace(id));
        }

        let removed = document.remove(&id).ok_or_else(|| WorkspaceManagerError::Internal {
            context: format!("workspace '{}' vanished during removal", id),
        })?;
        if removed.is_default() {
            if let Some(first) = document.workspaces.first_mut() {
                first.set_default(true);
                info!("Default workspace removed, '{}' is the new default", first.id());
            }
        }
        let fallback = document
            .default_workspace()
            .or_else(|| document.workspaces.first())
            .map(|ws| ws.id().clone())
            .ok_or_else(|| WorkspaceManagerError::Internal {
                context: "no workspace left after removal".to_string(),
            })?;

        let was_current = state.current.as_ref() == Some(&id) || removed.is_active();
        let orphans = assignment::tabs_for(&*state.tab_strip, &id)?;
        let reassigned_to = match self.config.orphaned_tabs {
            OrphanedTabPolicy::Keep => None,
            OrphanedTabPolicy::ReassignToDefault => {
                assignment::retag(&mut *state.tab_strip, &id, &fallback)?;
                Some(fallback.clone())
            }
        };

        state.cache.persist(&document).await?;
        info!(orphaned_tabs = orphans.len(), "Removed workspace '{}'", id);
        self.publish(WorkspaceEvent::WorkspaceRemoved {
            id: id.clone(),
            orphaned_tabs: orphans.len(),
            reassigned_to: reassigned_to.clone(),
        });

        if was_current {
            state.current = None;
            return self.switch_locked(state, fallback).await;
        }

        if reassigned_to.is_some() && state.current.as_ref() == Some(&fallback) {
            for tab in orphans {
                assignment::set_hidden(&mut *state.tab_strip, tab, false)?;
            }
        }
        self.refresh_view(state).await
    }

    async fn rename_workspace(&self, id: WorkspaceId, new_name: String) -> Result<(), WorkspaceManagerError> {
        if !self.config.enabled {
            return Ok(());
        }
        let mut guard = self.internal.lock().await;
        let state = &mut *guard;

        let mut document = state.cache.get().await?.clone();
        let workspace = document
            .get_mut(&id)
            .ok_or_else(|| WorkspaceManagerError::UnknownWorkspace(id.clone()))?;
        let old_name = workspace.name().to_string();
        workspace.rename(new_name.clone())?;

        state.cache.persist(&document).await?;
        debug!("Renamed workspace '{}' from '{}' to '{}'", id, old_name, new_name);
        self.publish(WorkspaceEvent::WorkspaceRenamed { id, old_name, new_name });
        self.notifier.refresh(&render(&document));
        Ok(())
    }

    async fn set_workspace_icon(&self, id: WorkspaceId, icon: Option<String>) -> Result<(), WorkspaceManagerError> {
        if !self.config.enabled {
            return Ok(());
        }
        let mut guard = self.internal.lock().await;
        let state = &mut *guard;

        let mut document = state.cache.get().await?.clone();
        document
            .get_mut(&id)
            .ok_or_else(|| WorkspaceManagerError::UnknownWorkspace(id.clone()))?
            .set_icon(icon.clone());

        state.cache.persist(&document).await?;
        self.publish(WorkspaceEvent::WorkspaceIconChanged { id, icon });
        self.notifier.refresh(&render(&document));
        Ok(())
    }

    async fn assign_tab_to_active_workspace(&self, tab: TabId) -> Result<bool, WorkspaceManagerError> {
        if !self.config.enabled {
            return Ok(false);
        }
        let mut guard = self.internal.lock().await;
        let state = &mut *guard;

        let current = state.current.clone().ok_or(WorkspaceManagerError::NoActiveWorkspace)?;
        let strip = &mut *state.tab_strip;
        if !assignment::tag_unassigned(strip, tab, &current)? {
            return Ok(false);
        }
        if strip.is_hidden(tab)? {
            assignment::set_hidden(strip, tab, false)?;
        }
        debug!("Adopted {} into workspace '{}'", tab, current);
        Ok(true)
    }

    async fn move_tab_to_workspace(&self, tab: TabId, id: WorkspaceId) -> Result<(), WorkspaceManagerError> {
        if !self.config.enabled {
            return Ok(());
        }
        let mut guard = self.internal.lock().await;
        let state = &mut *guard;

        let current = state.current.clone().ok_or(WorkspaceManagerError::NoActiveWorkspace)?;
        if !state.cache.get().await?.contains(&id) {
            return Err(WorkspaceManagerError::UnknownWorkspace(id));
        }

        let strip = &mut *state.tab_strip;
        let from = assignment::move_tab(strip, tab, &id)?;
        if id == current {
            if strip.is_hidden(tab)? {
                assignment::set_hidden(strip, tab, false)?;
            }
        } else {
            if strip.selected() == Some(tab) {
                let replacement = Self::reselect_in_current(strip, &current, tab)?;
                debug!("Selected {} after moving {} away", replacement, tab);
            }
            assignment::set_hidden(strip, tab, true)?;
        }

        debug!("Moved {} from {:?} to '{}'", tab, from, id);
        self.publish(WorkspaceEvent::TabMoved { tab, from, to: id });
        Ok(())
    }

    async fn document(&self) -> Result<WorkspaceDocument, WorkspaceManagerError> {
        if !self.config.enabled {
            return Ok(WorkspaceDocument::default());
        }
        let mut guard = self.internal.lock().await;
        Ok(guard.cache.get().await?.clone())
    }

    async fn active_workspace(&self) -> Result<Option<Workspace>, WorkspaceManagerError> {
        Ok(self.document().await?.active().cloned())
    }

    async fn current_workspace_id(&self) -> Option<WorkspaceId> {
        self.internal.lock().await.current.clone()
    }

    async fn view(&self) -> Result<WorkspacesView, WorkspaceManagerError> {
        Ok(render(&self.document().await?))
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    fn subscribe(&self) -> broadcast::Receiver<WorkspaceEvent> {
        self.event_publisher.subscribe()
    }
}
