use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{TabStrip, TabStripError};
use crate::workspaces::core::{TabId, WorkspaceId};

#[derive(Debug, Clone)]
struct TabState {
    id: TabId,
    tag: Option<WorkspaceId>,
    hidden: bool,
}

#[derive(Debug, Default)]
struct StripState {
    tabs: Vec<TabState>,
    selected: Option<TabId>,
    next_id: u64,
    visibility_mutations: usize,
    opened_by_strip: usize,
}

impl StripState {
    fn push(&mut self, tag: Option<WorkspaceId>) -> TabId {
        self.next_id += 1;
        let id = TabId(self.next_id);
        self.tabs.push(TabState { id, tag, hidden: false });
        id
    }

    fn tab(&self, id: TabId) -> Result<&TabState, TabStripError> {
        self.tabs.iter().find(|t| t.id == id).ok_or(TabStripError::TabNotFound(id))
    }

    fn tab_mut(&mut self, id: TabId) -> Result<&mut TabState, TabStripError> {
        self.tabs.iter_mut().find(|t| t.id == id).ok_or(TabStripError::TabNotFound(id))
    }
}

/// Headless tab strip.
///
/// Clones share the same strip, so a caller can keep a handle for inspection after
/// handing one to the workspace manager.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTabStrip {
    state: Arc<Mutex<StripState>>,
}

impl InMemoryTabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StripState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a visible tab as if the user opened it outside the workspace manager.
    /// The first tab added becomes the selected one.
    pub fn add_tab(&self, tag: Option<&str>) -> TabId {
        let mut state = self.lock();
        let id = state.push(tag.map(WorkspaceId::from));
        if state.selected.is_none() {
            state.selected = Some(id);
        }
        id
    }

    /// Closes `tab`; selection moves to the first remaining visible tab.
    pub fn close_tab(&self, tab: TabId) -> Result<(), TabStripError> {
        let mut state = self.lock();
        let position = state
            .tabs
            .iter()
            .position(|t| t.id == tab)
            .ok_or(TabStripError::TabNotFound(tab))?;
        state.tabs.remove(position);
        if state.selected == Some(tab) {
            state.selected = state.tabs.iter().find(|t| !t.hidden).map(|t| t.id);
        }
        Ok(())
    }

    /// Number of `set_hidden` calls so far.
    pub fn visibility_mutations(&self) -> usize {
        self.lock().visibility_mutations
    }

    /// Number of tabs created through [`TabStrip::open_tab`].
    pub fn opened_tabs(&self) -> usize {
        self.lock().opened_by_strip
    }

    pub fn reset_counters(&self) {
        let mut state = self.lock();
        state.visibility_mutations = 0;
        state.opened_by_strip = 0;
    }

    pub fn visible_tabs(&self) -> Vec<TabId> {
        self.lock().tabs.iter().filter(|t| !t.hidden).map(|t| t.id).collect()
    }

    pub fn hidden_tabs(&self) -> Vec<TabId> {
        self.lock().tabs.iter().filter(|t| t.hidden).map(|t| t.id).collect()
    }
}

impl TabStrip for InMemoryTabStrip {
    fn tabs(&self) -> Vec<TabId> {
        self.lock().tabs.iter().map(|t| t.id).collect()
    }

    fn workspace_tag(&self, tab: TabId) -> Result<Option<WorkspaceId>, TabStripError> {
        Ok(self.lock().tab(tab)?.tag.clone())
    }

    fn set_workspace_tag(&mut self, tab: TabId, id: &WorkspaceId) -> Result<(), TabStripError> {
        self.lock().tab_mut(tab)?.tag = Some(id.clone());
        Ok(())
    }

    fn is_hidden(&self, tab: TabId) -> Result<bool, TabStripError> {
        Ok(self.lock().tab(tab)?.hidden)
    }

    fn set_hidden(&mut self, tab: TabId, hidden: bool) -> Result<(), TabStripError> {
        let mut state = self.lock();
        state.tab_mut(tab)?.hidden = hidden;
        state.visibility_mutations += 1;
        Ok(())
    }

    fn open_tab(&mut self) -> TabId {
        let mut state = self.lock();
        let id = state.push(None);
        state.selected = Some(id);
        state.opened_by_strip += 1;
        id
    }

    fn select(&mut self, tab: TabId) -> Result<(), TabStripError> {
        let mut state = self.lock();
        state.tab(tab)?;
        state.selected = Some(tab);
        Ok(())
    }

    fn selected(&self) -> Option<TabId> {
        self.lock().selected
    }
}
