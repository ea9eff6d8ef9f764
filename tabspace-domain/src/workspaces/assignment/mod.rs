//! Tab assignment: the mapping between tabs and workspaces, stored as a tag on each tab.
//!
//! Membership is plain id equality between a tab's tag and a workspace id. Tabs whose
//! tag names a removed workspace belong to no live workspace.

use crate::workspaces::core::{TabId, WorkspaceId};
use crate::workspaces::tabs::{TabStrip, TabStripError};

/// Tags `tab` with `id` unless it already carries a tag.
///
/// # Returns
/// * `Ok(true)` if the tab was tagged by this call.
/// * `Ok(false)` if it was already assigned (to any workspace, live or not).
pub fn tag_unassigned<S: TabStrip + ?Sized>(
    strip: &mut S,
    tab: TabId,
    id: &WorkspaceId,
) -> Result<bool, TabStripError> {
    if strip.workspace_tag(tab)?.is_some() {
        return Ok(false);
    }
    strip.set_workspace_tag(tab, id)?;
    Ok(true)
}

pub fn is_assigned<S: TabStrip + ?Sized>(strip: &S, tab: TabId) -> Result<bool, TabStripError> {
    Ok(strip.workspace_tag(tab)?.is_some())
}

/// Tabs tagged with `id`, in strip order.
pub fn tabs_for<S: TabStrip + ?Sized>(strip: &S, id: &WorkspaceId) -> Result<Vec<TabId>, TabStripError> {
    let mut tabs = Vec::new();
    for tab in strip.tabs() {
        if strip.workspace_tag(tab)?.as_ref() == Some(id) {
            tabs.push(tab);
        }
    }
    Ok(tabs)
}

/// Number of tabs whose tag is not `id`. Untagged tabs count.
pub fn count_not_in<S: TabStrip + ?Sized>(strip: &S, id: &WorkspaceId) -> Result<usize, TabStripError> {
    let mut count = 0;
    for tab in strip.tabs() {
        if strip.workspace_tag(tab)?.as_ref() != Some(id) {
            count += 1;
        }
    }
    Ok(count)
}

pub fn set_hidden<S: TabStrip + ?Sized>(strip: &mut S, tab: TabId, hidden: bool) -> Result<(), TabStripError> {
    strip.set_hidden(tab, hidden)
}

/// Tags every untagged tab with `id`. Returns how many were tagged.
pub fn tag_all_unassigned<S: TabStrip + ?Sized>(strip: &mut S, id: &WorkspaceId) -> Result<usize, TabStripError> {
    let mut tagged = 0;
    for tab in strip.tabs() {
        if tag_unassigned(&mut *strip, tab, id)? {
            tagged += 1;
        }
    }
    Ok(tagged)
}

/// Moves every tab tagged `from` to `to`. Returns how many were retagged.
pub fn retag<S: TabStrip + ?Sized>(
    strip: &mut S,
    from: &WorkspaceId,
    to: &WorkspaceId,
) -> Result<usize, TabStripError> {
    let tabs = tabs_for(&*strip, from)?;
    for tab in &tabs {
        strip.set_workspace_tag(*tab, to)?;
    }
    Ok(tabs.len())
}

/// Tags `tab` with `id` regardless of its current tag.
///
/// # Returns
/// The previous tag, if any.
pub fn move_tab<S: TabStrip + ?Sized>(
    strip: &mut S,
    tab: TabId,
    id: &WorkspaceId,
) -> Result<Option<WorkspaceId>, TabStripError> {
    let previous = strip.workspace_tag(tab)?;
    strip.set_workspace_tag(tab, id)?;
    Ok(previous)
}
