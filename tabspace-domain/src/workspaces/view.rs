//! Presentation model handed to the UI after every mutation.

use serde::Serialize;

use crate::workspaces::core::{Workspace, WorkspaceDocument, WorkspaceId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceEntry {
    pub id: WorkspaceId,
    pub name: String,
    pub icon: Option<String>,
    /// Uppercased first letter of the name, shown when there is no icon.
    pub initial: String,
    pub is_default: bool,
    pub is_active: bool,
}

impl From<&Workspace> for WorkspaceEntry {
    fn from(ws: &Workspace) -> Self {
        Self {
            id: ws.id().clone(),
            name: ws.name().to_string(),
            icon: ws.icon().map(str::to_string),
            initial: ws.initial(),
            is_default: ws.is_default(),
            is_active: ws.is_active(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct WorkspacesView {
    pub current: Option<WorkspaceEntry>,
    /// Every other workspace, in document order.
    pub others: Vec<WorkspaceEntry>,
    /// The list is only shown when there is something to switch to.
    pub show_list: bool,
    pub button_label: String,
}

/// Pure projection of the document.
pub fn render(document: &WorkspaceDocument) -> WorkspacesView {
    let current = document.active().map(WorkspaceEntry::from);
    let others = document
        .workspaces
        .iter()
        .filter(|ws| !ws.is_active())
        .map(WorkspaceEntry::from)
        .collect();
    let button_label = current.as_ref().map(|entry| entry.initial.clone()).unwrap_or_default();

    WorkspacesView {
        current,
        others,
        show_list: document.len() > 1,
        button_label,
    }
}

/// Receiver of re-rendered views, typically the panel and toolbar button.
pub trait WorkspaceNotifier: Send + Sync {
    fn refresh(&self, view: &WorkspacesView);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl WorkspaceNotifier for NoopNotifier {
    fn refresh(&self, _view: &WorkspacesView) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ws(id: &str, name: &str) -> Workspace {
        Workspace::new(WorkspaceId::from(id), name).unwrap()
    }

    #[test]
    fn render_splits_current_from_others() {
        let doc = WorkspaceDocument::new(vec![
            ws("a", "alpha").with_default(true),
            ws("b", "beta").with_active(true),
            ws("c", "gamma"),
        ]);
        let view = render(&doc);

        let current = view.current.unwrap();
        assert_eq!(current.id, WorkspaceId::from("b"));
        assert_eq!(current.initial, "B");
        assert_eq!(view.button_label, "B");
        let others: Vec<&str> = view.others.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(others, vec!["alpha", "gamma"]);
        assert!(view.show_list);
    }

    #[test]
    fn single_workspace_hides_the_list() {
        let mut home = ws("a", "home").with_active(true);
        home.set_icon(Some("🏠".to_string()));
        let view = render(&WorkspaceDocument::new(vec![home]));
        assert!(!view.show_list);
        assert!(view.others.is_empty());
        assert_eq!(view.current.unwrap().icon.as_deref(), Some("🏠"));
    }

    #[test]
    fn empty_document_renders_empty_view() {
        assert_eq!(render(&WorkspaceDocument::default()), WorkspacesView::default());
    }
}
