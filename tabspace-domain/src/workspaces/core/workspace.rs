use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::errors::{WorkspaceCoreError, MAX_WORKSPACE_NAME_LENGTH};
use super::types::WorkspaceId;

fn validate_name(name: &str) -> Result<(), WorkspaceCoreError> {
    if name.trim().is_empty() {
        return Err(WorkspaceCoreError::NameCannotBeEmpty);
    }
    let actual_len = name.chars().count();
    if actual_len > MAX_WORKSPACE_NAME_LENGTH {
        return Err(WorkspaceCoreError::NameTooLong {
            name: name.to_string(),
            max_len: MAX_WORKSPACE_NAME_LENGTH,
            actual_len,
        });
    }
    Ok(())
}

/// A named partition of tabs.
///
/// Serialized as `{id, name, icon, default, used}`; `used` is the active flag. Older
/// documents that stored the id under `uuid` are still accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(alias = "uuid")]
    id: WorkspaceId,
    name: String,
    #[serde(default)]
    icon: String,
    #[serde(rename = "default", default)]
    is_default: bool,
    #[serde(rename = "used", default)]
    is_active: bool,
}

impl Workspace {
    /// Builds an inactive, non-default workspace without an icon.
    pub fn new(id: WorkspaceId, name: impl Into<String>) -> Result<Self, WorkspaceCoreError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            id,
            name,
            icon: String::new(),
            is_default: false,
            is_active: false,
        })
    }

    pub fn id(&self) -> &WorkspaceId { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn is_default(&self) -> bool { self.is_default }
    pub fn is_active(&self) -> bool { self.is_active }

    /// The icon, `None` when unset (stored as an empty string).
    pub fn icon(&self) -> Option<&str> {
        if self.icon.is_empty() { None } else { Some(&self.icon) }
    }

    /// First character of the name, uppercased; what the toolbar button shows.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }

    pub fn rename(&mut self, new_name: impl Into<String>) -> Result<(), WorkspaceCoreError> {
        let new_name = new_name.into();
        validate_name(&new_name)?;
        self.name = new_name;
        Ok(())
    }

    pub fn set_icon(&mut self, icon: Option<String>) {
        self.icon = icon.unwrap_or_default();
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub(crate) fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    pub(crate) fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }
}

/// The persisted unit: workspaces in insertion order.
///
/// `{}` deserializes to an empty document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkspaceDocument {
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
}

impl WorkspaceDocument {
    pub fn new(workspaces: Vec<Workspace>) -> Self {
        Self { workspaces }
    }

    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.workspaces.len()
    }

    pub fn get(&self, id: &WorkspaceId) -> Option<&Workspace> {
        self.workspaces.iter().find(|ws| ws.id() == id)
    }

    pub fn get_mut(&mut self, id: &WorkspaceId) -> Option<&mut Workspace> {
        self.workspaces.iter_mut().find(|ws| ws.id() == id)
    }

    pub fn contains(&self, id: &WorkspaceId) -> bool {
        self.get(id).is_some()
    }

    /// First workspace flagged active.
    pub fn active(&self) -> Option<&Workspace> {
        self.workspaces.iter().find(|ws| ws.is_active())
    }

    /// First workspace flagged default.
    pub fn default_workspace(&self) -> Option<&Workspace> {
        self.workspaces.iter().find(|ws| ws.is_default())
    }

    pub fn active_count(&self) -> usize {
        self.workspaces.iter().filter(|ws| ws.is_active()).count()
    }

    /// Sets `is_active = (ws.id == id)` on every workspace. Returns whether `id` matched.
    pub fn set_active(&mut self, id: &WorkspaceId) -> bool {
        let mut matched = false;
        for ws in &mut self.workspaces {
            let is_target = ws.id() == id;
            matched |= is_target;
            ws.set_active(is_target);
        }
        matched
    }

    pub fn push(&mut self, workspace: Workspace) {
        self.workspaces.push(workspace);
    }

    /// Removes the workspace with `id`, keeping the order of the others.
    pub fn remove(&mut self, id: &WorkspaceId) -> Option<Workspace> {
        let position = self.workspaces.iter().position(|ws| ws.id() == id)?;
        Some(self.workspaces.remove(position))
    }

    /// Checks the invariants a stored document must satisfy: non-empty unique ids and
    /// non-empty names. The name length limit applies to user input only.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for ws in &self.workspaces {
            if ws.id().as_str().is_empty() {
                return Err("workspace id cannot be empty".to_string());
            }
            if !seen.insert(ws.id()) {
                return Err(format!("duplicate workspace id '{}'", ws.id()));
            }
            if ws.name().trim().is_empty() {
                return Err(format!("workspace '{}': {}", ws.id(), WorkspaceCoreError::NameCannotBeEmpty));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ws(id: &str, name: &str) -> Workspace {
        Workspace::new(WorkspaceId::from(id), name).unwrap()
    }

    #[test]
    fn new_workspace_is_inactive_without_icon() {
        let w = ws("a", "Research");
        assert_eq!(w.name(), "Research");
        assert!(!w.is_active());
        assert!(!w.is_default());
        assert_eq!(w.icon(), None);
        assert_eq!(w.initial(), "R");
    }

    #[test]
    fn new_workspace_rejects_bad_names() {
        assert_eq!(Workspace::new(WorkspaceId::from("a"), " ").unwrap_err(), WorkspaceCoreError::NameCannotBeEmpty);
        let long = "x".repeat(MAX_WORKSPACE_NAME_LENGTH + 1);
        assert!(matches!(
            Workspace::new(WorkspaceId::from("a"), long),
            Err(WorkspaceCoreError::NameTooLong { actual_len, .. }) if actual_len == MAX_WORKSPACE_NAME_LENGTH + 1
        ));
    }

    #[test]
    fn rename_and_icon() {
        let mut w = ws("a", "Old");
        w.rename("émigré").unwrap();
        assert_eq!(w.initial(), "É");
        assert!(w.rename("").is_err());
        assert_eq!(w.name(), "émigré");

        w.set_icon(Some("🔬".to_string()));
        assert_eq!(w.icon(), Some("🔬"));
        w.set_icon(None);
        assert_eq!(w.icon(), None);
    }

    #[test]
    fn serializes_with_persisted_field_names() {
        let w = ws("a", "Home").with_default(true).with_active(true);
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "a", "name": "Home", "icon": "", "default": true, "used": true})
        );
    }

    #[test]
    fn empty_object_is_empty_document() {
        let doc: WorkspaceDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn legacy_uuid_key_is_accepted() {
        let doc: WorkspaceDocument = serde_json::from_str(
            r#"{"workspaces":[{"uuid":"u-1","name":"Legacy","icon":"","default":false,"used":true}]}"#,
        )
        .unwrap();
        assert_eq!(doc.workspaces[0].id(), &WorkspaceId::from("u-1"));
        assert!(doc.workspaces[0].is_active());
    }

    #[test]
    fn set_active_is_exclusive() {
        let mut doc = WorkspaceDocument::new(vec![ws("a", "A").with_active(true), ws("b", "B"), ws("c", "C")]);
        assert!(doc.set_active(&WorkspaceId::from("b")));
        assert_eq!(doc.active_count(), 1);
        assert_eq!(doc.active().map(|w| w.id().as_str()), Some("b"));

        assert!(!doc.set_active(&WorkspaceId::from("zzz")));
        assert_eq!(doc.active_count(), 0);
    }

    #[test]
    fn remove_keeps_order() {
        let mut doc = WorkspaceDocument::new(vec![ws("a", "A"), ws("b", "B"), ws("c", "C")]);
        let removed = doc.remove(&WorkspaceId::from("b")).unwrap();
        assert_eq!(removed.name(), "B");
        let ids: Vec<&str> = doc.workspaces.iter().map(|w| w.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(doc.remove(&WorkspaceId::from("b")).is_none());
    }

    #[test]
    fn validate_detects_duplicates_and_empty_names() {
        let doc = WorkspaceDocument::new(vec![ws("a", "A"), ws("a", "Again")]);
        assert!(doc.validate().unwrap_err().contains("duplicate workspace id 'a'"));

        let doc: WorkspaceDocument =
            serde_json::from_str(r#"{"workspaces":[{"id":"a","name":""}]}"#).unwrap();
        assert!(doc.validate().is_err());

        assert!(WorkspaceDocument::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_ids() {
        let doc: WorkspaceDocument =
            serde_json::from_str(r#"{"workspaces":[{"id":"","name":"Nameless","used":true}]}"#).unwrap();
        assert_eq!(doc.validate().unwrap_err(), "workspace id cannot be empty");
    }

    #[test]
    fn validate_accepts_long_stored_names() {
        let long = "x".repeat(MAX_WORKSPACE_NAME_LENGTH + 1);
        let json = format!(r#"{{"workspaces":[{{"id":"a","name":"{}"}}]}}"#, long);
        let doc: WorkspaceDocument = serde_json::from_str(&json).unwrap();
        assert!(doc.validate().is_ok());
    }
}
