//! Contract with the browser's tab strip.
//!
//! The tab strip owns tabs, their selection and visibility, and stores one string
//! attribute per tab: the workspace tag. Only the assignment layer writes that tag.

pub mod errors;
pub mod memory;

pub use errors::TabStripError;
pub use memory::InMemoryTabStrip;

use crate::workspaces::core::{TabId, WorkspaceId};

pub trait TabStrip: Send {
    /// All open tabs in strip order.
    fn tabs(&self) -> Vec<TabId>;

    fn workspace_tag(&self, tab: TabId) -> Result<Option<WorkspaceId>, TabStripError>;

    fn set_workspace_tag(&mut self, tab: TabId, id: &WorkspaceId) -> Result<(), TabStripError>;

    fn is_hidden(&self, tab: TabId) -> Result<bool, TabStripError>;

    fn set_hidden(&mut self, tab: TabId, hidden: bool) -> Result<(), TabStripError>;

    /// Opens a visible, untagged tab on the home page and selects it.
    fn open_tab(&mut self) -> TabId;

    fn select(&mut self, tab: TabId) -> Result<(), TabStripError>;

    fn selected(&self) -> Option<TabId>;
}
