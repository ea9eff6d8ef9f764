use thiserror::Error;

use crate::workspaces::core::TabId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabStripError {
    #[error("Tab '{0}' not found in the tab strip.")]
    TabNotFound(TabId),
}
