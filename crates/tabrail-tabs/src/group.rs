//! Group data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tab::Tab;
use crate::SessionId;

/// An ordered, optionally locked container of tabs with its own selection.
///
/// `selected_tab` is a valid index whenever `tabs` is non-empty; when the
/// group is empty the field is ignored. Readers clamp before indexing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Tabs in display order
    pub tabs: Vec<Tab>,
    /// Display title
    pub title: String,
    /// A locked group refuses interactive closure
    pub locked: bool,
    /// Index of the group's selected tab
    pub selected_tab: usize,
    /// When the group was created
    pub created_at: DateTime<Utc>,
}

impl Group {
    pub fn new(title: String, locked: bool) -> Self {
        Self {
            tabs: Vec::new(),
            title,
            locked,
            selected_tab: 0,
            created_at: Utc::now(),
        }
    }

    /// Position of a session within this group, if present.
    pub fn tab_index_of(&self, session_id: SessionId) -> Option<usize> {
        self.tabs.iter().position(|t| t.session_id == session_id)
    }

    /// The session at `selected_tab`, clamped into range.
    pub fn selected_session(&self) -> Option<SessionId> {
        if self.tabs.is_empty() {
            return None;
        }
        let index = self.selected_tab.min(self.tabs.len() - 1);
        Some(self.tabs[index].session_id)
    }

    /// Reposition a tab, shifting the tabs between the two positions.
    pub(crate) fn move_tab(&mut self, from: usize, to: usize) {
        let tab = self.tabs.remove(from);
        let to = to.min(self.tabs.len());
        self.tabs.insert(to, tab);
    }

    /// Pull `selected_tab` back into range after a removal.
    pub(crate) fn clamp_selected(&mut self) {
        if !self.tabs.is_empty() {
            self.selected_tab = self.selected_tab.min(self.tabs.len() - 1);
        }
    }
}
