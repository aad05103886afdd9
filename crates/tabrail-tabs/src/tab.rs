//! Tab data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SessionId;

/// A named handle to one terminal session within a group.
///
/// The session itself (the shell process) lives in the external session
/// manager; the tab only carries its id and display title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    /// Session this tab represents; unique across the whole collection
    pub session_id: SessionId,
    /// Display title
    pub title: String,
    /// Set once the user renames the tab; automatic retitling is then
    /// rejected until the flag is cleared by an empty interactive rename
    pub title_is_user_set: bool,
    /// When the tab was created
    pub created_at: DateTime<Utc>,
    /// Last time the tab became the global selection
    pub last_selected_at: DateTime<Utc>,
}

impl Tab {
    pub fn new(session_id: SessionId, title: String) -> Self {
        let now = Utc::now();

        Self {
            session_id,
            title,
            title_is_user_set: false,
            created_at: now,
            last_selected_at: now,
        }
    }

    /// Record that the tab became the global selection.
    pub fn mark_selected(&mut self) {
        self.last_selected_at = Utc::now();
    }
}
