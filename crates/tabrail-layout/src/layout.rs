//! Persisted layout data shapes
//!
//! The on-disk grammar is deliberately thin: an ordered list of group
//! entries, each with an ordered list of tab entries. Exactly one group
//! and, per group, at most one tab carry the selected marker; when several
//! do, the last one wins.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Tab-name sentinel meaning "use the generated default title".
pub const AUTO_TITLE: &str = "auto";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub groups: Vec<GroupEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEntry {
    pub name: String,
    /// Restored groups are locked unless the entry says otherwise, so a
    /// saved layout is not dismantled by a stray close shortcut.
    #[serde(default = "default_locked")]
    pub locked: bool,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub tabs: Vec<TabEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabEntry {
    pub name: String,
    #[serde(default)]
    pub selected: bool,
    /// Command to hand to the session manager once the session exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exec: Option<String>,
}

fn default_locked() -> bool {
    true
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Index of the group to activate after restoration.
    pub fn selected_group(&self) -> usize {
        self.groups
            .iter()
            .rposition(|group| group.selected)
            .unwrap_or(0)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let layout = serde_json::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded layout");
        Ok(layout)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        tracing::debug!(path = %path.display(), groups = self.groups.len(), "saved layout");
        Ok(())
    }
}

impl GroupEntry {
    /// Index of the tab to select within this group.
    pub fn selected_tab(&self) -> usize {
        self.tabs
            .iter()
            .rposition(|tab| tab.selected)
            .unwrap_or(0)
    }
}
