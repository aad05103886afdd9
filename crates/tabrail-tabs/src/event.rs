//! Change notifications
//!
//! Mutations enqueue events here instead of calling collaborators directly;
//! the host drains the queue with [`GroupCollection::take_events`] after each
//! operation and dispatches to the renderer and the session manager. A batch
//! scope withholds events until the outermost scope exits, so listeners only
//! ever observe the consistent post-state of a compound mutation.
//!
//! [`GroupCollection::take_events`]: crate::GroupCollection::take_events

use serde::{Deserialize, Serialize};

use crate::SessionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TabEvent {
    /// The globally selected session changed.
    TabSelected { session_id: SessionId },
    /// The session manager should release this session's resources.
    TabClosed { session_id: SessionId },
    /// The active group changed.
    GroupChanged { group_index: usize },
    /// The active group has no tabs and needs one.
    NewTabRequested,
    /// The final tab closed; the host should tear the component down.
    LastTabClosed,
}

#[derive(Debug, Default)]
pub(crate) struct EventQueue {
    ready: Vec<TabEvent>,
    pending: Vec<TabEvent>,
    batch_depth: usize,
}

impl EventQueue {
    pub(crate) fn emit(&mut self, event: TabEvent) {
        tracing::trace!(?event, "emit");
        if self.batch_depth > 0 {
            self.pending.push(event);
        } else {
            self.ready.push(event);
        }
    }

    pub(crate) fn begin_batch(&mut self) {
        self.batch_depth += 1;
    }

    pub(crate) fn end_batch(&mut self) {
        if self.batch_depth == 0 {
            return;
        }
        self.batch_depth -= 1;
        if self.batch_depth == 0 {
            self.ready.append(&mut self.pending);
        }
    }

    pub(crate) fn take(&mut self) -> Vec<TabEvent> {
        std::mem::take(&mut self.ready)
    }
}
