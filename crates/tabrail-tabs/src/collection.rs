//! Group collection
//!
//! Owns every group, the active-group index, and the global selection, and
//! is the single entry point for all mutations. Invariants maintained
//! across every public operation:
//!
//! - session ids are unique across all groups
//! - `active_group` indexes into `groups` whenever groups exist
//! - each group's `selected_tab` indexes into its tabs whenever it has any
//! - the global selection is a member of the active group, or `None` only
//!   in the transient empty-active-group state
//!
//! Operations validate their inputs and return an error without touching
//! state; there is no partial mutation and no panic path.

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::event::{EventQueue, TabEvent};
use crate::group::Group;
use crate::tab::Tab;
use crate::titles;
use crate::{Result, SessionId};

/// Which neighbor a tab moves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Default)]
pub struct GroupCollection {
    groups: Vec<Group>,
    active_group: usize,
    selected_session: Option<SessionId>,
    events: EventQueue,
}

impl GroupCollection {
    pub fn new() -> Self {
        Self::default()
    }

    // === Queries ===

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn active_group_index(&self) -> usize {
        self.active_group
    }

    pub fn active_group(&self) -> Option<&Group> {
        self.groups.get(self.active_group)
    }

    /// The globally selected session; `None` only while the active group is
    /// empty (a transient state) or before the first tab exists.
    pub fn selected_session(&self) -> Option<SessionId> {
        self.selected_session
    }

    /// Locate a session anywhere in the collection.
    pub fn find_tab(&self, session_id: SessionId) -> Option<(usize, usize)> {
        self.groups.iter().enumerate().find_map(|(group_index, group)| {
            group
                .tab_index_of(session_id)
                .map(|tab_index| (group_index, tab_index))
        })
    }

    /// Session at a position in the active group.
    pub fn session_at_tab(&self, index: usize) -> Option<SessionId> {
        self.active_group()
            .and_then(|group| group.tabs.get(index))
            .map(|tab| tab.session_id)
    }

    pub fn tab_title(&self, session_id: SessionId) -> Option<&str> {
        let (group_index, tab_index) = self.find_tab(session_id)?;
        Some(self.groups[group_index].tabs[tab_index].title.as_str())
    }

    // === Events ===

    /// Drain all events emitted since the last drain.
    pub fn take_events(&mut self) -> Vec<TabEvent> {
        self.events.take()
    }

    /// Enter a batch scope: events are withheld from [`take_events`] until
    /// the outermost scope exits.
    ///
    /// [`take_events`]: Self::take_events
    pub fn begin_update(&mut self) {
        self.events.begin_batch();
    }

    pub fn end_update(&mut self) {
        self.events.end_batch();
    }

    // === Group operations ===

    /// Append a group and make it active, without requesting a tab.
    ///
    /// Callers that do not immediately populate the group should use
    /// [`add_group`] instead; an empty group is a transient pre-state.
    ///
    /// [`add_group`]: Self::add_group
    pub fn push_group(&mut self, title: Option<String>, locked: bool) -> usize {
        let title = match title.filter(|t| !t.is_empty()) {
            Some(title) => title,
            None => self.standard_group_title(),
        };

        tracing::debug!(title = %title, locked, "adding group");

        self.groups.push(Group::new(title, locked));
        self.active_group = self.groups.len() - 1;
        // The new group has no tabs yet, so there is no selection to carry.
        self.selected_session = None;
        self.events.emit(TabEvent::GroupChanged {
            group_index: self.active_group,
        });

        self.active_group
    }

    /// Append a group, make it active, and request its first tab.
    pub fn add_group(&mut self, title: Option<String>, locked: bool) -> usize {
        let index = self.push_group(title, locked);
        self.events.emit(TabEvent::NewTabRequested);
        index
    }

    /// Close the active group and signal closure of every tab it held.
    ///
    /// Refused while the group is locked or is the only one. The previous
    /// group becomes active if the closed group was last, otherwise the
    /// group now occupying the same index.
    pub fn close_active_group(&mut self) -> Result<()> {
        if self.groups.len() < 2 {
            return Err(TabError::LastGroup);
        }

        let group = self.active()?;
        if group.locked {
            return Err(TabError::GroupLocked(self.active_group));
        }

        let closed: Vec<SessionId> = group.tabs.iter().map(|t| t.session_id).collect();
        let removed = self.active_group;
        let next = if removed + 1 == self.groups.len() {
            removed - 1
        } else {
            removed
        };

        tracing::info!(group = removed, tabs = closed.len(), "closing group");

        self.begin_update();
        self.groups.remove(removed);
        let selected = self.select_group(next);
        self.end_update();
        selected?;

        for session_id in closed {
            self.events.emit(TabEvent::TabClosed { session_id });
        }

        Ok(())
    }

    /// Make a group active and re-assert its selection.
    ///
    /// Emits `TabSelected` for the group's selected tab, or
    /// `NewTabRequested` if the group has none.
    pub fn select_group(&mut self, index: usize) -> Result<()> {
        if index >= self.groups.len() {
            return Err(TabError::GroupIndexOutOfRange(index));
        }

        self.active_group = index;
        self.events.emit(TabEvent::GroupChanged { group_index: index });

        match self.groups[index].selected_session() {
            Some(session_id) => self.select_tab(session_id),
            None => {
                self.selected_session = None;
                self.events.emit(TabEvent::NewTabRequested);
                Ok(())
            }
        }
    }

    pub fn select_next_group(&mut self) -> Result<()> {
        if self.groups.is_empty() {
            return Err(TabError::GroupIndexOutOfRange(0));
        }
        let next = if self.active_group + 1 == self.groups.len() {
            0
        } else {
            self.active_group + 1
        };
        self.select_group(next)
    }

    pub fn select_previous_group(&mut self) -> Result<()> {
        if self.groups.is_empty() {
            return Err(TabError::GroupIndexOutOfRange(0));
        }
        let previous = if self.active_group == 0 {
            self.groups.len() - 1
        } else {
            self.active_group - 1
        };
        self.select_group(previous)
    }

    /// Swap a group with its left neighbor; the moved group becomes active.
    pub fn move_group_left(&mut self, index: Option<usize>) -> Result<()> {
        let index = index.unwrap_or(self.active_group);
        if index >= self.groups.len() {
            return Err(TabError::GroupIndexOutOfRange(index));
        }
        if index == 0 {
            return Ok(());
        }

        self.groups.swap(index, index - 1);
        self.select_group(index - 1)
    }

    /// Swap a group with its right neighbor; the moved group becomes active.
    pub fn move_group_right(&mut self, index: Option<usize>) -> Result<()> {
        let index = index.unwrap_or(self.active_group);
        if index >= self.groups.len() {
            return Err(TabError::GroupIndexOutOfRange(index));
        }
        if index + 1 == self.groups.len() {
            return Ok(());
        }

        self.groups.swap(index, index + 1);
        self.select_group(index + 1)
    }

    pub fn set_group_locked(&mut self, index: Option<usize>, locked: bool) -> Result<()> {
        let index = index.unwrap_or(self.active_group);
        let group = self
            .groups
            .get_mut(index)
            .ok_or(TabError::GroupIndexOutOfRange(index))?;

        group.locked = locked;
        tracing::debug!(group = index, locked, "set group lock");
        Ok(())
    }

    pub fn set_group_title(&mut self, index: usize, title: &str) -> Result<()> {
        if title.is_empty() {
            return Err(TabError::EmptyTitle);
        }
        let group = self
            .groups
            .get_mut(index)
            .ok_or(TabError::GroupIndexOutOfRange(index))?;

        group.title = title.to_string();
        Ok(())
    }

    // === Tab operations (within the active group) ===

    /// Append a session to the active group and select it.
    ///
    /// Creates a group first if none exists. An empty or omitted title is
    /// replaced with a generated one.
    pub fn add_tab(&mut self, session_id: SessionId, title: Option<String>) -> Result<()> {
        if self.find_tab(session_id).is_some() {
            return Err(TabError::DuplicateSession(session_id));
        }

        if self.groups.is_empty() {
            self.push_group(None, false);
        }

        let title = match title.filter(|t| !t.is_empty()) {
            Some(title) => title,
            None => self.standard_tab_title(),
        };

        tracing::debug!(session_id, title = %title, "adding tab");

        let group = self.active_mut()?;
        group.tabs.push(Tab::new(session_id, title));
        group.selected_tab = group.tabs.len() - 1;

        self.selected_session = Some(session_id);
        self.events.emit(TabEvent::TabSelected { session_id });
        Ok(())
    }

    /// Remove a session from the active group (default: the selected one).
    ///
    /// If the group becomes empty: the sole or a locked group stays behind
    /// and `LastTabClosed` fires; any other group is closed. Otherwise the
    /// last remaining tab becomes selected.
    pub fn remove_tab(&mut self, session_id: Option<SessionId>) -> Result<()> {
        let session_id = session_id
            .or(self.selected_session)
            .ok_or(TabError::NoSelection)?;

        let (now_empty, locked, last_session) = {
            let group = self.active_mut()?;
            let index = group
                .tab_index_of(session_id)
                .ok_or(TabError::UnknownSession(session_id))?;

            group.tabs.remove(index);
            group.clamp_selected();

            (
                group.tabs.is_empty(),
                group.locked,
                group.tabs.last().map(|t| t.session_id),
            )
        };

        tracing::debug!(session_id, "removed tab");

        if now_empty {
            if self.groups.len() == 1 || locked {
                self.selected_session = None;
                self.events.emit(TabEvent::LastTabClosed);
            } else {
                self.close_active_group()?;
            }
        } else if let Some(last) = last_session {
            self.select_tab(last)?;
        }

        Ok(())
    }

    /// Signal that a session should be closed, without removing its tab.
    ///
    /// The session manager reacts by tearing the session down and calling
    /// [`remove_tab`] once it is gone.
    ///
    /// [`remove_tab`]: Self::remove_tab
    pub fn request_tab_close(&mut self, session_id: Option<SessionId>) -> Result<()> {
        let session_id = session_id
            .or(self.selected_session)
            .ok_or(TabError::NoSelection)?;

        if self.active()?.tab_index_of(session_id).is_none() {
            return Err(TabError::UnknownSession(session_id));
        }

        self.events.emit(TabEvent::TabClosed { session_id });
        Ok(())
    }

    /// Make a session the global selection.
    pub fn select_tab(&mut self, session_id: SessionId) -> Result<()> {
        let group = self.active_mut()?;
        let index = group
            .tab_index_of(session_id)
            .ok_or(TabError::UnknownSession(session_id))?;

        group.selected_tab = index;
        group.tabs[index].mark_selected();
        self.selected_session = Some(session_id);
        self.events.emit(TabEvent::TabSelected { session_id });
        Ok(())
    }

    pub fn select_next_tab(&mut self) -> Result<()> {
        self.select_tab_offset(1)
    }

    pub fn select_previous_tab(&mut self) -> Result<()> {
        self.select_tab_offset(-1)
    }

    fn select_tab_offset(&mut self, offset: isize) -> Result<()> {
        let group = self.active()?;
        let current = self.selected_session.ok_or(TabError::NoSelection)?;
        let index = group
            .tab_index_of(current)
            .ok_or(TabError::NoSelection)?;

        let count = group.tabs.len() as isize;
        let next = (index as isize + offset).rem_euclid(count) as usize;
        let session_id = group.tabs[next].session_id;
        self.select_tab(session_id)
    }

    /// Swap a tab (default: the selected one) with its left neighbor.
    pub fn move_tab_left(&mut self, session_id: Option<SessionId>) -> Result<()> {
        let session_id = session_id
            .or(self.selected_session)
            .ok_or(TabError::NoSelection)?;

        let group = self.active_mut()?;
        let index = group
            .tab_index_of(session_id)
            .ok_or(TabError::UnknownSession(session_id))?;
        if index == 0 {
            return Ok(());
        }

        group.tabs.swap(index, index - 1);
        Self::follow_swap(group, index, index - 1);
        Ok(())
    }

    /// Swap a tab (default: the selected one) with its right neighbor.
    pub fn move_tab_right(&mut self, session_id: Option<SessionId>) -> Result<()> {
        let session_id = session_id
            .or(self.selected_session)
            .ok_or(TabError::NoSelection)?;

        let group = self.active_mut()?;
        let index = group
            .tab_index_of(session_id)
            .ok_or(TabError::UnknownSession(session_id))?;
        if index + 1 == group.tabs.len() {
            return Ok(());
        }

        group.tabs.swap(index, index + 1);
        Self::follow_swap(group, index, index + 1);
        Ok(())
    }

    /// Reposition a tab inside the active group and select it.
    ///
    /// `to` is the final index after removal; drop-gesture callers resolve
    /// insertion points through the reorder arithmetic first.
    pub fn move_tab_to(&mut self, from: usize, to: usize) -> Result<()> {
        let group = self.active_mut()?;
        if from >= group.tabs.len() {
            return Err(TabError::TabIndexOutOfRange(from));
        }
        if to >= group.tabs.len() {
            return Err(TabError::TabIndexOutOfRange(to));
        }

        let session_id = group.tabs[from].session_id;
        group.move_tab(from, to);
        self.select_tab(session_id)
    }

    /// Move a tab (default: the selected one) to the cyclically adjacent
    /// group, select it there, and activate that group.
    ///
    /// The emptied source group is left in place; it persists until the
    /// next tab add or an explicit close.
    pub fn move_tab_to_adjacent_group(
        &mut self,
        session_id: Option<SessionId>,
        direction: Direction,
    ) -> Result<()> {
        if self.groups.len() < 2 {
            return Ok(());
        }

        let session_id = session_id
            .or(self.selected_session)
            .ok_or(TabError::NoSelection)?;

        let source = self.active_group;
        let destination = match direction {
            Direction::Left => {
                if source == 0 {
                    self.groups.len() - 1
                } else {
                    source - 1
                }
            }
            Direction::Right => {
                if source + 1 == self.groups.len() {
                    0
                } else {
                    source + 1
                }
            }
        };

        let tab = {
            let group = self.active_mut()?;
            let index = group
                .tab_index_of(session_id)
                .ok_or(TabError::UnknownSession(session_id))?;
            let tab = group.tabs.remove(index);
            group.clamp_selected();
            tab
        };

        let dest = &mut self.groups[destination];
        dest.tabs.push(tab);
        dest.selected_tab = dest.tabs.len() - 1;

        tracing::debug!(session_id, source, destination, "moved tab across groups");

        self.select_group(destination)
    }

    // === Titles ===

    /// First free title in the "Shell", "Shell No. 2", ... sequence,
    /// checked against every tab in every group.
    pub fn standard_tab_title(&self) -> String {
        titles::first_free(titles::tab_title, |candidate| {
            self.groups
                .iter()
                .flat_map(|g| &g.tabs)
                .any(|t| t.title == candidate)
        })
    }

    /// First free title in the "Group", "Group #2", ... sequence.
    pub fn standard_group_title(&self) -> String {
        titles::first_free(titles::group_title, |candidate| {
            self.groups.iter().any(|g| g.title == candidate)
        })
    }

    /// Automatic retitling, e.g. from shell activity.
    ///
    /// Silently ignored once the user has renamed the tab interactively.
    pub fn set_tab_title(&mut self, session_id: SessionId, title: &str) -> Result<()> {
        if title.is_empty() {
            return Err(TabError::EmptyTitle);
        }

        let (group_index, tab_index) = self
            .find_tab(session_id)
            .ok_or(TabError::UnknownSession(session_id))?;
        let tab = &mut self.groups[group_index].tabs[tab_index];

        if tab.title_is_user_set {
            return Ok(());
        }

        tab.title = title.to_string();
        Ok(())
    }

    /// User-initiated rename.
    ///
    /// A non-empty title applies and pins the tab against automatic
    /// retitling; an empty one unpins it.
    pub fn set_tab_title_interactive(&mut self, session_id: SessionId, title: &str) -> Result<()> {
        let (group_index, tab_index) = self
            .find_tab(session_id)
            .ok_or(TabError::UnknownSession(session_id))?;
        let tab = &mut self.groups[group_index].tabs[tab_index];

        if title.is_empty() {
            tab.title_is_user_set = false;
        } else {
            tab.title = title.to_string();
            tab.title_is_user_set = true;
        }
        Ok(())
    }

    // === Internal helpers ===

    fn active(&self) -> Result<&Group> {
        self.groups
            .get(self.active_group)
            .ok_or(TabError::GroupIndexOutOfRange(self.active_group))
    }

    fn active_mut(&mut self) -> Result<&mut Group> {
        self.groups
            .get_mut(self.active_group)
            .ok_or(TabError::GroupIndexOutOfRange(self.active_group))
    }

    /// Keep the group's selection pointing at the same tab across a swap.
    fn follow_swap(group: &mut Group, a: usize, b: usize) {
        if group.selected_tab == a {
            group.selected_tab = b;
        } else if group.selected_tab == b {
            group.selected_tab = a;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab_order(collection: &GroupCollection, group: usize) -> Vec<SessionId> {
        collection.groups()[group]
            .tabs
            .iter()
            .map(|t| t.session_id)
            .collect()
    }

    /// Every reachable state keeps indices valid; call after mutations.
    fn assert_invariants(collection: &GroupCollection) {
        if !collection.groups().is_empty() {
            assert!(collection.active_group_index() < collection.group_count());
        }
        for group in collection.groups() {
            if !group.tabs.is_empty() {
                assert!(group.selected_tab < group.tabs.len());
            }
        }
        match collection.selected_session() {
            Some(selected) => {
                let active = collection.active_group().unwrap();
                assert!(active.tab_index_of(selected).is_some());
            }
            None => {
                if let Some(active) = collection.active_group() {
                    assert!(active.tabs.is_empty());
                }
            }
        }
        let mut seen = std::collections::HashSet::new();
        for group in collection.groups() {
            for tab in &group.tabs {
                assert!(seen.insert(tab.session_id), "duplicate id {}", tab.session_id);
            }
        }
    }

    #[test]
    fn test_add_tab_bootstraps_group() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();

        assert_eq!(collection.group_count(), 1);
        assert_eq!(collection.selected_session(), Some(1));
        assert_eq!(collection.groups()[0].title, "Group");
        assert_eq!(collection.groups()[0].tabs[0].title, "Shell");
        assert_eq!(
            collection.take_events(),
            vec![
                TabEvent::GroupChanged { group_index: 0 },
                TabEvent::TabSelected { session_id: 1 }
            ]
        );
        assert_invariants(&collection);
    }

    #[test]
    fn test_add_tab_selects_new_tab() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_tab(2, Some("build".to_string())).unwrap();

        assert_eq!(collection.selected_session(), Some(2));
        assert_eq!(collection.groups()[0].selected_tab, 1);
        assert_eq!(collection.tab_title(2), Some("build"));
        assert_invariants(&collection);
    }

    #[test]
    fn test_duplicate_session_rejected() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_group(None, false);

        assert!(matches!(
            collection.add_tab(1, None),
            Err(TabError::DuplicateSession(1))
        ));
        assert!(collection.groups()[1].tabs.is_empty());
        assert_invariants(&collection);
    }

    #[test]
    fn test_generated_titles_avoid_collisions() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_tab(2, None).unwrap();
        collection.add_tab(3, None).unwrap();

        assert_eq!(collection.tab_title(1), Some("Shell"));
        assert_eq!(collection.tab_title(2), Some("Shell No. 2"));
        assert_eq!(collection.tab_title(3), Some("Shell No. 3"));
    }

    #[test]
    fn test_remove_sole_tab_signals_last_tab_closed() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.take_events();

        collection.remove_tab(Some(1)).unwrap();

        // The sole group is never auto-closed.
        assert_eq!(collection.group_count(), 1);
        assert_eq!(collection.selected_session(), None);
        assert_eq!(collection.take_events(), vec![TabEvent::LastTabClosed]);
        assert_invariants(&collection);
    }

    #[test]
    fn test_remove_tab_in_locked_group_signals_last_tab_closed() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_group(None, true);
        collection.add_tab(2, None).unwrap();
        collection.take_events();

        collection.remove_tab(Some(2)).unwrap();

        assert_eq!(collection.group_count(), 2);
        assert_eq!(collection.take_events(), vec![TabEvent::LastTabClosed]);
        assert_invariants(&collection);
    }

    #[test]
    fn test_remove_tab_cascades_to_group_close() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_group(None, false);
        collection.add_tab(2, None).unwrap();
        collection.take_events();

        collection.remove_tab(Some(2)).unwrap();

        assert_eq!(collection.group_count(), 1);
        assert_eq!(collection.active_group_index(), 0);
        assert_eq!(collection.selected_session(), Some(1));
        // The removed tab is excluded from the closure notifications.
        let events = collection.take_events();
        assert!(!events.contains(&TabEvent::TabClosed { session_id: 2 }));
        assert!(events.contains(&TabEvent::TabSelected { session_id: 1 }));
        assert_invariants(&collection);
    }

    #[test]
    fn test_remove_tab_selects_last_remaining() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_tab(2, None).unwrap();
        collection.add_tab(3, None).unwrap();
        collection.select_tab(2).unwrap();

        collection.remove_tab(Some(2)).unwrap();

        assert_eq!(collection.selected_session(), Some(3));
        assert_eq!(tab_order(&collection, 0), vec![1, 3]);
        assert_invariants(&collection);
    }

    #[test]
    fn test_remove_unknown_tab_is_rejected() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();

        assert!(matches!(
            collection.remove_tab(Some(9)),
            Err(TabError::UnknownSession(9))
        ));
        assert_eq!(tab_order(&collection, 0), vec![1]);
    }

    #[test]
    fn test_select_tab_idempotent() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_tab(2, None).unwrap();

        collection.select_tab(1).unwrap();
        let selected = collection.selected_session();
        let index = collection.groups()[0].selected_tab;

        collection.select_tab(1).unwrap();
        assert_eq!(collection.selected_session(), selected);
        assert_eq!(collection.groups()[0].selected_tab, index);
        assert_invariants(&collection);
    }

    #[test]
    fn test_cyclic_tab_selection() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_tab(2, None).unwrap();
        collection.add_tab(3, None).unwrap();

        collection.select_next_tab().unwrap();
        assert_eq!(collection.selected_session(), Some(1));

        collection.select_previous_tab().unwrap();
        assert_eq!(collection.selected_session(), Some(3));

        collection.select_previous_tab().unwrap();
        assert_eq!(collection.selected_session(), Some(2));
    }

    #[test]
    fn test_move_tab_round_trip() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_tab(2, None).unwrap();
        collection.add_tab(3, None).unwrap();

        collection.move_tab_left(Some(2)).unwrap();
        assert_eq!(tab_order(&collection, 0), vec![2, 1, 3]);

        collection.move_tab_right(Some(2)).unwrap();
        assert_eq!(tab_order(&collection, 0), vec![1, 2, 3]);
        assert_invariants(&collection);
    }

    #[test]
    fn test_move_tab_at_boundary_is_noop() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_tab(2, None).unwrap();

        collection.move_tab_left(Some(1)).unwrap();
        collection.move_tab_right(Some(2)).unwrap();
        assert_eq!(tab_order(&collection, 0), vec![1, 2]);
    }

    #[test]
    fn test_swap_follows_selection() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_tab(2, None).unwrap();

        collection.move_tab_left(Some(2)).unwrap();
        assert_eq!(collection.groups()[0].selected_tab, 0);
        assert_eq!(collection.selected_session(), Some(2));
        assert_invariants(&collection);
    }

    #[test]
    fn test_move_group_round_trip() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_group(Some("work".to_string()), false);
        collection.add_tab(2, None).unwrap();

        collection.move_group_left(None).unwrap();
        assert_eq!(collection.groups()[0].title, "work");
        assert_eq!(collection.active_group_index(), 0);

        collection.move_group_right(None).unwrap();
        assert_eq!(collection.groups()[1].title, "work");
        assert_eq!(collection.active_group_index(), 1);
        assert_invariants(&collection);
    }

    #[test]
    fn test_move_group_at_boundary_is_noop() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.take_events();

        collection.move_group_left(None).unwrap();
        collection.move_group_right(None).unwrap();
        assert_eq!(collection.active_group_index(), 0);
        assert!(collection.take_events().is_empty());
    }

    #[test]
    fn test_close_locked_group_is_refused() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_group(None, true);
        collection.add_tab(2, None).unwrap();

        assert!(matches!(
            collection.close_active_group(),
            Err(TabError::GroupLocked(1))
        ));
        assert_eq!(collection.group_count(), 2);
        assert_eq!(collection.active_group_index(), 1);
        assert_invariants(&collection);
    }

    #[test]
    fn test_close_last_group_is_refused() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();

        assert!(matches!(
            collection.close_active_group(),
            Err(TabError::LastGroup)
        ));
        assert_eq!(collection.group_count(), 1);
    }

    #[test]
    fn test_close_group_signals_tab_closure() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_group(None, false);
        collection.add_tab(2, None).unwrap();
        collection.add_tab(3, None).unwrap();
        collection.take_events();

        collection.close_active_group().unwrap();

        assert_eq!(collection.group_count(), 1);
        assert_eq!(collection.selected_session(), Some(1));
        let events = collection.take_events();
        assert!(events.contains(&TabEvent::TabClosed { session_id: 2 }));
        assert!(events.contains(&TabEvent::TabClosed { session_id: 3 }));
        assert_invariants(&collection);
    }

    #[test]
    fn test_close_middle_group_keeps_index() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_group(None, false);
        collection.add_tab(2, None).unwrap();
        collection.add_group(None, false);
        collection.add_tab(3, None).unwrap();
        collection.select_group(1).unwrap();

        collection.close_active_group().unwrap();

        // The group that slid into the closed slot becomes active.
        assert_eq!(collection.active_group_index(), 1);
        assert_eq!(collection.selected_session(), Some(3));
        assert_invariants(&collection);
    }

    #[test]
    fn test_select_group_reasserts_selection() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_tab(2, None).unwrap();
        collection.select_tab(1).unwrap();
        collection.add_group(None, false);
        collection.add_tab(3, None).unwrap();
        collection.take_events();

        collection.select_group(0).unwrap();

        assert_eq!(collection.selected_session(), Some(1));
        assert_eq!(
            collection.take_events(),
            vec![
                TabEvent::GroupChanged { group_index: 0 },
                TabEvent::TabSelected { session_id: 1 }
            ]
        );
    }

    #[test]
    fn test_select_empty_group_requests_tab() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.push_group(None, false);
        collection.take_events();

        collection.select_group(1).unwrap();

        assert_eq!(collection.selected_session(), None);
        assert_eq!(
            collection.take_events(),
            vec![
                TabEvent::GroupChanged { group_index: 1 },
                TabEvent::NewTabRequested
            ]
        );
    }

    #[test]
    fn test_select_group_out_of_range() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();

        assert!(collection.select_group(5).is_err());
        assert_eq!(collection.active_group_index(), 0);
    }

    #[test]
    fn test_cyclic_group_selection() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_group(None, false);
        collection.add_tab(2, None).unwrap();

        collection.select_next_group().unwrap();
        assert_eq!(collection.active_group_index(), 0);

        collection.select_previous_group().unwrap();
        assert_eq!(collection.active_group_index(), 1);
    }

    #[test]
    fn test_move_tab_to_adjacent_group_keeps_empty_source() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_group(None, false);
        collection.add_tab(2, None).unwrap();

        collection
            .move_tab_to_adjacent_group(Some(2), Direction::Left)
            .unwrap();

        // The emptied source group persists.
        assert_eq!(collection.group_count(), 2);
        assert!(collection.groups()[1].tabs.is_empty());
        assert_eq!(collection.active_group_index(), 0);
        assert_eq!(collection.selected_session(), Some(2));
        assert_eq!(tab_order(&collection, 0), vec![1, 2]);
        assert_invariants(&collection);
    }

    #[test]
    fn test_move_tab_to_adjacent_group_wraps() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.add_group(None, false);
        collection.add_tab(2, None).unwrap();
        collection.select_group(0).unwrap();

        collection
            .move_tab_to_adjacent_group(Some(1), Direction::Left)
            .unwrap();

        assert_eq!(collection.active_group_index(), 1);
        assert_eq!(tab_order(&collection, 1), vec![2, 1]);
        assert_invariants(&collection);
    }

    #[test]
    fn test_move_tab_to_adjacent_group_single_group_noop() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.take_events();

        collection
            .move_tab_to_adjacent_group(Some(1), Direction::Right)
            .unwrap();

        assert_eq!(collection.group_count(), 1);
        assert!(collection.take_events().is_empty());
    }

    #[test]
    fn test_move_tab_to_position() {
        let mut collection = GroupCollection::new();
        for id in 1..=4 {
            collection.add_tab(id, None).unwrap();
        }
        collection.take_events();

        collection.move_tab_to(2, 0).unwrap();

        assert_eq!(tab_order(&collection, 0), vec![3, 1, 2, 4]);
        assert_eq!(collection.selected_session(), Some(3));
        assert_eq!(
            collection.take_events(),
            vec![TabEvent::TabSelected { session_id: 3 }]
        );
        assert_invariants(&collection);
    }

    #[test]
    fn test_automatic_title_respects_user_rename() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();

        collection.set_tab_title_interactive(1, "logs").unwrap();
        collection.set_tab_title(1, "~/src").unwrap();
        assert_eq!(collection.tab_title(1), Some("logs"));

        // An empty interactive rename reverts to automatic titling.
        collection.set_tab_title_interactive(1, "").unwrap();
        collection.set_tab_title(1, "~/src").unwrap();
        assert_eq!(collection.tab_title(1), Some("~/src"));
    }

    #[test]
    fn test_empty_automatic_title_rejected() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();

        assert!(matches!(
            collection.set_tab_title(1, ""),
            Err(TabError::EmptyTitle)
        ));
        assert_eq!(collection.tab_title(1), Some("Shell"));
    }

    #[test]
    fn test_session_at_tab_bounds() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();

        assert_eq!(collection.session_at_tab(0), Some(1));
        assert_eq!(collection.session_at_tab(1), None);
    }

    #[test]
    fn test_request_tab_close_emits_without_removal() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();
        collection.take_events();

        collection.request_tab_close(None).unwrap();

        assert_eq!(
            collection.take_events(),
            vec![TabEvent::TabClosed { session_id: 1 }]
        );
        assert_eq!(tab_order(&collection, 0), vec![1]);
    }

    #[test]
    fn test_batch_update_defers_events() {
        let mut collection = GroupCollection::new();
        collection.begin_update();
        collection.add_tab(1, None).unwrap();
        assert!(collection.take_events().is_empty());

        collection.end_update();
        let events = collection.take_events();
        assert!(events.contains(&TabEvent::TabSelected { session_id: 1 }));
    }

    #[test]
    fn test_group_title_rename_rules() {
        let mut collection = GroupCollection::new();
        collection.add_tab(1, None).unwrap();

        collection.set_group_title(0, "servers").unwrap();
        assert_eq!(collection.groups()[0].title, "servers");
        assert!(collection.set_group_title(0, "").is_err());
        assert!(collection.set_group_title(7, "x").is_err());
    }
}
