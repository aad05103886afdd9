//! Tab strip facade
//!
//! The host-facing object: routes pointer events through the gesture
//! controller into collection mutations, and exposes the automation
//! surface. Failures at this boundary are silent no-ops (logged at debug);
//! hosts that need typed errors use [`GroupCollection`] directly.

use std::path::Path;

use tabrail_layout::{restore, snapshot, Layout, SessionSpawner};
use tabrail_reorder::{
    insertion_at, is_noop_move, resolve_drop, Button, Click, DragController, DropMark, Point, Row,
    StripMetrics,
};
use tabrail_tabs::{Direction, GroupCollection, SessionId, TabEvent, INVALID_SESSION_ID};

use crate::Result;

/// Pixel arrangement of the bar, reported by the renderer after layout.
///
/// The bar is split horizontally: the upper half shows tabs, the lower
/// half groups. `bounds` is the x range accepting presses and drops
/// (between the new-button and close-button columns).
#[derive(Debug, Clone, Default)]
pub struct StripGeometry {
    pub bounds: (i32, i32),
    pub height: i32,
    pub tab_row: StripMetrics,
    pub group_row: StripMetrics,
}

#[derive(Debug, Default)]
pub struct TabStrip {
    collection: GroupCollection,
    gesture: DragController,
    geometry: StripGeometry,
}

impl TabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collection(&self) -> &GroupCollection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut GroupCollection {
        &mut self.collection
    }

    pub fn set_geometry(&mut self, geometry: StripGeometry) {
        self.geometry = geometry;
    }

    pub fn geometry(&self) -> &StripGeometry {
        &self.geometry
    }

    pub fn take_events(&mut self) -> Vec<TabEvent> {
        self.collection.take_events()
    }

    // === Tab and group operations (no-op on invalid input) ===

    pub fn add_tab(&mut self, session_id: SessionId, title: Option<String>) {
        if let Err(err) = self.collection.add_tab(session_id, title) {
            tracing::debug!(%err, session_id, "add_tab ignored");
        }
    }

    pub fn remove_tab(&mut self, session_id: Option<SessionId>) {
        if let Err(err) = self.collection.remove_tab(session_id) {
            tracing::debug!(%err, "remove_tab ignored");
        }
    }

    pub fn select_tab(&mut self, session_id: SessionId) {
        if let Err(err) = self.collection.select_tab(session_id) {
            tracing::debug!(%err, session_id, "select_tab ignored");
        }
    }

    pub fn select_next_tab(&mut self) {
        if let Err(err) = self.collection.select_next_tab() {
            tracing::debug!(%err, "select_next_tab ignored");
        }
    }

    pub fn select_previous_tab(&mut self) {
        if let Err(err) = self.collection.select_previous_tab() {
            tracing::debug!(%err, "select_previous_tab ignored");
        }
    }

    pub fn move_tab_left(&mut self, session_id: Option<SessionId>) {
        if let Err(err) = self.collection.move_tab_left(session_id) {
            tracing::debug!(%err, "move_tab_left ignored");
        }
    }

    pub fn move_tab_right(&mut self, session_id: Option<SessionId>) {
        if let Err(err) = self.collection.move_tab_right(session_id) {
            tracing::debug!(%err, "move_tab_right ignored");
        }
    }

    pub fn move_tab_to_adjacent_group(
        &mut self,
        session_id: Option<SessionId>,
        direction: Direction,
    ) {
        if let Err(err) = self.collection.move_tab_to_adjacent_group(session_id, direction) {
            tracing::debug!(%err, "move_tab_to_adjacent_group ignored");
        }
    }

    /// Ask the session manager to close the selected session.
    pub fn close_selected_tab(&mut self) {
        if let Err(err) = self.collection.request_tab_close(None) {
            tracing::debug!(%err, "close_selected_tab ignored");
        }
    }

    pub fn add_group(&mut self, title: Option<String>, locked: bool) {
        self.collection.add_group(title, locked);
    }

    pub fn close_active_group(&mut self) {
        if let Err(err) = self.collection.close_active_group() {
            tracing::debug!(%err, "close_active_group ignored");
        }
    }

    pub fn select_group(&mut self, index: usize) {
        if let Err(err) = self.collection.select_group(index) {
            tracing::debug!(%err, index, "select_group ignored");
        }
    }

    pub fn select_next_group(&mut self) {
        if let Err(err) = self.collection.select_next_group() {
            tracing::debug!(%err, "select_next_group ignored");
        }
    }

    pub fn select_previous_group(&mut self) {
        if let Err(err) = self.collection.select_previous_group() {
            tracing::debug!(%err, "select_previous_group ignored");
        }
    }

    pub fn move_group_left(&mut self, index: Option<usize>) {
        if let Err(err) = self.collection.move_group_left(index) {
            tracing::debug!(%err, "move_group_left ignored");
        }
    }

    pub fn move_group_right(&mut self, index: Option<usize>) {
        if let Err(err) = self.collection.move_group_right(index) {
            tracing::debug!(%err, "move_group_right ignored");
        }
    }

    pub fn set_group_locked(&mut self, index: Option<usize>, locked: bool) {
        if let Err(err) = self.collection.set_group_locked(index, locked) {
            tracing::debug!(%err, "set_group_locked ignored");
        }
    }

    // === Scriptable surface ===

    pub fn tab_title(&self, session_id: SessionId) -> String {
        self.collection
            .tab_title(session_id)
            .unwrap_or_default()
            .to_string()
    }

    pub fn set_tab_title(&mut self, session_id: SessionId, title: &str) {
        if let Err(err) = self.collection.set_tab_title(session_id, title) {
            tracing::debug!(%err, session_id, "set_tab_title ignored");
        }
    }

    pub fn set_tab_title_interactive(&mut self, session_id: SessionId, title: &str) {
        if let Err(err) = self.collection.set_tab_title_interactive(session_id, title) {
            tracing::debug!(%err, session_id, "set_tab_title_interactive ignored");
        }
    }

    pub fn set_group_title(&mut self, index: usize, title: &str) {
        if let Err(err) = self.collection.set_group_title(index, title) {
            tracing::debug!(%err, index, "set_group_title ignored");
        }
    }

    pub fn session_at_tab(&self, index: usize) -> SessionId {
        self.collection
            .session_at_tab(index)
            .unwrap_or(INVALID_SESSION_ID)
    }

    // === Pointer interface ===

    pub fn pointer_pressed(&mut self, pos: Point, _button: Button) {
        let Some((row, index)) = self.hit(pos) else {
            return;
        };
        self.gesture.press(pos, row, index);
    }

    pub fn pointer_moved(&mut self, pos: Point) {
        if let Some(index) = self.gesture.motion(pos) {
            match self.collection.session_at_tab(index) {
                Some(session_id) => self.gesture.begin_drag(session_id),
                None => self.gesture.cancel(),
            }
        }
    }

    pub fn pointer_released(&mut self, pos: Point, button: Button) {
        let Some((row, index)) = self.hit(pos) else {
            self.gesture.cancel();
            return;
        };

        if let Some(click) = self.gesture.release(row, index, button) {
            self.apply_click(click);
        }
    }

    /// Candidate drop indicator for the current drag at `pos`, or `None`
    /// when there is no drag or the position is outside the drop region
    /// (the host hides the indicator).
    pub fn drag_moved(&self, pos: Point) -> Option<DropMark> {
        let source_id = self.gesture.dragged_session()?;

        let (min_x, max_x) = self.geometry.bounds;
        if pos.x <= min_x || pos.x >= max_x {
            return None;
        }

        let group = self.collection.active_group()?;
        let source = group.tab_index_of(source_id)?;
        let insertion = insertion_at(&self.geometry.tab_row, pos.x);

        Some(DropMark {
            insertion,
            disabled: is_noop_move(source, insertion, group.tabs.len()),
        })
    }

    /// Complete the drag: a valid, non-self target repositions the source
    /// tab and selects it; anything else is a cancelled drag.
    pub fn drag_dropped(&mut self, pos: Point) {
        let mark = self.drag_moved(pos);
        let source_id = self.gesture.dragged_session();
        self.gesture.cancel();

        let (Some(mark), Some(source_id)) = (mark, source_id) else {
            return;
        };
        if mark.disabled {
            return;
        }

        let Some(source) = self
            .collection
            .active_group()
            .and_then(|group| group.tab_index_of(source_id))
        else {
            return;
        };
        let count = self
            .collection
            .active_group()
            .map(|group| group.tabs.len())
            .unwrap_or(0);

        let target = resolve_drop(source, mark.insertion, count);
        if let Err(err) = self.collection.move_tab_to(source, target) {
            tracing::debug!(%err, "drop ignored");
        }
    }

    /// The pointer left the drop region.
    pub fn drag_left(&mut self) {
        self.gesture.cancel();
    }

    /// The host window lost focus mid-gesture.
    pub fn window_focus_lost(&mut self) {
        self.gesture.cancel();
    }

    // === Layout wiring ===

    /// Rebuild state from the layout file, falling back to a single
    /// default tab when the file is missing or unreadable.
    pub fn restore_layout(&mut self, path: &Path, sessions: &mut dyn SessionSpawner) {
        let layout = match Layout::load(path) {
            Ok(layout) => Some(layout),
            Err(err) => {
                tracing::info!(%err, path = %path.display(), "layout unavailable, starting fresh");
                None
            }
        };

        if let Err(err) = restore(&mut self.collection, layout, sessions) {
            tracing::error!(%err, "layout restoration failed");
        }
    }

    pub fn save_layout(&self, path: &Path) -> Result<()> {
        snapshot(&self.collection).save(path)?;
        Ok(())
    }

    // === Internal helpers ===

    fn row_at(&self, y: i32) -> Row {
        if y > self.geometry.height / 2 {
            Row::Groups
        } else {
            Row::Tabs
        }
    }

    fn hit(&self, pos: Point) -> Option<(Row, usize)> {
        if pos.x < self.geometry.bounds.0 {
            return None;
        }

        let row = self.row_at(pos.y);
        let metrics = match row {
            Row::Tabs => &self.geometry.tab_row,
            Row::Groups => &self.geometry.group_row,
        };
        metrics.hit(pos.x).map(|index| (row, index))
    }

    fn apply_click(&mut self, click: Click) {
        match (click.row, click.button) {
            (Row::Tabs, Button::Primary) => {
                if let Some(session_id) = self.collection.session_at_tab(click.index) {
                    self.select_tab(session_id);
                }
            }
            (Row::Tabs, Button::Auxiliary) => {
                if let Some(session_id) = self.collection.session_at_tab(click.index) {
                    if let Err(err) = self.collection.request_tab_close(Some(session_id)) {
                        tracing::debug!(%err, "tab close click ignored");
                    }
                }
            }
            (Row::Groups, Button::Primary) => self.select_group(click.index),
            (Row::Groups, Button::Auxiliary) => {}
        }
    }
}
