//! Press/drag gesture state machine
//!
//! Idle -> Armed -> Dragging -> Idle. A press over an item arms the
//! controller; releasing without movement is a click, moving past the
//! start distance begins a drag carrying the source session id. Only
//! tab-row presses can become drags; group-row presses are click-only.

use serde::{Deserialize, Serialize};

use tabrail_tabs::SessionId;

/// Manhattan distance the pointer must travel before a drag starts.
pub const DRAG_START_DISTANCE: i32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn manhattan_distance(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    Primary,
    Auxiliary,
}

/// Which half of the bar a position falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Row {
    Tabs,
    Groups,
}

/// A completed press-release pair over the same item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub row: Row,
    pub index: usize,
    pub button: Button,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Armed {
        press: Point,
        row: Row,
        index: usize,
    },
    Dragging {
        session_id: SessionId,
    },
}

#[derive(Debug)]
pub struct DragController {
    phase: Phase,
    threshold: i32,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            threshold: DRAG_START_DISTANCE,
        }
    }

    pub fn with_threshold(threshold: i32) -> Self {
        Self {
            phase: Phase::Idle,
            threshold,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// The drag payload, while a drag is in flight.
    pub fn dragged_session(&self) -> Option<SessionId> {
        match self.phase {
            Phase::Dragging { session_id } => Some(session_id),
            _ => None,
        }
    }

    /// Arm on a button press over an item. The click button is resolved at
    /// release time.
    pub fn press(&mut self, pos: Point, row: Row, index: usize) {
        self.phase = Phase::Armed { press: pos, row, index };
    }

    /// Feed pointer movement; returns the armed tab index once the pointer
    /// travels past the start distance. The caller resolves the session at
    /// that index and hands it to [`begin_drag`].
    ///
    /// [`begin_drag`]: Self::begin_drag
    pub fn motion(&mut self, pos: Point) -> Option<usize> {
        match self.phase {
            Phase::Armed {
                press,
                row: Row::Tabs,
                index,
            } if pos.manhattan_distance(press) >= self.threshold => Some(index),
            _ => None,
        }
    }

    /// Enter the dragging state with the source session as payload.
    pub fn begin_drag(&mut self, session_id: SessionId) {
        if matches!(self.phase, Phase::Armed { .. }) {
            tracing::debug!(session_id, "drag started");
            self.phase = Phase::Dragging { session_id };
        }
    }

    /// Resolve a button release; a release over the armed item is a click.
    /// Always returns the controller to idle.
    pub fn release(&mut self, row: Row, index: usize, button: Button) -> Option<Click> {
        let click = match self.phase {
            Phase::Armed {
                row: armed_row,
                index: armed_index,
                ..
            } if armed_row == row && armed_index == index => Some(Click { row, index, button }),
            _ => None,
        };

        self.phase = Phase::Idle;
        click
    }

    /// Abort the gesture: pointer left the region, the window lost focus,
    /// or the drop was rejected.
    pub fn cancel(&mut self) {
        if !self.is_idle() {
            tracing::trace!("gesture cancelled");
        }
        self.phase = Phase::Idle;
    }
}
