//! tabrail reorder engine
//!
//! Turns raw pointer callbacks into reorder decisions: a press/drag state
//! machine, hit testing against the strip's item boundaries, and the pure
//! arithmetic that maps a pointer position to an insertion index. Nothing
//! here mutates the collection; callers apply the resolved moves.

mod drop;
mod gesture;
mod metrics;

pub use drop::{adjust_target_after_removal, insertion_at, is_noop_move, resolve_drop};
pub use drop::{DropMark, Insertion};
pub use gesture::{Button, Click, DragController, Point, Row, DRAG_START_DISTANCE};
pub use metrics::StripMetrics;
