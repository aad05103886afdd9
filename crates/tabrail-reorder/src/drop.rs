//! Drop-index arithmetic
//!
//! Pure functions shared by the indicator rendering and the drop itself.
//! The interaction between the insertion point and the post-removal index
//! shift is the error-prone part of reordering, so it lives here as named,
//! individually tested steps rather than inline arithmetic.

use serde::{Deserialize, Serialize};

use crate::metrics::StripMetrics;

/// Where a dragged item would be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Insertion {
    /// Before the item at this index.
    Before(usize),
    /// After the last item.
    AtEnd,
}

/// Logical drop indicator: where it points and whether the drop would be a
/// no-op (rendered disabled, drop ignored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropMark {
    pub insertion: Insertion,
    pub disabled: bool,
}

/// Map a pointer x-coordinate to an insertion point.
///
/// Past the midpoint of the hit item the insertion moves to its right
/// side; positions beyond the last item insert at the end.
pub fn insertion_at(metrics: &StripMetrics, x: i32) -> Insertion {
    let Some(index) = metrics.hit(x) else {
        return Insertion::AtEnd;
    };

    let past_midpoint = metrics.midpoint(index).is_some_and(|mid| x > mid);
    let index = if past_midpoint { index + 1 } else { index };

    if index == metrics.len() {
        Insertion::AtEnd
    } else {
        Insertion::Before(index)
    }
}

/// True when dropping `source` at `insertion` would not change the order:
/// directly before itself, directly after itself, or the last item dropped
/// at the end.
pub fn is_noop_move(source: usize, insertion: Insertion, count: usize) -> bool {
    match insertion {
        Insertion::AtEnd => source + 1 == count,
        Insertion::Before(target) => target == source || target == source + 1,
    }
}

/// Shift an insertion index to account for the source's removal: targets
/// to the right of the source slide left by one once it is taken out.
pub fn adjust_target_after_removal(source: usize, target: usize) -> usize {
    if source < target {
        target - 1
    } else {
        target
    }
}

/// Final index of the dragged item after a remove-and-insert at
/// `insertion`, for a row currently holding `count` items.
pub fn resolve_drop(source: usize, insertion: Insertion, count: usize) -> usize {
    match insertion {
        Insertion::AtEnd => count.saturating_sub(1),
        Insertion::Before(target) => adjust_target_after_removal(source, target),
    }
}
