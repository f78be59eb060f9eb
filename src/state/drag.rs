//! Header drag interactions. Both drags live in a single optional
//! signal: `None` is idle, `Some` means an overlay is capturing mouse
//! movement until release.

use crate::state::columns::{ColumnId, MIN_COLUMN_WIDTH};

/// Horizontal travel required before a reorder drag swaps with the
/// neighboring column.
pub const REORDER_THRESHOLD: f64 = 12.0;

/// Live column resize, anchored at the pointer position where the
/// handle was grabbed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeDrag {
    pub column: ColumnId,
    start_x: f64,
    start_width: f64,
}

impl ResizeDrag {
    pub fn begin(column: ColumnId, start_x: f64, start_width: f64) -> ResizeDrag {
        ResizeDrag {
            column,
            start_x,
            start_width,
        }
    }

    /// Width the column should have with the pointer at `pointer_x`,
    /// clamped to the minimum.
    pub fn width_at(&self, pointer_x: f64) -> f64 {
        (self.start_width + (pointer_x - self.start_x)).max(MIN_COLUMN_WIDTH)
    }
}

/// Column reorder drag. After each swap the anchor re-centers on the
/// pointer, so a long sustained drag walks the column one slot at a
/// time instead of oscillating.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReorderDrag {
    anchor_x: f64,
    index: usize,
}

impl ReorderDrag {
    pub fn begin(anchor_x: f64, index: usize) -> ReorderDrag {
        ReorderDrag { anchor_x, index }
    }

    /// Current position of the dragged column among visible columns.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Feed a pointer position. Returns `Some((from, to))` when the
    /// travel since the last anchor exceeds the threshold and a swap
    /// with the neighbor should happen; movement below the threshold
    /// returns `None` and changes nothing.
    pub fn update(&mut self, pointer_x: f64, column_count: usize) -> Option<(usize, usize)> {
        let delta = pointer_x - self.anchor_x;
        if delta > REORDER_THRESHOLD && self.index + 1 < column_count {
            let from = self.index;
            self.index += 1;
            self.anchor_x = pointer_x;
            return Some((from, self.index));
        }
        if delta < -REORDER_THRESHOLD && self.index > 0 {
            let from = self.index;
            self.index -= 1;
            self.anchor_x = pointer_x;
            return Some((from, self.index));
        }
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Resize(ResizeDrag),
    Reorder(ReorderDrag),
}
