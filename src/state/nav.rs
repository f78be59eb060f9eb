//! Keyboard focus coordinate over the rendered grid. Row and column
//! are positions in the current view, not store indices.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusCoord {
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}

impl FocusCoord {
    /// Move one step in the given direction, clamped to the grid
    /// bounds. No wraparound at the edges.
    pub fn step(self, direction: NavDirection, rows: usize, cols: usize) -> FocusCoord {
        let mut next = self;
        match direction {
            NavDirection::Up => next.row = next.row.saturating_sub(1),
            NavDirection::Down => next.row += 1,
            NavDirection::Left => next.col = next.col.saturating_sub(1),
            NavDirection::Right => next.col += 1,
        }
        next.clamped(rows, cols)
    }

    /// Pull the coordinate back inside a grid of the given size, for
    /// when filtering or hiding shrinks the view underneath it.
    pub fn clamped(self, rows: usize, cols: usize) -> FocusCoord {
        FocusCoord {
            row: self.row.min(rows.saturating_sub(1)),
            col: self.col.min(cols.saturating_sub(1)),
        }
    }
}
