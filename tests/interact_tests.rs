use dealsheet::state::columns::{ColumnId, MIN_COLUMN_WIDTH};
use dealsheet::state::drag::{ReorderDrag, ResizeDrag, REORDER_THRESHOLD};
use dealsheet::state::nav::{FocusCoord, NavDirection};

#[test]
fn test_focus_moves_within_bounds() {
    let coord = FocusCoord { row: 2, col: 3 };

    assert_eq!(
        coord.step(NavDirection::Up, 10, 7),
        FocusCoord { row: 1, col: 3 }
    );
    assert_eq!(
        coord.step(NavDirection::Down, 10, 7),
        FocusCoord { row: 3, col: 3 }
    );
    assert_eq!(
        coord.step(NavDirection::Left, 10, 7),
        FocusCoord { row: 2, col: 2 }
    );
    assert_eq!(
        coord.step(NavDirection::Right, 10, 7),
        FocusCoord { row: 2, col: 4 }
    );
}

#[test]
fn test_focus_clamps_at_edges_without_wrapping() {
    let origin = FocusCoord { row: 0, col: 0 };
    assert_eq!(origin.step(NavDirection::Up, 5, 3), origin);
    assert_eq!(origin.step(NavDirection::Left, 5, 3), origin);

    let corner = FocusCoord { row: 4, col: 2 };
    assert_eq!(corner.step(NavDirection::Down, 5, 3), corner);
    assert_eq!(corner.step(NavDirection::Right, 5, 3), corner);
}

#[test]
fn test_focus_on_empty_grid_stays_at_origin() {
    let coord = FocusCoord { row: 3, col: 2 };
    assert_eq!(
        coord.step(NavDirection::Down, 0, 0),
        FocusCoord { row: 0, col: 0 }
    );
}

#[test]
fn test_focus_reclamps_when_view_shrinks() {
    let coord = FocusCoord { row: 8, col: 6 };
    assert_eq!(coord.clamped(3, 2), FocusCoord { row: 2, col: 1 });
    assert_eq!(coord.clamped(9, 7), coord);
}

#[test]
fn test_resize_follows_pointer() {
    let drag = ResizeDrag::begin(ColumnId::Company, 100.0, 260.0);

    assert_eq!(drag.width_at(100.0), 260.0);
    assert_eq!(drag.width_at(150.0), 310.0);
    assert_eq!(drag.width_at(40.0), 200.0);
}

#[test]
fn test_resize_clamps_to_minimum_width() {
    let drag = ResizeDrag::begin(ColumnId::Owner, 100.0, 160.0);
    assert_eq!(drag.width_at(-1000.0), MIN_COLUMN_WIDTH);
}

#[test]
fn test_reorder_ignores_movement_below_threshold() {
    let mut drag = ReorderDrag::begin(100.0, 2);

    assert_eq!(drag.update(100.0 + REORDER_THRESHOLD, 5), None);
    assert_eq!(drag.update(100.0 - REORDER_THRESHOLD, 5), None);
    assert_eq!(drag.index(), 2);
}

#[test]
fn test_reorder_swaps_right_and_reanchors() {
    let mut drag = ReorderDrag::begin(100.0, 2);

    assert_eq!(drag.update(113.0, 5), Some((2, 3)));
    assert_eq!(drag.index(), 3);

    // After re-anchoring, small movement near the new anchor is inert.
    assert_eq!(drag.update(118.0, 5), None);
    assert_eq!(drag.update(109.0, 5), None);
    assert_eq!(drag.index(), 3);
}

#[test]
fn test_reorder_swaps_left() {
    let mut drag = ReorderDrag::begin(200.0, 2);

    assert_eq!(drag.update(187.0, 5), Some((2, 1)));
    assert_eq!(drag.update(174.0, 5), Some((1, 0)));
    assert_eq!(drag.index(), 0);
}

#[test]
fn test_reorder_stops_at_last_column() {
    let mut drag = ReorderDrag::begin(0.0, 3);

    assert_eq!(drag.update(13.0, 5), Some((3, 4)));
    assert_eq!(drag.update(26.0, 5), None);
    assert_eq!(drag.index(), 4);
}

#[test]
fn test_reorder_stops_at_first_column() {
    let mut drag = ReorderDrag::begin(100.0, 0);
    assert_eq!(drag.update(0.0, 5), None);
    assert_eq!(drag.index(), 0);
}

#[test]
fn test_sustained_drag_walks_one_slot_per_threshold() {
    // A long pull to the right converges on the last slot without
    // skipping or oscillating.
    let mut drag = ReorderDrag::begin(0.0, 0);
    let mut swaps = Vec::new();
    for step in 1..=10 {
        if let Some(swap) = drag.update(step as f64 * 13.0, 4) {
            swaps.push(swap);
        }
    }
    assert_eq!(swaps, vec![(0, 1), (1, 2), (2, 3)]);
    assert_eq!(drag.index(), 3);
}
