//! Level 2: Sparse Placement Tests
//!
//! Tests first-free placement, explicit-cell placement and shift-insert in
//! every direction on the sparse grid.

mod common;

use common::{assert_layout_consistent, fill_sparse_row, place_sparse, sparse_row};
use slint_ladder_editor::{LadderError, LadderLayout, ShiftDirection, SparseLadder};

// ============================================================================
// Explicit placement
// ============================================================================

#[test]
fn test_drop_on_empty_cell_then_shift_right() {
    let mut ladder = SparseLadder::new(2, 3).unwrap();

    let xic = ladder.add_at(0, 1, "XIC", ShiftDirection::Auto).unwrap();
    assert_eq!((xic.row, xic.index, xic.position), (0, 1, 2));

    let xio = ladder.add_at(0, 1, "XIO", ShiftDirection::Auto).unwrap();
    assert_eq!((xio.row, xio.index), (0, 1));
    assert_eq!(sparse_row(&ladder, 0), vec![None, Some(xio.id), Some(xic.id)]);

    let moved = ladder.get_block_state(xic.id).unwrap();
    assert_eq!((moved.index, moved.position), (2, 3));
    assert_layout_consistent(&ladder);
}

#[test]
fn test_drop_on_full_row_is_rejected_without_side_effects() {
    let mut ladder = SparseLadder::new(2, 3).unwrap();
    fill_sparse_row(&mut ladder, 0, &["A", "B", "C"]);
    let before = ladder.clone();

    let err = ladder.add_at(0, 1, "D", ShiftDirection::Auto).unwrap_err();
    assert_eq!(
        err,
        LadderError::NoFreeSlot {
            row: 0,
            col: 1,
            direction: ShiftDirection::Auto,
        }
    );
    assert_eq!(ladder, before);
    assert!(!ladder.get_snapshot().iter().any(|b| b.symbol_type == "D"));
    assert_eq!(ladder.registry().peek_id(), 4);
}

#[test]
fn test_shift_right_only_fails_when_gap_is_left() {
    let mut ladder = SparseLadder::new(1, 3).unwrap();
    let ids = place_sparse(&mut ladder, 0, &[(1, "A"), (2, "B")]);
    let before = ladder.clone();

    assert!(ladder.add_at(0, 1, "C", ShiftDirection::Right).is_err());
    assert_eq!(ladder, before);

    let c = ladder.add_at(0, 1, "C", ShiftDirection::Left).unwrap();
    assert_eq!(sparse_row(&ladder, 0), vec![Some(ids[0]), Some(c.id), Some(ids[1])]);
}

#[test]
fn test_shift_right_stops_at_closest_gap() {
    let mut ladder = SparseLadder::new(1, 5).unwrap();
    let ids = place_sparse(&mut ladder, 0, &[(0, "A"), (1, "B"), (3, "C")]);

    let d = ladder.add_at(0, 1, "D", ShiftDirection::Right).unwrap();
    assert_eq!(
        sparse_row(&ladder, 0),
        vec![Some(ids[0]), Some(d.id), Some(ids[1]), Some(ids[2]), None]
    );
}

#[test]
fn test_shift_left_stops_at_closest_gap() {
    let mut ladder = SparseLadder::new(1, 5).unwrap();
    let ids = place_sparse(&mut ladder, 0, &[(1, "A"), (3, "B"), (4, "C")]);

    let d = ladder.add_at(0, 4, "D", ShiftDirection::Left).unwrap();
    assert_eq!(
        sparse_row(&ladder, 0),
        vec![None, Some(ids[0]), Some(ids[1]), Some(ids[2]), Some(d.id)]
    );
}

#[test]
fn test_shift_insert_keeps_row_membership() {
    let mut ladder = SparseLadder::new(1, 4).unwrap();
    let mut ids = place_sparse(&mut ladder, 0, &[(0, "A"), (1, "B"), (3, "C")]);

    let d = ladder.add_at(0, 3, "D", ShiftDirection::Auto).unwrap();
    ids.push(d.id);

    let mut after: Vec<_> = sparse_row(&ladder, 0).into_iter().flatten().collect();
    after.sort_unstable();
    ids.sort_unstable();
    assert_eq!(after, ids);
    assert_layout_consistent(&ladder);
}

#[test]
fn test_symbol_type_round_trips_verbatim() {
    let mut ladder = SparseLadder::new(1, 2).unwrap();
    let state = ladder.add_at(0, 0, "TON  t#5s", ShiftDirection::Auto).unwrap();
    assert_eq!(state.symbol_type, "TON  t#5s");
    assert_eq!(ladder.get_block_state(state.id).unwrap().symbol_type, "TON  t#5s");
}

// ============================================================================
// First-free placement
// ============================================================================

#[test]
fn test_add_first_free_fills_gaps_before_end() {
    let mut ladder = SparseLadder::new(1, 4).unwrap();
    place_sparse(&mut ladder, 0, &[(0, "A"), (2, "B")]);
    assert_eq!(ladder.add_first_free(0, "C").unwrap().index, 1);
    assert_eq!(ladder.add_first_free(0, "D").unwrap().index, 3);
    assert!(matches!(
        ladder.add_first_free(0, "E"),
        Err(LadderError::RowFull { row: 0, capacity: 4 })
    ));
}

#[test]
fn test_ids_are_unique_across_rows_and_deletes() {
    let mut ladder = SparseLadder::new(2, 2).unwrap();
    let a = ladder.add_first_free(0, "A").unwrap().id;
    let b = ladder.add_first_free(1, "B").unwrap().id;
    ladder.delete_block(a).unwrap();
    let c = ladder.add_first_free(0, "C").unwrap().id;
    assert_eq!((a, b, c), (1, 2, 3));
}
