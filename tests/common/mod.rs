//! Common test utilities for integration tests.

#![allow(dead_code)]

use slint_ladder_editor::{BlockId, DenseLadder, LadderLayout, ShiftDirection, SparseLadder};

/// Route session logs to the test writer. Set `RUST_LOG=debug` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Cells of a sparse row as ids, `None` for empty slots.
pub fn sparse_row(ladder: &SparseLadder, row: usize) -> Vec<Option<BlockId>> {
    ladder.row_cells(row).expect("row in range").to_vec()
}

/// Ids of a dense row in order.
pub fn dense_row(ladder: &DenseLadder, row: usize) -> Vec<BlockId> {
    ladder.row_ids(row).expect("row in range").to_vec()
}

/// Fill a sparse row left to right with the given tags, returning their ids.
pub fn fill_sparse_row(ladder: &mut SparseLadder, row: usize, tags: &[&str]) -> Vec<BlockId> {
    tags.iter()
        .map(|tag| ladder.add_first_free(row, *tag).expect("row has room").id)
        .collect()
}

/// Place tags at explicit columns of a sparse row.
pub fn place_sparse(ladder: &mut SparseLadder, row: usize, cells: &[(usize, &str)]) -> Vec<BlockId> {
    cells
        .iter()
        .map(|&(col, tag)| {
            ladder
                .add_at(row, col, tag, ShiftDirection::Auto)
                .expect("cell placement")
                .id
        })
        .collect()
}

/// Check the invariants every layout must hold after any operation.
pub fn assert_layout_consistent<L: LadderLayout>(layout: &L) {
    let (max_rows, max_cols) = layout.dimensions();
    let snapshot = layout.get_snapshot();
    assert_eq!(snapshot.len(), layout.block_count(), "type map matches placed blocks");

    let mut ids: Vec<_> = snapshot.iter().map(|b| b.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), snapshot.len(), "ids are unique");

    for block in &snapshot {
        assert!(block.row < max_rows, "row in bounds: {block:?}");
        assert!(block.index < max_cols, "index in bounds: {block:?}");
        assert_eq!(block.position, block.row * max_cols + block.index + 1);
        assert_eq!(layout.get_block_state(block.id).as_ref(), Some(block));
    }
}
