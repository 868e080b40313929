use crate::error::LadderError;
use serde::{Deserialize, Serialize};

/// Identifier of a placed symbol. Assigned monotonically from 1, never reused.
pub type BlockId = i32;

/// Snapshot of one placed symbol as seen by the presentation layer.
///
/// `index` is the column in a [`SparseLadder`](crate::SparseLadder) and the
/// ordinal within the rung in a [`DenseLadder`](crate::DenseLadder).
/// `position` is derived, never stored: `row * max_cols + index + 1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockState {
    pub id: BlockId,
    pub symbol_type: String,
    pub row: usize,
    pub index: usize,
    pub position: usize,
}

impl BlockState {
    pub(crate) fn new(
        id: BlockId,
        symbol_type: impl Into<String>,
        row: usize,
        index: usize,
        max_cols: usize,
    ) -> Self {
        Self {
            id,
            symbol_type: symbol_type.into(),
            row,
            index,
            position: global_position(max_cols, row, index),
        }
    }

    /// `(row, index)` pair, convenient for comparing against move results.
    pub fn cell(&self) -> (usize, usize) {
        (self.row, self.index)
    }
}

/// 1-based row-major sequence number of a slot.
///
/// With 6 columns, row 0 covers positions 1..=6 and row 1 covers 7..=12.
pub fn global_position(max_cols: usize, row: usize, index: usize) -> usize {
    row * max_cols + index + 1
}

/// Queries and removal shared by both grid policies.
///
/// Implemented by [`SparseLadder`](crate::SparseLadder) and
/// [`DenseLadder`](crate::DenseLadder) so listing, export, selection and model
/// sync work with either.
pub trait LadderLayout {
    /// `(max_rows, max_cols)`, fixed at construction
    fn dimensions(&self) -> (usize, usize);

    /// Current state of a block, or `None` if the id is not placed
    fn get_block_state(&self, id: BlockId) -> Option<BlockState>;

    /// Every placed block in row-major, then column order
    fn get_snapshot(&self) -> Vec<BlockState>;

    /// Blocks of a single row in column order. Empty for an out-of-range row.
    fn row_blocks(&self, row: usize) -> Vec<BlockState>;

    /// Delete a block and return its last state.
    fn remove_block(&mut self, id: BlockId) -> Result<BlockState, LadderError>;

    /// Number of placed blocks
    fn block_count(&self) -> usize;

    fn global_position(&self, row: usize, index: usize) -> usize {
        global_position(self.dimensions().1, row, index)
    }

    fn is_empty(&self) -> bool {
        self.block_count() == 0
    }
}
