//! Error types for ladder session operations.
//!
//! Every mutating operation on a [`SparseLadder`](crate::SparseLadder) or
//! [`DenseLadder`](crate::DenseLadder) reports rejection through [`LadderError`].
//! A rejected call never mutates the session: grid, id counter and type map are
//! left exactly as they were.

use crate::grid::ShiftDirection;
use crate::state::BlockId;
use thiserror::Error;

/// Reasons a placement, move, delete or query was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    /// Row index outside `0..max_rows`
    #[error("row {row} is outside 0..{max_rows}")]
    RowOutOfRange { row: usize, max_rows: usize },
    /// Column index outside `0..max_cols`
    #[error("column {col} is outside 0..{max_cols}")]
    ColumnOutOfRange { col: usize, max_cols: usize },
    /// Every slot of the row is taken
    #[error("row {row} is full ({capacity} slots)")]
    RowFull { row: usize, capacity: usize },
    /// Shift-insert found no empty cell in the attempted direction(s)
    #[error("no free slot in row {row} shifting {direction} from column {col}")]
    NoFreeSlot {
        row: usize,
        col: usize,
        direction: ShiftDirection,
    },
    /// No placed block carries this id
    #[error("block {0} not found")]
    UnknownBlock(BlockId),
    /// A session needs at least one row and one column
    #[error("invalid ladder dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// Errors raised while loading a [`LadderConfig`](crate::LadderConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse ladder config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid ladder config: {0}")]
    Invalid(#[from] LadderError),
}
