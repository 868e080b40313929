//! Sparse slot grid.
//!
//! A fixed `max_rows x max_cols` matrix where every cell holds at most one block
//! id. Rows may contain gaps; an empty cell is a meaningful free slot. Dropping a
//! block onto an occupied cell makes room with a *shift-insert*: neighbours in the
//! same row slide one slot towards the nearest free cell.

use crate::config::LadderConfig;
use crate::error::LadderError;
use crate::registry::SymbolRegistry;
use crate::state::{BlockId, BlockState, LadderLayout};
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// Which way neighbours are pushed when the target cell is occupied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShiftDirection {
    /// Push occupants towards the end of the row
    Right,
    /// Push occupants towards the start of the row
    Left,
    /// Try right first, then left
    #[default]
    Auto,
}

impl ShiftDirection {
    /// Map an integer hint: `> 0` right, `< 0` left, `0` auto.
    ///
    /// The UI derives the hint from which side of the target cell's centre
    /// the pointer was released on.
    pub fn from_hint(hint: i32) -> Self {
        match hint.cmp(&0) {
            Ordering::Greater => Self::Right,
            Ordering::Less => Self::Left,
            Ordering::Equal => Self::Auto,
        }
    }
}

impl fmt::Display for ShiftDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Right => write!(f, "right"),
            Self::Left => write!(f, "left"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// Open `col` by sliding `(col, free]` one step right, where `free` is the
/// closest empty cell at or after `col`. Leaves the row untouched on failure.
fn shift_right(cells: &mut [Option<BlockId>], col: usize, id: BlockId) -> bool {
    let Some(free) = (col..cells.len()).find(|&c| cells[c].is_none()) else {
        return false;
    };
    cells.copy_within(col..free, col + 1);
    cells[col] = Some(id);
    true
}

/// Mirror of [`shift_right`]: slide `[free, col)` one step left, where `free` is
/// the closest empty cell at or before `col`.
fn shift_left(cells: &mut [Option<BlockId>], col: usize, id: BlockId) -> bool {
    let Some(free) = (0..=col).rev().find(|&c| cells[c].is_none()) else {
        return false;
    };
    cells.copy_within(free + 1..=col, free);
    cells[col] = Some(id);
    true
}

fn shift_insert(
    cells: &mut [Option<BlockId>],
    col: usize,
    id: BlockId,
    direction: ShiftDirection,
) -> bool {
    match direction {
        ShiftDirection::Right => shift_right(cells, col, id),
        ShiftDirection::Left => shift_left(cells, col, id),
        ShiftDirection::Auto => shift_right(cells, col, id) || shift_left(cells, col, id),
    }
}

/// Ladder program stored as a fixed matrix of optional block ids.
///
/// Ids are unique across the grid, every placed id has a recorded symbol type,
/// and every rejected operation leaves the session unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseLadder {
    max_rows: usize,
    max_cols: usize,
    grid: Vec<Vec<Option<BlockId>>>,
    registry: SymbolRegistry,
}

impl SparseLadder {
    /// Create an empty `max_rows x max_cols` grid.
    pub fn new(max_rows: usize, max_cols: usize) -> Result<Self, LadderError> {
        Self::from_config(&LadderConfig::new(max_rows, max_cols))
    }

    pub fn from_config(config: &LadderConfig) -> Result<Self, LadderError> {
        config.validate()?;
        Ok(Self {
            max_rows: config.max_rows,
            max_cols: config.max_cols,
            grid: vec![vec![None; config.max_cols]; config.max_rows],
            registry: SymbolRegistry::new(),
        })
    }

    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    /// Occupant of a cell, `None` for empty or out-of-range cells.
    pub fn cell(&self, row: usize, col: usize) -> Option<BlockId> {
        self.grid.get(row)?.get(col).copied().flatten()
    }

    /// All cells of a row, including empty ones.
    pub fn row_cells(&self, row: usize) -> Option<&[Option<BlockId>]> {
        self.grid.get(row).map(Vec::as_slice)
    }

    /// Locate a block by id.
    pub fn find_block(&self, id: BlockId) -> Option<(usize, usize)> {
        self.grid.iter().enumerate().find_map(|(r, cells)| {
            cells
                .iter()
                .position(|&cell| cell == Some(id))
                .map(|c| (r, c))
        })
    }

    fn check_row(&self, row: usize) -> Result<(), LadderError> {
        if row >= self.max_rows {
            return Err(LadderError::RowOutOfRange {
                row,
                max_rows: self.max_rows,
            });
        }
        Ok(())
    }

    fn state_at(&self, id: BlockId, row: usize, col: usize) -> BlockState {
        let symbol_type = self.registry.symbol_type(id).unwrap_or_default();
        BlockState::new(id, symbol_type, row, col, self.max_cols)
    }

    /// Place a new block in the leftmost empty cell of `row`.
    pub fn add_first_free(
        &mut self,
        row: usize,
        symbol_type: impl Into<String>,
    ) -> Result<BlockState, LadderError> {
        self.check_row(row)?;
        let Some(col) = self.grid[row].iter().position(Option::is_none) else {
            debug!(row, "add rejected: row full");
            return Err(LadderError::RowFull {
                row,
                capacity: self.max_cols,
            });
        };

        let id = self.registry.register(symbol_type);
        self.grid[row][col] = Some(id);
        debug!(id, row, col, "block added at first free slot");
        Ok(self.state_at(id, row, col))
    }

    /// Place a new block at `(row, col)`, shifting neighbours if the cell is taken.
    ///
    /// The id is only consumed when the placement succeeds; a rejected add leaves
    /// the id counter where it was.
    pub fn add_at(
        &mut self,
        row: usize,
        col: usize,
        symbol_type: impl Into<String>,
        direction: ShiftDirection,
    ) -> Result<BlockState, LadderError> {
        self.check_row(row)?;
        if col >= self.max_cols {
            return Err(LadderError::ColumnOutOfRange {
                col,
                max_cols: self.max_cols,
            });
        }

        let id = self.registry.peek_id();
        let cells = &mut self.grid[row];
        if cells[col].is_none() {
            cells[col] = Some(id);
        } else if !shift_insert(cells, col, id, direction) {
            debug!(row, col, %direction, "add rejected: no free slot");
            return Err(LadderError::NoFreeSlot { row, col, direction });
        }

        let registered = self.registry.register(symbol_type);
        debug_assert_eq!(registered, id);
        debug!(id, row, col, %direction, "block added");
        Ok(self.state_at(id, row, col))
    }

    /// Move a block to `(new_row, target_col)`.
    ///
    /// An out-of-range `new_row` falls back to the block's current row and
    /// `target_col` is clamped into the row. Returns `(from, to)` cells. If the
    /// destination has no room in the requested direction the block stays where
    /// it was and the grid is unchanged.
    pub fn move_block(
        &mut self,
        id: BlockId,
        new_row: usize,
        target_col: usize,
        direction: ShiftDirection,
    ) -> Result<((usize, usize), (usize, usize)), LadderError> {
        let (old_row, old_col) = self.find_block(id).ok_or(LadderError::UnknownBlock(id))?;

        let new_row = if new_row < self.max_rows { new_row } else { old_row };
        let target_col = target_col.min(self.max_cols - 1);

        if (old_row, old_col) == (new_row, target_col) {
            return Ok(((old_row, old_col), (new_row, target_col)));
        }

        self.grid[old_row][old_col] = None;

        let cells = &mut self.grid[new_row];
        if cells[target_col].is_none() {
            cells[target_col] = Some(id);
        } else if !shift_insert(cells, target_col, id, direction) {
            self.grid[old_row][old_col] = Some(id);
            debug!(id, new_row, target_col, %direction, "move rejected: no free slot");
            return Err(LadderError::NoFreeSlot {
                row: new_row,
                col: target_col,
                direction,
            });
        }

        debug!(id, old_row, old_col, new_row, target_col, "block moved");
        Ok(((old_row, old_col), (new_row, target_col)))
    }

    /// Remove a block, returning the cell it occupied so the caller can re-layout that row.
    pub fn delete_block(&mut self, id: BlockId) -> Result<(usize, usize), LadderError> {
        let (row, col) = self.find_block(id).ok_or(LadderError::UnknownBlock(id))?;
        self.grid[row][col] = None;
        self.registry.remove(id);
        debug!(id, row, col, "block deleted");
        Ok((row, col))
    }
}

impl LadderLayout for SparseLadder {
    fn dimensions(&self) -> (usize, usize) {
        (self.max_rows, self.max_cols)
    }

    fn get_block_state(&self, id: BlockId) -> Option<BlockState> {
        let (row, col) = self.find_block(id)?;
        Some(self.state_at(id, row, col))
    }

    fn get_snapshot(&self) -> Vec<BlockState> {
        (0..self.max_rows).flat_map(|row| self.row_blocks(row)).collect()
    }

    fn row_blocks(&self, row: usize) -> Vec<BlockState> {
        let Some(cells) = self.grid.get(row) else {
            return Vec::new();
        };
        cells
            .iter()
            .enumerate()
            .filter_map(|(col, cell)| cell.map(|id| self.state_at(id, row, col)))
            .collect()
    }

    fn remove_block(&mut self, id: BlockId) -> Result<BlockState, LadderError> {
        let state = self.get_block_state(id).ok_or(LadderError::UnknownBlock(id))?;
        self.delete_block(id)?;
        Ok(state)
    }

    fn block_count(&self) -> usize {
        self.registry.len()
    }
}
