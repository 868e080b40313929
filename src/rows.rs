//! Dense row lists.
//!
//! Each rung is a compact ordered list of block ids with no interior gaps. A
//! block's `index` is its ordinal within the list, so removing a block closes
//! the gap and every block after it moves one slot left.

use crate::config::LadderConfig;
use crate::error::LadderError;
use crate::registry::SymbolRegistry;
use crate::state::{BlockId, BlockState, LadderLayout};
use tracing::debug;

/// Ladder program stored as `max_rows` lists of at most `max_cols` ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseLadder {
    max_rows: usize,
    max_cols: usize,
    rows: Vec<Vec<BlockId>>,
    registry: SymbolRegistry,
}

impl DenseLadder {
    pub fn new(max_rows: usize, max_cols: usize) -> Result<Self, LadderError> {
        Self::from_config(&LadderConfig::new(max_rows, max_cols))
    }

    pub fn from_config(config: &LadderConfig) -> Result<Self, LadderError> {
        config.validate()?;
        Ok(Self {
            max_rows: config.max_rows,
            max_cols: config.max_cols,
            rows: vec![Vec::new(); config.max_rows],
            registry: SymbolRegistry::new(),
        })
    }

    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    /// Ids of a row in order, `None` for an out-of-range row.
    pub fn row_ids(&self, row: usize) -> Option<&[BlockId]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn find_block(&self, id: BlockId) -> Option<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .find_map(|(r, ids)| ids.iter().position(|&b| b == id).map(|i| (r, i)))
    }

    fn check_row_has_room(&self, row: usize) -> Result<(), LadderError> {
        let ids = self.rows.get(row).ok_or(LadderError::RowOutOfRange {
            row,
            max_rows: self.max_rows,
        })?;
        if ids.len() >= self.max_cols {
            debug!(row, "add rejected: row full");
            return Err(LadderError::RowFull {
                row,
                capacity: self.max_cols,
            });
        }
        Ok(())
    }

    fn state_at(&self, id: BlockId, row: usize, index: usize) -> BlockState {
        let symbol_type = self.registry.symbol_type(id).unwrap_or_default();
        BlockState::new(id, symbol_type, row, index, self.max_cols)
    }

    /// Append a new block to the end of `row`.
    pub fn add_end_of_row(
        &mut self,
        row: usize,
        symbol_type: impl Into<String>,
    ) -> Result<BlockState, LadderError> {
        self.check_row_has_room(row)?;
        let id = self.registry.register(symbol_type);
        self.rows[row].push(id);
        let index = self.rows[row].len() - 1;
        debug!(id, row, index, "block appended");
        Ok(self.state_at(id, row, index))
    }

    /// Insert a new block at `index` within `row`, clamped into `[0, len]`.
    pub fn insert_at(
        &mut self,
        row: usize,
        index: usize,
        symbol_type: impl Into<String>,
    ) -> Result<BlockState, LadderError> {
        self.check_row_has_room(row)?;
        let index = index.min(self.rows[row].len());
        let id = self.registry.register(symbol_type);
        self.rows[row].insert(index, id);
        debug!(id, row, index, "block inserted");
        Ok(self.state_at(id, row, index))
    }

    /// Move a block to `new_index` within `new_row`.
    ///
    /// An out-of-range `new_row` falls back to the current row. Moving into a
    /// different row that is already full is rejected without mutation. The
    /// block is taken out first and `new_index` is then clamped against the
    /// destination's length, so within one row any index past the end lands
    /// the block last. Returns `(old_row, new_row)`.
    pub fn move_block(
        &mut self,
        id: BlockId,
        new_row: usize,
        new_index: usize,
    ) -> Result<(usize, usize), LadderError> {
        let (old_row, old_index) = self.find_block(id).ok_or(LadderError::UnknownBlock(id))?;
        let new_row = if new_row < self.max_rows { new_row } else { old_row };

        if new_row != old_row && self.rows[new_row].len() >= self.max_cols {
            debug!(id, new_row, "move rejected: destination row full");
            return Err(LadderError::RowFull {
                row: new_row,
                capacity: self.max_cols,
            });
        }

        self.rows[old_row].remove(old_index);
        let dest = &mut self.rows[new_row];
        let new_index = new_index.min(dest.len());
        dest.insert(new_index, id);

        debug!(id, old_row, old_index, new_row, new_index, "block moved");
        Ok((old_row, new_row))
    }

    /// Remove a block; later blocks in the row close the gap. Returns the row.
    pub fn delete_block(&mut self, id: BlockId) -> Result<usize, LadderError> {
        let (row, index) = self.find_block(id).ok_or(LadderError::UnknownBlock(id))?;
        self.rows[row].remove(index);
        self.registry.remove(id);
        debug!(id, row, index, "block deleted");
        Ok(row)
    }
}

impl LadderLayout for DenseLadder {
    fn dimensions(&self) -> (usize, usize) {
        (self.max_rows, self.max_cols)
    }

    fn get_block_state(&self, id: BlockId) -> Option<BlockState> {
        let (row, index) = self.find_block(id)?;
        Some(self.state_at(id, row, index))
    }

    fn get_snapshot(&self) -> Vec<BlockState> {
        (0..self.max_rows).flat_map(|row| self.row_blocks(row)).collect()
    }

    fn row_blocks(&self, row: usize) -> Vec<BlockState> {
        let Some(ids) = self.rows.get(row) else {
            return Vec::new();
        };
        ids.iter()
            .enumerate()
            .map(|(index, &id)| self.state_at(id, row, index))
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
