//! High-level controller for ladder editor applications.
//!
//! The [`LadderController`] owns the session and the selection and hands out
//! callbacks a Slint UI can install directly. After every callback the UI asks
//! for the dirty rows and re-lays only those rungs.
//!
//! # Example
//!
//! ```ignore
//! use slint_ladder_editor::{LadderConfig, LadderController};
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let ctrl = LadderController::new(&LadderConfig::default()).unwrap();
//!
//!     // Toolbox drop: the UI maps the pointer to (row, col) and passes the tag
//!     window.on_symbol_dropped(ctrl.drop_symbol_callback());
//!     window.on_block_drag_started(ctrl.block_drag_started_callback());
//!
//!     window.on_block_released({
//!         let ctrl = ctrl.clone();
//!         move |row, col, hint| {
//!             ctrl.handle_block_released(ctrl.dragged_block_id(), row, col, hint);
//!         }
//!     });
//!
//!     window.on_delete_selected({
//!         let ctrl = ctrl.clone();
//!         move || {
//!             ctrl.handle_delete_selected();
//!         }
//!     });
//!
//!     window.run().unwrap();
//! }
//! ```

use crate::config::LadderConfig;
use crate::error::LadderError;
use crate::export::render_listing;
use crate::grid::{ShiftDirection, SparseLadder};
use crate::selection::SelectionManager;
use crate::state::{BlockId, BlockState, LadderLayout};
use slint::SharedString;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use tracing::debug;

/// Convert a UI row/column to a grid index. Negative values map past the end
/// so the session treats them as out of range.
fn to_index(value: i32) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Controller that manages ladder editor state and provides callback implementations.
///
/// This provides a high-level API that handles:
/// - Dropping new symbols from the toolbox onto the grid
/// - Drag tracking and release-to-move with a left/right shift hint
/// - Click selection and delete-selected
/// - Dirty-row tracking so only affected rungs are re-laid out
///
/// Clone this controller to share it across callbacks.
#[derive(Clone)]
pub struct LadderController {
    session: Rc<RefCell<SparseLadder>>,
    selection: Rc<RefCell<SelectionManager>>,
    dirty_rows: Rc<RefCell<BTreeSet<usize>>>,
    dragged_block_id: Rc<RefCell<BlockId>>,
}

impl LadderController {
    /// Create a controller around an empty session.
    pub fn new(config: &LadderConfig) -> Result<Self, LadderError> {
        Ok(Self::with_session(SparseLadder::from_config(config)?))
    }

    /// Wrap an existing session.
    pub fn with_session(session: SparseLadder) -> Self {
        Self {
            session: Rc::new(RefCell::new(session)),
            selection: Rc::new(RefCell::new(SelectionManager::new())),
            dirty_rows: Rc::new(RefCell::new(BTreeSet::new())),
            dragged_block_id: Rc::new(RefCell::new(0)),
        }
    }

    /// Get access to the session.
    pub fn session(&self) -> Rc<RefCell<SparseLadder>> {
        self.session.clone()
    }

    /// Get access to the selection.
    pub fn selection(&self) -> Rc<RefCell<SelectionManager>> {
        self.selection.clone()
    }

    /// ID of the block currently being dragged (0 if none).
    pub fn dragged_block_id(&self) -> BlockId {
        *self.dragged_block_id.borrow()
    }

    /// Rows changed since the last call, ascending. Clears the set.
    pub fn take_dirty_rows(&self) -> Vec<usize> {
        std::mem::take(&mut *self.dirty_rows.borrow_mut())
            .into_iter()
            .collect()
    }

    fn mark_dirty(&self, row: usize) {
        self.dirty_rows.borrow_mut().insert(row);
    }

    // === Callback factories ===

    /// Returns a callback for a toolbox drop: `(row, col, symbol_type) -> id`.
    ///
    /// The callback returns `-1` when the row has no room.
    pub fn drop_symbol_callback(&self) -> impl Fn(i32, i32, SharedString) -> i32 {
        let ctrl = self.clone();
        move |row, col, symbol_type| {
            ctrl.handle_drop(row, col, symbol_type.as_str())
                .map_or(-1, |state| state.id)
        }
    }

    /// Returns a callback for `block-drag-started`.
    pub fn block_drag_started_callback(&self) -> impl Fn(i32) {
        let dragged_block_id = self.dragged_block_id.clone();
        move |block_id| {
            *dragged_block_id.borrow_mut() = block_id;
        }
    }

    // === Direct handlers ===

    /// Place a dropped symbol at `(row, col)`, shifting neighbours automatically.
    pub fn handle_drop(
        &self,
        row: i32,
        col: i32,
        symbol_type: &str,
    ) -> Result<BlockState, LadderError> {
        let state = self.session.borrow_mut().add_at(
            to_index(row),
            to_index(col),
            symbol_type,
            ShiftDirection::Auto,
        )?;
        self.mark_dirty(state.row);
        Ok(state)
    }

    /// Handle block-drag-started: track the dragged block.
    pub fn handle_block_drag_started(&self, block_id: BlockId) {
        *self.dragged_block_id.borrow_mut() = block_id;
    }

    /// Move a released block to `(row, col)`.
    ///
    /// `direction_hint` is positive when the pointer landed right of the cell
    /// centre and negative when it landed left. Negative columns clamp to 0 and
    /// out-of-range rows keep the block on its rung. When the move is rejected
    /// the block's own row is still marked dirty so the shape snaps back.
    /// Returns whether the block moved.
    pub fn handle_block_released(
        &self,
        block_id: BlockId,
        row: i32,
        col: i32,
        direction_hint: i32,
    ) -> bool {
        *self.dragged_block_id.borrow_mut() = 0;
        let direction = ShiftDirection::from_hint(direction_hint);
        let target_col = usize::try_from(col).unwrap_or(0);

        let result =
            self.session
                .borrow_mut()
                .move_block(block_id, to_index(row), target_col, direction);
        match result {
            Ok(((old_row, _), (new_row, _))) => {
                self.mark_dirty(old_row);
                self.mark_dirty(new_row);
                true
            }
            Err(err) => {
                debug!(block_id, %err, "release rejected, snapping back");
                if let Some(state) = self.session.borrow().get_block_state(block_id) {
                    self.mark_dirty(state.row);
                }
                false
            }
        }
    }

    /// Handle a click on a block.
    pub fn handle_block_clicked(&self, block_id: BlockId, shift_held: bool) {
        self.selection
            .borrow_mut()
            .handle_interaction(block_id, shift_held);
    }

    /// Delete every selected block. Returns the rows that changed.
    pub fn handle_delete_selected(&self) -> Vec<usize> {
        let rows = self
            .selection
            .borrow_mut()
            .delete_selected(&mut *self.session.borrow_mut());
        for &row in &rows {
            self.mark_dirty(row);
        }
        rows
    }

    /// Delete a single block regardless of the selection.
    pub fn handle_delete_block(&self, block_id: BlockId) -> Result<(usize, usize), LadderError> {
        let cell = self.session.borrow_mut().delete_block(block_id)?;
        self.selection
            .borrow_mut()
            .retain_placed(&*self.session.borrow());
        self.mark_dirty(cell.0);
        Ok(cell)
    }

    /// Blocks of a row in column order, for re-laying a rung.
    pub fn row_layout(&self, row: usize) -> Vec<BlockState> {
        self.session.borrow().row_blocks(row)
    }

    /// Text listing of the program, one line per rung.
    pub fn program_listing(&self) -> SharedString {
        render_listing(&*self.session.borrow()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> LadderController {
        LadderController::new(&LadderConfig::new(2, 3)).unwrap()
    }

    #[test]
    fn test_to_index_maps_negative_out_of_range() {
        assert_eq!(to_index(3), 3);
        assert_eq!(to_index(-1), usize::MAX);
    }

    #[test]
    fn test_new_rejects_bad_config() {
        assert!(LadderController::new(&LadderConfig::new(0, 0)).is_err());
    }

    #[test]
    fn test_drop_callback_returns_id_or_minus_one() {
        let ctrl = LadderController::new(&LadderConfig::new(1, 1)).unwrap();
        let drop = ctrl.drop_symbol_callback();
        assert_eq!(drop(0, 0, "XIC".into()), 1);
        assert_eq!(drop(0, 0, "XIO".into()), -1);
        assert_eq!(drop(-1, 0, "XIO".into()), -1);
        assert_eq!(ctrl.take_dirty_rows(), vec![0]);
    }

    #[test]
    fn test_drag_started_then_release_clears_dragged() {
        let ctrl = controller();
        let id = ctrl.handle_drop(0, 0, "XIC").unwrap().id;
        ctrl.block_drag_started_callback()(id);
        assert_eq!(ctrl.dragged_block_id(), id);

        assert!(ctrl.handle_block_released(id, 1, 2, 1));
        assert_eq!(ctrl.dragged_block_id(), 0);
        assert_eq!(ctrl.take_dirty_rows(), vec![0, 1]);
        assert!(ctrl.take_dirty_rows().is_empty());
    }

    #[test]
    fn test_release_negative_column_clamps_to_zero() {
        let ctrl = controller();
        let id = ctrl.handle_drop(0, 2, "OTE").unwrap().id;
        assert!(ctrl.handle_block_released(id, 0, -4, -1));
        assert_eq!(ctrl.session().borrow().cell(0, 0), Some(id));
    }

    #[test]
    fn test_rejected_release_marks_source_row() {
        let ctrl = controller();
        let id = ctrl.handle_drop(0, 0, "XIC").unwrap().id;
        for col in 0..3 {
            ctrl.handle_drop(1, col, "OTE").unwrap();
        }
        ctrl.take_dirty_rows();

        assert!(!ctrl.handle_block_released(id, 1, 1, 0));
        assert_eq!(ctrl.take_dirty_rows(), vec![0]);
        assert_eq!(ctrl.session().borrow().cell(0, 0), Some(id));
    }

    #[test]
    fn test_delete_block_prunes_selection() {
        let ctrl = controller();
        let id = ctrl.handle_drop(1, 1, "TON").unwrap().id;
        ctrl.handle_block_clicked(id, false);
        assert_eq!(ctrl.handle_delete_block(id), Ok((1, 1)));
        assert!(ctrl.selection().borrow().is_empty());
        assert!(ctrl.handle_delete_block(id).is_err());
    }

    #[test]
    fn test_program_listing() {
        let ctrl = controller();
        ctrl.handle_drop(0, 1, "XIC").unwrap();
        assert_eq!(
            ctrl.program_listing().as_str(),
            "Row 0: .  XIC(1)  .\nRow 1: .  .  .\n"
        );
    }
}
