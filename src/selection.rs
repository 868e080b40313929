use crate::state::{BlockId, LadderLayout};
use slint::{Model, VecModel};
use std::collections::BTreeSet;
use tracing::trace;

/// Selected blocks of a ladder editor, with click and shift-click semantics.
#[derive(Default, Debug, Clone)]
pub struct SelectionManager {
    selected: BTreeSet<BlockId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click on a block. Shift toggles it in the selection, a plain
    /// click makes it the only selected block.
    pub fn handle_interaction(&mut self, id: BlockId, shift_held: bool) {
        if shift_held {
            if !self.selected.remove(&id) {
                self.selected.insert(id);
            }
        } else {
            self.selected.clear();
            self.selected.insert(id);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Replace the current selection, e.g. after a rubber-band selection
    pub fn replace_selection<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = BlockId>,
    {
        self.selected.clear();
        self.selected.extend(ids);
    }

    pub fn contains(&self, id: BlockId) -> bool {
        self.selected.contains(&id)
    }

    /// Selected ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.selected.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Forget ids that are no longer placed in `layout`.
    pub fn retain_placed<L: LadderLayout + ?Sized>(&mut self, layout: &L) {
        self.selected.retain(|&id| layout.get_block_state(id).is_some());
    }

    /// Delete every selected block from `layout` and clear the selection.
    ///
    /// Returns the rows that lost a block, ascending and without duplicates, so
    /// the caller can re-layout just those rows. Ids that are already gone are
    /// skipped.
    pub fn delete_selected<L: LadderLayout + ?Sized>(&mut self, layout: &mut L) -> Vec<usize> {
        let mut rows = BTreeSet::new();
        for id in std::mem::take(&mut self.selected) {
            match layout.remove_block(id) {
                Ok(state) => {
                    rows.insert(state.row);
                }
                Err(err) => trace!(id, %err, "selected block already gone"),
            }
        }
        rows.into_iter().collect()
    }

    /// Mirror the selection into a Slint model, ascending
    pub fn sync_to_model(&self, model: &VecModel<BlockId>) {
        model.set_vec(self.selected.iter().copied().collect::<Vec<_>>());
    }

    /// Take the selection from any Slint model
    pub fn sync_from_model(&mut self, model: &dyn Model<Data = BlockId>) {
        self.selected = (0..model.row_count())
            .filter_map(|i| model.row_data(i))
            .collect();
    }
}
