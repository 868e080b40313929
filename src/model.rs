//! Bridges between a ladder session and Slint models.
//!
//! The UI keeps a `VecModel` per rung (or one for the whole program) and
//! refreshes it after every mutation with the rows the controller reports
//! as dirty.

use crate::state::{BlockState, LadderLayout};
use crate::symbol::SymbolKind;
use slint::{ModelRc, SharedString, VecModel};
use std::rc::Rc;

/// Replace the contents of `model` with the full program snapshot.
pub fn sync_snapshot_to_model<L: LadderLayout + ?Sized>(layout: &L, model: &VecModel<BlockState>) {
    model.set_vec(layout.get_snapshot());
}

/// Replace the contents of `model` with the blocks of one row.
pub fn sync_row_to_model<L: LadderLayout + ?Sized>(
    layout: &L,
    row: usize,
    model: &VecModel<BlockState>,
) {
    model.set_vec(layout.row_blocks(row));
}

/// Toolbox entries as `(tag, label)` string models, in the given order.
pub fn toolbox_models(kinds: &[SymbolKind]) -> (ModelRc<SharedString>, ModelRc<SharedString>) {
    let tags: Vec<SharedString> = kinds.iter().map(|k| k.tag().into()).collect();
    let labels: Vec<SharedString> = kinds.iter().map(|k| k.label().into()).collect();
    (
        ModelRc::from(Rc::new(VecModel::from(tags))),
        ModelRc::from(Rc::new(VecModel::from(labels))),
    )
}
