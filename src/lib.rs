//! # Slint Ladder Editor Library
//!
//! Session and layout model for building ladder-logic editors with Slint.
//! Contacts, coils and timers are dropped onto a grid of rungs, dragged between
//! slots and deleted; this crate keeps track of which symbol occupies which
//! slot and resolves drop conflicts by shifting neighbours.
//!
//! ## Features
//!
//! - **Two grid policies** - [`SparseLadder`] keeps empty slots between symbols,
//!   [`DenseLadder`] keeps every rung compact
//! - **Shift-insert** - dropping onto an occupied slot pushes neighbours left or
//!   right within the rung
//! - **Stable ids** - ids are assigned monotonically and never reused
//! - **All-or-nothing operations** - a rejected add or move leaves the session untouched
//! - **Opaque symbol tags** - the session stores whatever tag the UI passes in
//!
//! ## Quick Start
//!
//! ```
//! use slint_ladder_editor::{LadderLayout, ShiftDirection, SparseLadder};
//!
//! let mut ladder = SparseLadder::new(2, 3).unwrap();
//! let contact = ladder.add_at(0, 1, "XIC", ShiftDirection::Auto).unwrap();
//! assert_eq!(contact.position, 2);
//!
//! // Dropping onto the same slot pushes the contact one slot right
//! ladder.add_at(0, 1, "XIO", ShiftDirection::Auto).unwrap();
//! assert_eq!(ladder.get_block_state(contact.id).unwrap().index, 2);
//! ```
//!
//! ## Rust Helpers
//!
//! - [`LadderController`] - Callback factories and dirty-row tracking for a Slint UI
//! - [`SelectionManager`] - Click/shift-click selection and delete-selected
//! - [`render_listing`] / [`ProgramExport`] - Text listing and JSON export
//! - [`sync_snapshot_to_model`] - Copy session state into a Slint `VecModel`

pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod grid;
pub mod model;
pub mod registry;
pub mod rows;
pub mod selection;
pub mod state;
pub mod symbol;

pub use config::LadderConfig;
pub use controller::LadderController;
pub use error::{ConfigError, LadderError};
pub use export::{render_listing, ProgramExport};
pub use grid::{ShiftDirection, SparseLadder};
pub use model::{sync_row_to_model, sync_snapshot_to_model, toolbox_models};
pub use registry::SymbolRegistry;
pub use rows::DenseLadder;
pub use selection::SelectionManager;
pub use state::{global_position, BlockId, BlockState, LadderLayout};
pub use symbol::{SymbolKind, UnknownSymbol};
