//! Id allocation and symbol type bookkeeping shared by both grid policies.

use crate::state::BlockId;
use std::collections::HashMap;

/// Owns the id counter and the id -> symbol type map of one session.
///
/// The counter lives on the instance so independent sessions never interfere.
/// Ids are only consumed by [`register`](Self::register); a placement that is
/// rejected after [`peek_id`](Self::peek_id) leaves the counter untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolRegistry {
    next_id: BlockId,
    symbol_types: HashMap<BlockId, String>,
}

impl Default for SymbolRegistry {
    fn default() -> Self {
        Self {
            next_id: 1,
            symbol_types: HashMap::new(),
        }
    }
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next successful registration will receive.
    pub fn peek_id(&self) -> BlockId {
        self.next_id
    }

    /// Commit the next id and record its symbol type.
    pub fn register(&mut self, symbol_type: impl Into<String>) -> BlockId {
        let id = self.next_id;
        self.next_id += 1;
        self.symbol_types.insert(id, symbol_type.into());
        id
    }

    /// Drop the type entry of a deleted block. The id is not reclaimed.
    pub fn remove(&mut self, id: BlockId) -> Option<String> {
        self.symbol_types.remove(&id)
    }

    pub fn symbol_type(&self, id: BlockId) -> Option<&str> {
        self.symbol_types.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: BlockId) -> bool {
        self.symbol_types.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.symbol_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbol_types.is_empty()
    }
}
