//! Account identifier allocation.

use crate::model::AccountId;

/// Source of fresh account identifiers.
///
/// Clients take an allocator by `&mut` when opening accounts, so callers
/// decide whether identifiers are shared across clients or not.
pub trait IdAllocator {
    fn next_id(&mut self) -> AccountId;
}

/// Monotonic identifier sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    next: AccountId,
}

impl Sequence {
    pub const DEFAULT_FIRST: AccountId = 1000;

    pub fn new(first: AccountId) -> Self {
        Self { next: first }
    }

    /// Identifier the next call to `next_id` returns.
    pub fn peek(&self) -> AccountId {
        self.next
    }

    pub fn reset(&mut self, first: AccountId) {
        self.next = first;
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FIRST)
    }
}

impl IdAllocator for Sequence {
    fn next_id(&mut self) -> AccountId {
        let id = self.next;
        self.next += 1;
        id
    }
}
