//! Lending error model.

use thiserror::Error;

use crate::id::{HolderId, ItemId};

/// Result type used across the lending domain.
pub type LendingResult<T> = Result<T, LendingError>;

/// Domain-level lending outcome other than success.
///
/// Every variant is an expected, recoverable result of a store operation:
/// when one is returned, nothing was mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LendingError {
    /// No item with this identifier exists in the store.
    #[error("item {0} not found")]
    NotFound(ItemId),

    /// Borrow attempted on an item that is already lent out.
    #[error("item {id} is already borrowed by {holder}")]
    AlreadyBorrowed { id: ItemId, holder: HolderId },

    /// Return (or fine query) attempted on an item that is not lent out.
    #[error("item {0} was not borrowed")]
    NotBorrowed(ItemId),

    /// A holder identifier was empty.
    #[error("holder id cannot be empty")]
    InvalidHolder,
}

impl LendingError {
    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound(id)
    }

    pub fn already_borrowed(id: ItemId, holder: HolderId) -> Self {
        Self::AlreadyBorrowed { id, holder }
    }

    pub fn not_borrowed(id: ItemId) -> Self {
        Self::NotBorrowed(id)
    }

    /// Identifier of the item the error concerns, if any.
    pub fn item_id(&self) -> Option<ItemId> {
        match self {
            Self::NotFound(id) | Self::NotBorrowed(id) => Some(*id),
            Self::AlreadyBorrowed { id, .. } => Some(*id),
            Self::InvalidHolder => None,
        }
    }
}
