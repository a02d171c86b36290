//! Error types for the deck store.

use crate::storage::StorageError;
use flashcard_core::DeckError;
use thiserror::Error;

/// Errors surfaced by store construction and persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
