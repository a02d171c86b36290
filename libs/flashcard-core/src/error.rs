//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using DeckError.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors that can occur while accepting a deck from seed data or storage.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("invalid deck json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate card ID {id} at position {position}")]
    DuplicateId { id: String, position: usize },

    #[error("missing card ID at position {position}")]
    MissingId { position: usize },
}
