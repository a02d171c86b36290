//! Core flashcard library used by the deck store.
//!
//! Provides:
//! - Shared types (Card, CardData, Answered)
//! - Fisher-Yates shuffling of the display order
//! - The bundled seed deck and the stored deck JSON format

pub mod error;
pub mod seed;
pub mod shuffle;
pub mod types;

pub use error::{DeckError, Result};
pub use seed::{default_deck, parse_cards, parse_seed, serialize_cards, validate_ids};
pub use shuffle::{fisher_yates, shuffle_order};
pub use types::{Answered, Card, CardData, SENTINEL_ID};
