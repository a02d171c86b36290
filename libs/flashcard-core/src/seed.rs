//! Deck data sources.
//!
//! # Formats
//! Bundled seed file:
//! ```json
//! { "flashCards": [{ "id": "a", "frontText": "Q1", "backText": "A1" }] }
//! ```
//! Stored deck (the value written under the storage key):
//! ```json
//! [{ "id": "a", "frontText": "Q1", "backText": "A1" }]
//! ```

use crate::error::{DeckError, Result};
use crate::types::{Card, CardData};
use serde::Deserialize;
use std::collections::HashSet;

const DEFAULT_DECK: &str = include_str!("../data/flash-cards.json");

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedFile {
    flash_cards: Vec<CardData>,
}

/// The deck bundled with the library.
pub fn default_deck() -> Result<Vec<CardData>> {
    parse_seed(DEFAULT_DECK)
}

/// Parse a seed file wrapped in a `flashCards` object.
pub fn parse_seed(content: &str) -> Result<Vec<CardData>> {
    let seed: SeedFile = serde_json::from_str(content)?;
    validate_ids(&seed.flash_cards)?;
    Ok(seed.flash_cards)
}

/// Parse a stored deck: a flat array of card records.
pub fn parse_cards(content: &str) -> Result<Vec<CardData>> {
    let cards: Vec<CardData> = serde_json::from_str(content)?;
    validate_ids(&cards)?;
    Ok(cards)
}

/// Serialize cards to the stored deck format, in deck order.
pub fn serialize_cards(cards: &[Card]) -> Result<String> {
    let data: Vec<CardData> = cards.iter().map(Card::to_data).collect();
    serde_json::to_string(&data).map_err(Into::into)
}

/// Check that every card has an ID and no ID repeats.
pub fn validate_ids(cards: &[CardData]) -> Result<()> {
    let mut seen_ids = HashSet::with_capacity(cards.len());

    for (position, card) in cards.iter().enumerate() {
        if card.id.trim().is_empty() {
            return Err(DeckError::MissingId { position });
        }
        if !seen_ids.insert(card.id.as_str()) {
            return Err(DeckError::DuplicateId {
                id: card.id.clone(),
                position,
            });
        }
    }

    Ok(())
}
