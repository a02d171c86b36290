//! Test fixtures and factory functions for creating test data.

use flashcard_core::CardData;

/// Build a single card record.
pub fn card(id: &str, front: &str, back: &str) -> CardData {
    CardData::new(id, front, back)
}

/// Generate `n` cards with IDs `card-1` .. `card-n`.
pub fn sample_cards(n: usize) -> Vec<CardData> {
    (1..=n)
        .map(|i| {
            CardData::new(
                format!("card-{i}"),
                format!("Question {i}?"),
                format!("Answer {i}."),
            )
        })
        .collect()
}

/// Stored deck JSON for the given cards.
pub fn stored_json(cards: &[CardData]) -> String {
    serde_json::to_string(cards).expect("serializable cards")
}
