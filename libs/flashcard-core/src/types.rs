//! Core types for the flashcard deck.

use serde::{Deserialize, Serialize};

/// ID reported by the placeholder card when nothing is under the cursor.
pub const SENTINEL_ID: &str = "UNDEF";

const SENTINEL_FRONT: &str = "NO CARDS";
const SENTINEL_BACK: &str = "Could be an error";

/// Outcome recorded for a card in the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answered {
    Unanswered,
    Correct,
    Incorrect,
}

impl Default for Answered {
    fn default() -> Self {
        Self::Unanswered
    }
}

impl Answered {
    /// Whether an outcome has already been recorded.
    pub fn is_answered(self) -> bool {
        !matches!(self, Self::Unanswered)
    }
}

/// Persisted projection of a card: exactly the fields written to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub id: String,
    pub front_text: String,
    pub back_text: String,
}

impl CardData {
    pub fn new(
        id: impl Into<String>,
        front_text: impl Into<String>,
        back_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            front_text: front_text.into(),
            back_text: back_text.into(),
        }
    }
}

/// Card held by the deck, with its session outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub front_text: String,
    pub back_text: String,
    #[serde(default)]
    pub answered: Answered,
}

impl Card {
    /// Placeholder returned when the cursor does not point at a real card.
    pub fn sentinel() -> Self {
        Self {
            id: SENTINEL_ID.to_string(),
            front_text: SENTINEL_FRONT.to_string(),
            back_text: SENTINEL_BACK.to_string(),
            answered: Answered::Unanswered,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.id == SENTINEL_ID
    }

    /// Drop the session outcome, keeping what gets persisted.
    pub fn to_data(&self) -> CardData {
        CardData {
            id: self.id.clone(),
            front_text: self.front_text.clone(),
            back_text: self.back_text.clone(),
        }
    }
}

impl From<CardData> for Card {
    fn from(data: CardData) -> Self {
        Self {
            id: data.id,
            front_text: data.front_text,
            back_text: data.back_text,
            answered: Answered::Unanswered,
        }
    }
}
