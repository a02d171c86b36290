//! The deck store: cards, display order, cursor and score.

use crate::config::StoreConfig;
use crate::error::Result;
use crate::events::{EventBus, StoreEvent};
use crate::storage::{KeyValueStore, SqliteStorage};
use flashcard_core::{
    default_deck, parse_cards, serialize_cards, shuffle_order, validate_ids, Answered, Card,
    CardData,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::mpsc::Receiver;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Read-only view of every field a presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSnapshot {
    pub cards: Vec<Card>,
    pub display_order: Vec<String>,
    pub cursor: usize,
    pub current_card: Card,
    pub is_front: bool,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub total_answered: u32,
    pub has_answered_all: bool,
}

/// Owns the deck and the quiz session over it.
pub struct DeckStore<S: KeyValueStore> {
    cards: Vec<Card>,
    display_order: Vec<String>,
    cursor: usize,
    correct_count: u32,
    incorrect_count: u32,
    is_front: bool,
    storage: S,
    storage_key: String,
    rng: StdRng,
    events: EventBus,
}

impl DeckStore<SqliteStorage> {
    /// Open a store over the bundled deck, persisting to the configured SQLite file.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let storage = SqliteStorage::open(&config.database_path)?;
        Self::with_default_deck(storage, config)
    }
}

impl<S: KeyValueStore> DeckStore<S> {
    /// Build a store from seed cards. Every card starts unanswered.
    pub fn new(seed: Vec<CardData>, storage: S, config: &StoreConfig) -> Result<Self> {
        validate_ids(&seed)?;

        let mut rng = match config.shuffle_seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::from_entropy(),
        };
        let cards: Vec<Card> = seed.into_iter().map(Card::from).collect();
        let display_order = shuffle_order(&cards, &mut rng);

        info!(
            card_count = cards.len(),
            storage_key = %config.storage_key,
            "deck store initialized"
        );

        Ok(Self {
            cards,
            display_order,
            cursor: 0,
            correct_count: 0,
            incorrect_count: 0,
            is_front: true,
            storage,
            storage_key: config.storage_key.clone(),
            rng,
            events: EventBus::new(),
        })
    }

    /// Build a store over the deck bundled with the library.
    pub fn with_default_deck(storage: S, config: &StoreConfig) -> Result<Self> {
        Self::new(default_deck()?, storage, config)
    }

    // Read access

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn display_order(&self) -> &[String] {
        &self.display_order
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_front(&self) -> bool {
        self.is_front
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn incorrect_count(&self) -> u32 {
        self.incorrect_count
    }

    pub fn deck_size(&self) -> usize {
        self.cards.len()
    }

    pub fn total_answered(&self) -> u32 {
        self.correct_count + self.incorrect_count
    }

    /// True once the score covers every card in the deck (trivially for an empty deck).
    pub fn has_answered_all(&self) -> bool {
        self.total_answered() as usize == self.cards.len()
    }

    /// Card under the cursor, or the sentinel card when there is none.
    pub fn current_card(&self) -> Card {
        self.display_order
            .get(self.cursor)
            .and_then(|id| self.card(id))
            .cloned()
            .unwrap_or_else(Card::sentinel)
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            cards: self.cards.clone(),
            display_order: self.display_order.clone(),
            cursor: self.cursor,
            current_card: self.current_card(),
            is_front: self.is_front,
            correct_count: self.correct_count,
            incorrect_count: self.incorrect_count,
            total_answered: self.total_answered(),
            has_answered_all: self.has_answered_all(),
        }
    }

    /// Receive an event after every change to the store.
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    // Session actions

    pub fn flip(&mut self) {
        self.is_front = !self.is_front;
        self.events.emit(StoreEvent::Flipped {
            is_front: self.is_front,
        });
    }

    /// Mark a card correct. Unknown or already answered cards are left alone.
    pub fn record_correct(&mut self, id: &str) -> bool {
        self.record(id, Answered::Correct)
    }

    /// Mark a card incorrect. Unknown or already answered cards are left alone.
    pub fn record_incorrect(&mut self, id: &str) -> bool {
        self.record(id, Answered::Incorrect)
    }

    fn record(&mut self, id: &str, outcome: Answered) -> bool {
        let Some(card) = self.cards.iter_mut().find(|card| card.id == id) else {
            debug!(card_id = id, "answer ignored: unknown card");
            return false;
        };
        if card.answered.is_answered() {
            debug!(card_id = id, "answer ignored: already answered");
            return false;
        }

        card.answered = outcome;
        match outcome {
            Answered::Correct => self.correct_count += 1,
            Answered::Incorrect => self.incorrect_count += 1,
            Answered::Unanswered => {}
        }

        debug!(card_id = id, ?outcome, "answer recorded");
        self.events.emit(StoreEvent::CardAnswered {
            id: id.to_string(),
            answered: outcome,
            correct_count: self.correct_count,
            incorrect_count: self.incorrect_count,
        });
        true
    }

    pub fn move_left(&mut self) {
        let len = self.display_order.len();
        if len == 0 {
            return;
        }

        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
        self.cursor_moved();
    }

    pub fn move_right(&mut self) {
        let len = self.display_order.len();
        if len == 0 {
            return;
        }

        self.cursor = if self.cursor + 1 >= len { 0 } else { self.cursor + 1 };
        self.cursor_moved();
    }

    fn cursor_moved(&mut self) {
        debug!(cursor = self.cursor, "cursor moved");
        self.events.emit(StoreEvent::CursorMoved {
            cursor: self.cursor,
        });
    }

    /// Clear every outcome and the score, then reshuffle. The face is left as is.
    pub fn reset_cards_and_score(&mut self) {
        for card in &mut self.cards {
            card.answered = Answered::Unanswered;
        }
        self.display_order = shuffle_order(&self.cards, &mut self.rng);
        self.cursor = 0;
        self.correct_count = 0;
        self.incorrect_count = 0;

        info!(card_count = self.cards.len(), "cards and score reset");
        self.events.emit(StoreEvent::DeckReset);
    }

    /// Append a new card and return its ID. The card goes to the end of the
    /// display order so navigation can reach it.
    pub fn add_card(
        &mut self,
        front_text: impl Into<String>,
        back_text: impl Into<String>,
    ) -> String {
        let id = Uuid::new_v4().to_string();

        self.cards.push(Card::from(CardData {
            id: id.clone(),
            front_text: front_text.into(),
            back_text: back_text.into(),
        }));
        self.display_order.push(id.clone());

        debug!(card_id = %id, "card added");
        self.events.emit(StoreEvent::CardAdded { id: id.clone() });
        id
    }

    // Persistence

    /// Write the deck (IDs and text only) under the storage key.
    pub fn save_to_storage(&mut self) -> Result<()> {
        let json = serialize_cards(&self.cards)?;
        self.storage.set(&self.storage_key, &json)?;

        info!(card_count = self.cards.len(), key = %self.storage_key, "deck saved");
        self.events.emit(StoreEvent::DeckSaved {
            card_count: self.cards.len(),
        });
        Ok(())
    }

    /// Replace the deck with the stored one. Returns `false` when nothing is stored.
    ///
    /// Cards still in the deck keep their outcome and the score is recounted
    /// from them, so no card is scored twice. The cursor is kept. The display
    /// order is not reshuffled: IDs that left the deck are dropped and new
    /// ones are appended in deck order.
    pub fn load_from_storage(&mut self) -> Result<bool> {
        let Some(json) = self.storage.get(&self.storage_key)? else {
            debug!(key = %self.storage_key, "no stored deck");
            return Ok(false);
        };

        let loaded = parse_cards(&json).map_err(|e| {
            warn!(key = %self.storage_key, error = %e, "stored deck rejected");
            e
        })?;

        let previous: HashMap<String, Answered> = self
            .cards
            .drain(..)
            .map(|card| (card.id, card.answered))
            .collect();
        self.cards = loaded
            .into_iter()
            .map(|data| {
                let answered = previous.get(&data.id).copied().unwrap_or_default();
                Card {
                    answered,
                    ..Card::from(data)
                }
            })
            .collect();
        self.recount_score();
        self.reconcile_display_order();

        info!(card_count = self.cards.len(), key = %self.storage_key, "deck loaded");
        self.events.emit(StoreEvent::DeckLoaded {
            card_count: self.cards.len(),
        });
        Ok(true)
    }

    fn recount_score(&mut self) {
        self.correct_count = 0;
        self.incorrect_count = 0;
        for card in &self.cards {
            match card.answered {
                Answered::Correct => self.correct_count += 1,
                Answered::Incorrect => self.incorrect_count += 1,
                Answered::Unanswered => {}
            }
        }
    }

    fn reconcile_display_order(&mut self) {
        let members: HashSet<&str> = self.cards.iter().map(|card| card.id.as_str()).collect();
        self.display_order.retain(|id| members.contains(id.as_str()));

        let ordered: HashSet<String> = self.display_order.iter().cloned().collect();
        for card in &self.cards {
            if !ordered.contains(&card.id) {
                self.display_order.push(card.id.clone());
            }
        }

        if self.cursor >= self.display_order.len() {
            self.cursor = 0;
        }
    }
}
