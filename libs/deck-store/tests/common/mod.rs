//! Shared helpers for deck store integration tests.

#![allow(dead_code)]

pub mod fixtures;

use deck_store::{DeckStore, MemoryStorage, StoreConfig};
use flashcard_core::CardData;

/// Config with a fixed shuffle seed so runs are reproducible.
pub fn test_config() -> StoreConfig {
    StoreConfig {
        storage_key: "flashCards".to_string(),
        database_path: std::env::temp_dir().join("deck-store-tests.db"),
        shuffle_seed: Some(7),
    }
}

/// In-memory store over the given cards.
pub fn memory_store(cards: Vec<CardData>) -> DeckStore<MemoryStorage> {
    DeckStore::new(cards, MemoryStorage::new(), &test_config()).expect("valid test deck")
}

/// In-memory store over `n` generated cards.
pub fn sample_store(n: usize) -> DeckStore<MemoryStorage> {
    memory_store(fixtures::sample_cards(n))
}
