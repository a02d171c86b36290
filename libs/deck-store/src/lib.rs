//! Client-side state container for a flashcard quiz.
//!
//! A [`DeckStore`] holds the deck, the shuffled display order, the cursor,
//! the face state and the score. It persists the deck through a
//! [`KeyValueStore`] and reports changes to subscribers as [`StoreEvent`]s.

pub mod config;
pub mod error;
pub mod events;
pub mod storage;
pub mod store;

pub use config::{ConfigError, StoreConfig, DEFAULT_STORAGE_KEY};
pub use error::{Result, StoreError};
pub use events::{EventBus, StoreEvent};
pub use storage::{KeyValueStore, MemoryStorage, SqliteStorage, StorageError};
pub use store::{DeckStore, StoreSnapshot};
