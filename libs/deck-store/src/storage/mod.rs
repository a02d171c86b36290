//! Key-value persistence for the deck.

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;

pub use error::StorageError;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

type Result<T> = std::result::Result<T, StorageError>;

/// Durable string key-value store the deck is saved into.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}
