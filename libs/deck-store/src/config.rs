//! Store configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Key the deck is saved under.
pub const DEFAULT_STORAGE_KEY: &str = "flashCards";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid shuffle seed: {value}")]
    InvalidSeed { value: String },
}

/// Settings used to build a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_key: String,
    pub database_path: PathBuf,
    /// Fixed seed for the shuffle; random when unset.
    pub shuffle_seed: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            database_path: default_database_path(),
            shuffle_seed: None,
        }
    }
}

impl StoreConfig {
    /// Load configuration from the environment (and `.env`, if present).
    ///
    /// Recognized variables:
    /// - FLASHCARDS_STORAGE_KEY: key the deck is saved under
    /// - FLASHCARDS_DB_PATH: SQLite file backing the store
    /// - FLASHCARDS_SHUFFLE_SEED: u64 seed for reproducible shuffles
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(key) = lookup("FLASHCARDS_STORAGE_KEY").filter(|k| !k.is_empty()) {
            config.storage_key = key;
        }

        if let Some(path) = lookup("FLASHCARDS_DB_PATH").filter(|p| !p.is_empty()) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(seed) = lookup("FLASHCARDS_SHUFFLE_SEED") {
            let parsed = seed
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed { value: seed.clone() })?;
            config.shuffle_seed = Some(parsed);
        }

        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }
}

fn default_database_path() -> PathBuf {
    // Use app data directory when available, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flashcard-deck")
        .join("storage.db")
}
