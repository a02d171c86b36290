//! Change notifications for a presentation layer.

use flashcard_core::Answered;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Event emitted after the store changes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    Flipped {
        is_front: bool,
    },
    CursorMoved {
        cursor: usize,
    },
    CardAnswered {
        id: String,
        answered: Answered,
        correct_count: u32,
        incorrect_count: u32,
    },
    CardAdded {
        id: String,
    },
    DeckReset,
    DeckSaved {
        card_count: usize,
    },
    DeckLoaded {
        card_count: usize,
    },
}

/// Fan-out of store events to any number of subscribers.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Sender<StoreEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber. Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Send an event to every live subscriber, pruning disconnected ones.
    pub fn emit(&mut self, event: StoreEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
