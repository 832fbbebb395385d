//! Flashcard study session.
//!
//! Navigation is clamped to the item list and every move hides the answer.
//! There is no terminal state; reaching the last card is only reported
//! through [`FlashcardState::is_last_card`].

use crate::store::{self, VocabularySource};
use crate::types::{Language, VocabularyItem};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

/// Snapshot of a flashcard session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlashcardState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    pub items: Arc<[VocabularyItem]>,
    pub index: usize,
    pub flipped: bool,
}

impl FlashcardState {
    pub fn new(language: Option<Language>, items: impl Into<Arc<[VocabularyItem]>>) -> Self {
        Self {
            language,
            items: items.into(),
            index: 0,
            flipped: false,
        }
    }

    pub fn current_card(&self) -> Option<&VocabularyItem> {
        self.items.get(self.index)
    }

    /// Fraction of the deck reached, or 0 when empty.
    pub fn progress(&self) -> f32 {
        if self.items.is_empty() {
            0.0
        } else {
            (self.index + 1) as f32 / self.items.len() as f32
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.items.len()
    }

    pub fn is_last_card(&self) -> bool {
        !self.items.is_empty() && self.index + 1 == self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Flashcard session publishing each state change to subscribers.
#[derive(Debug)]
pub struct FlashcardSession {
    state: watch::Sender<FlashcardState>,
}

impl FlashcardSession {
    pub fn new(language: Option<Language>, items: impl Into<Arc<[VocabularyItem]>>) -> Self {
        Self {
            state: watch::Sender::new(FlashcardState::new(language, items)),
        }
    }

    /// Load the vocabulary for a language code. Unknown codes give an empty session.
    pub fn load<S>(source: &S, code: &str) -> Self
    where
        S: VocabularySource + ?Sized,
    {
        let (language, items) = store::resolve(source, code);
        info!(code, cards = items.len(), "loaded flashcards");
        Self::new(language, items)
    }

    /// Replace the whole session with another language's vocabulary.
    pub fn reload<S>(&mut self, source: &S, code: &str)
    where
        S: VocabularySource + ?Sized,
    {
        let (language, items) = store::resolve(source, code);
        info!(code, cards = items.len(), "reloaded flashcards");
        self.state.send_replace(FlashcardState::new(language, items));
    }

    pub fn subscribe(&self) -> watch::Receiver<FlashcardState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> FlashcardState {
        self.state.borrow().clone()
    }

    pub fn flip(&mut self) {
        self.state.send_if_modified(|s| {
            if s.items.is_empty() {
                return false;
            }
            s.flipped = !s.flipped;
            debug!(index = s.index, flipped = s.flipped, "flipped card");
            true
        });
    }

    pub fn next(&mut self) {
        self.state.send_if_modified(|s| {
            if !s.can_go_next() {
                debug!(index = s.index, "next ignored at last card");
                return false;
            }
            s.index += 1;
            s.flipped = false;
            debug!(index = s.index, "moved to next card");
            true
        });
    }

    pub fn previous(&mut self) {
        self.state.send_if_modified(|s| {
            if !s.can_go_previous() {
                debug!("previous ignored at first card");
                return false;
            }
            s.index -= 1;
            s.flipped = false;
            debug!(index = s.index, "moved to previous card");
            true
        });
    }

    pub fn reset(&mut self) {
        self.state.send_if_modified(|s| {
            let changed = s.index != 0 || s.flipped;
            s.index = 0;
            s.flipped = false;
            changed
        });
    }

    pub fn current_card(&self) -> Option<VocabularyItem> {
        self.state.borrow().current_card().cloned()
    }

    pub fn progress(&self) -> f32 {
        self.state.borrow().progress()
    }

    pub fn index(&self) -> usize {
        self.state.borrow().index
    }

    pub fn is_flipped(&self) -> bool {
        self.state.borrow().flipped
    }
}
