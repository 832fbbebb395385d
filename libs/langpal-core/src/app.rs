//! Entry point used by presentation layers.

use crate::error::Result;
use crate::flashcard::FlashcardSession;
use crate::quiz::QuizSession;
use crate::store::{VocabularySource, VocabularyStore};
use crate::types::{Language, QuizSettings};

/// Vocabulary source plus quiz settings, handed to every new session.
#[derive(Debug, Clone)]
pub struct Langpal<S = VocabularyStore> {
    source: S,
    settings: QuizSettings,
}

impl Langpal<VocabularyStore> {
    /// Bundled dataset with default settings.
    pub fn bundled() -> Self {
        Self::new(VocabularyStore::bundled(), QuizSettings::default())
    }
}

impl<S: VocabularySource> Langpal<S> {
    pub fn new(source: S, settings: QuizSettings) -> Self {
        Self { source, settings }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn list_languages(&self) -> &[Language] {
        self.source.list_languages()
    }

    pub fn get_language(&self, code: &str) -> Result<&Language> {
        self.source.lookup_language(code)
    }

    pub fn load_flashcards(&self, code: &str) -> FlashcardSession {
        FlashcardSession::load(&self.source, code)
    }

    pub fn load_quiz(&self, code: &str) -> QuizSession {
        QuizSession::load(&self.source, code, &self.settings)
    }
}
