//! Application state.

use langpal_core::{FlashcardSession, Langpal, QuizSession, VocabularySource, VocabularyStore};

/// Screen currently shown, owning its session.
#[derive(Debug)]
pub enum Screen {
    Languages,
    Flashcards { code: String, session: FlashcardSession },
    Quiz { code: String, session: QuizSession },
}

/// Global application state.
pub struct AppState<S = VocabularyStore> {
    pub app: Langpal<S>,
    pub screen: Screen,
}

impl<S: VocabularySource> AppState<S> {
    pub fn new(app: Langpal<S>) -> Self {
        Self {
            app,
            screen: Screen::Languages,
        }
    }

    /// Sessions are created fresh on every visit.
    pub fn open_flashcards(&mut self, code: &str) {
        self.screen = Screen::Flashcards {
            code: code.to_string(),
            session: self.app.load_flashcards(code),
        };
    }

    pub fn open_quiz(&mut self, code: &str) {
        self.screen = Screen::Quiz {
            code: code.to_string(),
            session: self.app.load_quiz(code),
        };
    }

    pub fn back_to_languages(&mut self) {
        self.screen = Screen::Languages;
    }
}
