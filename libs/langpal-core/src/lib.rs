//! Core vocabulary study library shared by every presentation layer.
//!
//! Provides:
//! - Vocabulary store with the bundled language dataset
//! - Multiple-choice quiz question generator
//! - Flashcard and quiz session state machines with observable state
//! - Shared types (Language, VocabularyItem, QuizQuestion, etc.)

pub mod app;
pub mod error;
pub mod flashcard;
pub mod generator;
pub mod quiz;
pub mod store;
pub mod types;

pub use app::Langpal;
pub use error::{CoreError, Result};
pub use flashcard::{FlashcardSession, FlashcardState};
pub use generator::{generate_questions, generate_questions_with_rng, prompt_for};
pub use quiz::{QuestionReview, QuizSession, QuizState, ScoreBand};
pub use store::{VocabularySource, VocabularyStore};
pub use types::{Language, QuizQuestion, QuizResult, QuizSettings, VocabularyItem};
