//! Core types for vocabulary study.

use serde::{Deserialize, Serialize};

/// A language the user can study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub flag: String,
    /// Unique key into the vocabulary store.
    pub code: String,
}

impl Language {
    pub fn new(name: impl Into<String>, flag: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flag: flag.into(),
            code: code.into(),
        }
    }

    /// Display label, flag first.
    pub fn label(&self) -> String {
        format!("{} {}", self.flag, self.name)
    }
}

/// One word/translation pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
    /// Unique within its language's list.
    pub id: String,
    pub word: String,
    pub translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}

impl VocabularyItem {
    pub fn new(
        id: impl Into<String>,
        word: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            translation: translation.into(),
            pronunciation: None,
        }
    }

    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = Some(pronunciation.into());
        self
    }
}

/// Multiple-choice question derived from a vocabulary item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Copied from the source item.
    pub id: String,
    pub prompt: String,
    /// Shuffled; always contains `correct_option` exactly once.
    pub options: Vec<String>,
    pub correct_option: String,
    /// Source word, kept for result display.
    pub word: String,
}

impl QuizQuestion {
    /// Position of the correct option within `options`.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_option)
    }
}

/// Record of one answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub question_id: String,
    pub selected_answer: String,
    pub is_correct: bool,
}

/// Limits applied by the question generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    /// Maximum questions per quiz, taken from the front of the list.
    pub question_count: usize,
    /// Maximum wrong options shown next to the correct one.
    pub distractor_count: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            question_count: 5,
            distractor_count: 3,
        }
    }
}
