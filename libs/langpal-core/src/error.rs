//! Error types for langpal-core.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by vocabulary store lookups and construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("language not found: {code}")]
    LanguageNotFound { code: String },

    #[error("duplicate language code: {code}")]
    DuplicateLanguage { code: String },

    #[error("vocabulary for unregistered language code: {code}")]
    UnknownVocabularyCode { code: String },

    #[error("duplicate vocabulary id {id} for language {code}")]
    DuplicateItemId { code: String, id: String },
}
