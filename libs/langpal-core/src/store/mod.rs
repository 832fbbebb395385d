//! Vocabulary store: language list plus per-language vocabulary.

mod bundled;

use crate::error::{CoreError, Result};
use crate::types::{Language, VocabularyItem};
use std::collections::{HashMap, HashSet};

/// Read-only source of languages and vocabulary.
pub trait VocabularySource {
    /// All languages in authoring order.
    fn list_languages(&self) -> &[Language];

    /// Look up a language by code.
    fn lookup_language(&self, code: &str) -> Result<&Language>;

    /// Vocabulary for a code. Empty when nothing is authored or the code is unknown.
    fn lookup_vocabulary(&self, code: &str) -> &[VocabularyItem];
}

/// In-memory store keyed by language code.
#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    languages: Vec<Language>,
    vocabulary: HashMap<String, Vec<VocabularyItem>>,
}

impl VocabularyStore {
    /// Build a store, rejecting duplicate language codes, duplicate item ids
    /// and vocabulary lists for codes with no language.
    pub fn new<I>(languages: Vec<Language>, vocabulary: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<VocabularyItem>)>,
    {
        let mut codes = HashSet::new();
        for language in &languages {
            if !codes.insert(language.code.as_str()) {
                return Err(CoreError::DuplicateLanguage {
                    code: language.code.clone(),
                });
            }
        }

        let mut map = HashMap::new();
        for (code, items) in vocabulary {
            if !codes.contains(code.as_str()) {
                return Err(CoreError::UnknownVocabularyCode { code });
            }
            let mut ids = HashSet::new();
            for item in &items {
                if !ids.insert(item.id.as_str()) {
                    return Err(CoreError::DuplicateItemId {
                        code,
                        id: item.id.clone(),
                    });
                }
            }
            map.insert(code, items);
        }

        Ok(Self {
            languages,
            vocabulary: map,
        })
    }

    /// Store holding the dataset that ships with the application.
    pub fn bundled() -> Self {
        bundled::store()
    }
}

impl VocabularySource for VocabularyStore {
    fn list_languages(&self) -> &[Language] {
        &self.languages
    }

    fn lookup_language(&self, code: &str) -> Result<&Language> {
        self.languages
            .iter()
            .find(|l| l.code == code)
            .ok_or_else(|| CoreError::LanguageNotFound { code: code.to_string() })
    }

    fn lookup_vocabulary(&self, code: &str) -> &[VocabularyItem] {
        self.vocabulary.get(code).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Resolve everything a session needs for one language code.
///
/// Unknown codes resolve to no language and an empty list, even when the
/// source holds vocabulary under that code.
pub(crate) fn resolve<S>(source: &S, code: &str) -> (Option<Language>, Vec<VocabularyItem>)
where
    S: VocabularySource + ?Sized,
{
    let Ok(language) = source.lookup_language(code) else {
        tracing::debug!(code, "unknown language code, loading empty list");
        return (None, Vec::new());
    };

    let items = source.lookup_vocabulary(code).to_vec();
    if items.is_empty() {
        tracing::warn!(code, "no vocabulary authored for language");
    }

    (Some(language.clone()), items)
}
