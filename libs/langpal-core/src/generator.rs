//! Multiple-choice question generation.
//!
//! Questions are built from a deterministic prefix of the vocabulary list.
//! Wrong options come from the other items' translations in list order;
//! only the final option list is shuffled.

use crate::types::{QuizQuestion, QuizSettings, VocabularyItem};
use rand::seq::SliceRandom;
use rand::Rng;

/// Prompt shown for a word.
pub fn prompt_for(word: &str) -> String {
    format!("What does \"{}\" mean?", word)
}

/// Generate questions using the thread-local RNG.
pub fn generate_questions(items: &[VocabularyItem], settings: &QuizSettings) -> Vec<QuizQuestion> {
    generate_questions_with_rng(items, settings, &mut rand::rng())
}

/// Generate questions with a caller-supplied RNG.
///
/// Returns `min(question_count, items.len())` questions in list order. Each
/// question has the correct translation plus up to `distractor_count` other
/// distinct translations.
pub fn generate_questions_with_rng<R>(
    items: &[VocabularyItem],
    settings: &QuizSettings,
    rng: &mut R,
) -> Vec<QuizQuestion>
where
    R: Rng + ?Sized,
{
    let questions: Vec<_> = items
        .iter()
        .take(settings.question_count)
        .map(|item| build_question(item, items, settings.distractor_count, &mut *rng))
        .collect();

    tracing::debug!(
        pool = items.len(),
        questions = questions.len(),
        "generated quiz questions"
    );
    questions
}

fn build_question<R>(
    item: &VocabularyItem,
    pool: &[VocabularyItem],
    distractor_count: usize,
    rng: &mut R,
) -> QuizQuestion
where
    R: Rng + ?Sized,
{
    let mut options = vec![item.translation.clone()];

    for other in pool.iter().filter(|other| other.id != item.id) {
        if options.len() > distractor_count {
            break;
        }
        // Skip repeats so options stay unique by value
        if !options.contains(&other.translation) {
            options.push(other.translation.clone());
        }
    }

    options.shuffle(rng);

    QuizQuestion {
        id: item.id.clone(),
        prompt: prompt_for(&item.word),
        options,
        correct_option: item.translation.clone(),
        word: item.word.clone(),
    }
}
