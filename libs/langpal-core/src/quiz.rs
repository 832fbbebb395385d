//! Quiz session: selection, submission, scoring and completion.

use crate::generator::generate_questions;
use crate::store::{self, VocabularySource};
use crate::types::{Language, QuizQuestion, QuizResult, QuizSettings};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

/// Feedback tier for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    KeepPracticing,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 60 {
            Self::Good
        } else {
            Self::KeepPracticing
        }
    }
}

/// One answered question joined with its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionReview {
    pub word: String,
    pub prompt: String,
    pub selected_answer: String,
    pub correct_option: String,
    pub is_correct: bool,
}

/// Snapshot of a quiz session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    pub questions: Arc<[QuizQuestion]>,
    pub index: usize,
    pub selected: Option<String>,
    /// Answer submitted; correctness is shown.
    pub revealed: bool,
    /// One entry per submitted question, in question order.
    pub results: Vec<QuizResult>,
    pub completed: bool,
}

impl QuizState {
    pub fn new(language: Option<Language>, questions: impl Into<Arc<[QuizQuestion]>>) -> Self {
        Self {
            language,
            questions: questions.into(),
            index: 0,
            selected: None,
            revealed: false,
            results: Vec::new(),
            completed: false,
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.index)
    }

    /// Result for the current question once it has been revealed.
    pub fn current_result(&self) -> Option<&QuizResult> {
        if !self.revealed {
            return None;
        }
        let question = self.current_question()?;
        self.results.iter().rev().find(|r| r.question_id == question.id)
    }

    pub fn progress(&self) -> f32 {
        if self.questions.is_empty() {
            0.0
        } else {
            (self.index + 1) as f32 / self.questions.len() as f32
        }
    }

    pub fn correct_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_correct).count()
    }

    pub fn answered_count(&self) -> usize {
        self.results.len()
    }

    /// Percentage of correct answers, rounded half up; 0 before any answer.
    pub fn score(&self) -> u32 {
        let answered = self.results.len();
        if answered == 0 {
            return 0;
        }
        ((100 * self.correct_count() + answered / 2) / answered) as u32
    }

    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score())
    }

    pub fn is_last_question(&self) -> bool {
        !self.questions.is_empty() && self.index + 1 == self.questions.len()
    }

    /// Answered questions with their results, in question order.
    pub fn review(&self) -> Vec<QuestionReview> {
        self.questions
            .iter()
            .filter_map(|q| {
                let result = self.results.iter().find(|r| r.question_id == q.id)?;
                Some(QuestionReview {
                    word: q.word.clone(),
                    prompt: q.prompt.clone(),
                    selected_answer: result.selected_answer.clone(),
                    correct_option: q.correct_option.clone(),
                    is_correct: result.is_correct,
                })
            })
            .collect()
    }
}

/// Quiz session publishing each state change to subscribers.
#[derive(Debug)]
pub struct QuizSession {
    state: watch::Sender<QuizState>,
}

impl QuizSession {
    pub fn new(language: Option<Language>, questions: impl Into<Arc<[QuizQuestion]>>) -> Self {
        Self {
            state: watch::Sender::new(QuizState::new(language, questions)),
        }
    }

    /// Generate a quiz for a language code. Unknown codes give an empty quiz.
    pub fn load<S>(source: &S, code: &str, settings: &QuizSettings) -> Self
    where
        S: VocabularySource + ?Sized,
    {
        let (language, questions) = Self::prepare(source, code, settings);
        info!(code, questions = questions.len(), "loaded quiz");
        Self::new(language, questions)
    }

    /// Replace the whole session with a freshly generated quiz.
    pub fn reload<S>(&mut self, source: &S, code: &str, settings: &QuizSettings)
    where
        S: VocabularySource + ?Sized,
    {
        let (language, questions) = Self::prepare(source, code, settings);
        info!(code, questions = questions.len(), "reloaded quiz");
        self.state.send_replace(QuizState::new(language, questions));
    }

    fn prepare<S>(
        source: &S,
        code: &str,
        settings: &QuizSettings,
    ) -> (Option<Language>, Vec<QuizQuestion>)
    where
        S: VocabularySource + ?Sized,
    {
        let (language, items) = store::resolve(source, code);
        (language, generate_questions(&items, settings))
    }

    pub fn subscribe(&self) -> watch::Receiver<QuizState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> QuizState {
        self.state.borrow().clone()
    }

    /// Choose an answer. Ignored once the current answer is revealed.
    pub fn select_answer(&mut self, option: impl Into<String>) {
        let option = option.into();
        self.state.send_if_modified(|s| {
            if s.revealed || s.completed {
                debug!(index = s.index, "selection ignored after reveal");
                return false;
            }
            if s.selected.as_deref() == Some(option.as_str()) {
                return false;
            }
            debug!(index = s.index, selected = %option, "selected answer");
            s.selected = Some(option);
            true
        });
    }

    /// Record the selected answer for the current question and reveal it.
    pub fn submit_answer(&mut self) {
        self.state.send_if_modified(|s| {
            if s.revealed || s.completed {
                debug!(index = s.index, "submit ignored, already revealed");
                return false;
            }
            let (Some(question), Some(selected)) = (s.questions.get(s.index), s.selected.as_ref())
            else {
                debug!(index = s.index, "submit ignored, nothing selected");
                return false;
            };

            let result = QuizResult {
                question_id: question.id.clone(),
                selected_answer: selected.clone(),
                is_correct: *selected == question.correct_option,
            };
            debug!(
                question_id = %result.question_id,
                is_correct = result.is_correct,
                "submitted answer"
            );
            s.results.push(result);
            s.revealed = true;
            true
        });
    }

    /// Advance to the next question, or complete the quiz on the last one.
    pub fn next_question(&mut self) {
        self.state.send_if_modified(|s| {
            if s.index + 1 < s.questions.len() {
                s.index += 1;
                s.selected = None;
                s.revealed = false;
                debug!(index = s.index, "moved to next question");
                true
            } else if s.completed {
                false
            } else {
                s.completed = true;
                info!(score = s.score(), answered = s.results.len(), "quiz completed");
                true
            }
        });
    }

    /// Start over with the same questions in the same order.
    pub fn restart_quiz(&mut self) {
        self.state.send_if_modified(|s| {
            let changed = s.index != 0
                || s.selected.is_some()
                || s.revealed
                || !s.results.is_empty()
                || s.completed;
            s.index = 0;
            s.selected = None;
            s.revealed = false;
            s.results.clear();
            s.completed = false;
            debug!("restarted quiz");
            changed
        });
    }

    pub fn current_question(&self) -> Option<QuizQuestion> {
        self.state.borrow().current_question().cloned()
    }

    pub fn progress(&self) -> f32 {
        self.state.borrow().progress()
    }

    pub fn score(&self) -> u32 {
        self.state.borrow().score()
    }

    pub fn results(&self) -> Vec<QuizResult> {
        self.state.borrow().results.clone()
    }

    pub fn is_completed(&self) -> bool {
        self.state.borrow().completed
    }

    pub fn is_revealed(&self) -> bool {
        self.state.borrow().revealed
    }

    pub fn selected(&self) -> Option<String> {
        self.state.borrow().selected.clone()
    }

    pub fn index(&self) -> usize {
        self.state.borrow().index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn question(id: &str, correct: &str) -> QuizQuestion {
        QuizQuestion {
            id: id.into(),
            prompt: format!("What does \"{id}\" mean?"),
            options: vec![correct.into(), "wrong".into()],
            correct_option: correct.into(),
            word: id.into(),
        }
    }

    fn session() -> QuizSession {
        QuizSession::new(
            None,
            vec![question("q1", "one"), question("q2", "two"), question("q3", "three")],
        )
    }

    fn answer(s: &mut QuizSession, option: &str) {
        s.select_answer(option);
        s.submit_answer();
    }

    #[test]
    fn initial_state() {
        let s = session();
        let state = s.state();
        assert_eq!(state.index, 0);
        assert!(state.selected.is_none());
        assert!(!state.revealed);
        assert!(state.results.is_empty());
        assert!(!state.completed);
    }

    #[test]
    fn submit_without_selection_is_noop() {
        let mut s = session();
        s.submit_answer();
        assert!(s.results().is_empty());
        assert!(!s.is_revealed());
    }

    #[test]
    fn submit_records_one_result() {
        let mut s = session();
        answer(&mut s, "one");
        assert_eq!(
            s.results(),
            vec![QuizResult {
                question_id: "q1".into(),
                selected_answer: "one".into(),
                is_correct: true,
            }]
        );
        assert!(s.is_revealed());
    }

    #[test]
    fn double_submit_records_once() {
        let mut s = session();
        answer(&mut s, "wrong");
        s.submit_answer();
        assert_eq!(s.results().len(), 1);
        assert!(!s.results()[0].is_correct);
    }

    #[test]
    fn selection_locked_after_reveal() {
        let mut s = session();
        answer(&mut s, "wrong");
        s.select_answer("one");
        assert_eq!(s.selected().as_deref(), Some("wrong"));
    }

    #[test]
    fn next_question_clears_selection() {
        let mut s = session();
        answer(&mut s, "one");
        s.next_question();
        assert_eq!(s.index(), 1);
        assert!(s.selected().is_none());
        assert!(!s.is_revealed());
    }

    #[test]
    fn results_track_answered_count() {
        let mut s = session();
        for (k, option) in ["one", "two", "three"].into_iter().enumerate() {
            answer(&mut s, option);
            assert_eq!(s.results().len(), k + 1);
            s.next_question();
        }
        assert!(s.is_completed());
        assert_eq!(s.index(), 2);
    }

    #[test]
    fn completion_only_from_last_question() {
        let mut s = session();
        answer(&mut s, "one");
        s.next_question();
        assert!(!s.is_completed());
        answer(&mut s, "two");
        s.next_question();
        answer(&mut s, "three");
        s.next_question();
        assert!(s.is_completed());
    }

    #[test]
    fn score_rounds_half_up() {
        let mut s = session();
        answer(&mut s, "one");
        s.next_question();
        answer(&mut s, "two");
        s.next_question();
        answer(&mut s, "wrong");
        assert_eq!(s.score(), 67);
        assert_eq!(s.state().score_band(), ScoreBand::Good);
    }

    #[test]
    fn score_zero_before_answers() {
        assert_eq!(session().score(), 0);
    }

    #[test]
    fn restart_keeps_questions() {
        let mut s = session();
        let before = s.state().questions.clone();
        answer(&mut s, "one");
        s.next_question();
        answer(&mut s, "wrong");
        s.restart_quiz();

        let state = s.state();
        assert_eq!(state.questions, before);
        assert!(state.results.is_empty());
        assert!(!state.completed);
        assert_eq!(state.index, 0);
        assert!(state.selected.is_none());
    }

    #[test]
    fn restart_after_completion() {
        let mut s = session();
        for option in ["one", "two", "three"] {
            answer(&mut s, option);
            s.next_question();
        }
        s.restart_quiz();
        assert!(!s.is_completed());
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn current_result_only_when_revealed() {
        let mut s = session();
        s.select_answer("one");
        assert!(s.state().current_result().is_none());
        s.submit_answer();
        assert!(s.state().current_result().unwrap().is_correct);
    }

    #[test]
    fn review_joins_results_by_question() {
        let mut s = session();
        answer(&mut s, "one");
        s.next_question();
        answer(&mut s, "wrong");

        let review = s.state().review();
        assert_eq!(review.len(), 2);
        assert_eq!(review[0].word, "q1");
        assert!(review[0].is_correct);
        assert_eq!(review[1].selected_answer, "wrong");
        assert_eq!(review[1].correct_option, "two");
    }

    #[test]
    fn empty_quiz_completes_on_next() {
        let mut s = QuizSession::new(None, Vec::<QuizQuestion>::new());
        s.select_answer("x");
        s.submit_answer();
        assert!(s.results().is_empty());
        assert_eq!(s.progress(), 0.0);
        s.next_question();
        assert!(s.is_completed());
    }

    #[test]
    fn score_bands() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::KeepPracticing);
    }

    #[test]
    fn reload_replaces_whole_state() {
        let store = crate::store::VocabularyStore::bundled();
        let settings = QuizSettings::default();
        let mut s = QuizSession::load(&store, "es", &settings);
        let first = s.current_question().unwrap();
        answer(&mut s, &first.correct_option);
        s.next_question();

        let mut rx = s.subscribe();
        s.reload(&store, "de", &settings);

        assert!(rx.has_changed().unwrap());
        let state = rx.borrow_and_update().clone();
        assert_eq!(state.language.as_ref().unwrap().code, "de");
        assert_eq!(state.index, 0);
        assert!(state.results.is_empty());
        assert!(state.selected.is_none());
        assert!(!state.revealed);
        assert!(!state.completed);
        assert_eq!(state.questions.len(), 5);
        assert_eq!(state.questions[0].word, "Hallo");
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn subscribers_see_reveal() {
        let mut s = session();
        let mut rx = s.subscribe();
        answer(&mut s, "one");
        assert!(rx.has_changed().unwrap());
        let seen = rx.borrow_and_update().clone();
        assert!(seen.revealed);
        assert_eq!(seen.results.len(), 1);

        s.submit_answer();
        assert!(!rx.has_changed().unwrap());
    }
}
