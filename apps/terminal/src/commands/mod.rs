//! Command parsing and screen rendering.

pub mod flashcards;
pub mod languages;
pub mod quiz;

use std::io::{self, Write};

use langpal_core::{CoreError, VocabularySource};
use thiserror::Error;

use crate::state::{AppState, Screen};

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Render,
    Print(String),
    Quit,
}

/// Rejected user input. Shown to the user; the loop keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("no language at position {0}")]
    InvalidLanguage(usize),

    #[error("no option {0}, pick between 1 and {1}")]
    InvalidOption(usize, usize),

    #[error("select an answer first")]
    NothingSelected,

    #[error("submit your answer first")]
    NotRevealed,

    #[error("input is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("could not serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Route a command line to the active screen.
pub fn dispatch<S: VocabularySource>(
    state: &mut AppState<S>,
    line: &str,
) -> Result<Outcome, CommandError> {
    match line {
        "quit" | "exit" => return Ok(Outcome::Quit),
        "state" => return dump_state(state).map(Outcome::Print),
        _ => {}
    }

    match &state.screen {
        Screen::Languages => languages::handle(state, line),
        Screen::Flashcards { .. } => flashcards::handle(state, line),
        Screen::Quiz { .. } => quiz::handle(state, line),
    }
}

/// Print the active screen.
pub fn render<S: VocabularySource, W: Write>(state: &AppState<S>, out: &mut W) -> io::Result<()> {
    match &state.screen {
        Screen::Languages => languages::render(state.app.list_languages(), out),
        Screen::Flashcards { session, .. } => flashcards::render(&session.state(), out),
        Screen::Quiz { session, .. } => quiz::render(&session.state(), out),
    }
}

fn dump_state<S: VocabularySource>(state: &AppState<S>) -> Result<String, CommandError> {
    let json = match &state.screen {
        Screen::Languages => serde_json::to_string_pretty(state.app.list_languages())?,
        Screen::Flashcards { session, .. } => serde_json::to_string_pretty(&session.state())?,
        Screen::Quiz { session, .. } => serde_json::to_string_pretty(&session.state())?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use langpal_core::Langpal;
    use pretty_assertions::assert_eq;

    #[test]
    fn quit_from_any_screen() {
        let mut state = AppState::new(Langpal::bundled());
        assert_eq!(dispatch(&mut state, "quit").unwrap(), Outcome::Quit);
        state.open_quiz("es");
        assert_eq!(dispatch(&mut state, "exit").unwrap(), Outcome::Quit);
    }

    #[test]
    fn state_dumps_json() {
        let mut state = AppState::new(Langpal::bundled());
        state.open_flashcards("de");
        let Outcome::Print(json) = dispatch(&mut state, "state").unwrap() else {
            panic!("expected printed state");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["index"], 0);
        assert_eq!(value["items"][0]["word"], "Hallo");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            CommandError::InvalidOption(7, 4).to_string(),
            "no option 7, pick between 1 and 4"
        );
        assert_eq!(
            CommandError::from(CoreError::LanguageNotFound { code: "xx".into() }).to_string(),
            "language not found: xx"
        );
    }
}
