//! Language selection screen.

use std::io::{self, Write};

use langpal_core::{Language, VocabularySource};

use super::{CommandError, Outcome};
use crate::state::AppState;

pub fn handle<S: VocabularySource>(
    state: &mut AppState<S>,
    line: &str,
) -> Result<Outcome, CommandError> {
    let (wants_quiz, target) = match line.split_once(' ') {
        Some(("quiz", rest)) => (true, rest.trim()),
        Some(_) => return Err(CommandError::Unknown(line.to_string())),
        None => (false, line),
    };

    let code = resolve_code(state, target)?;
    if wants_quiz {
        state.open_quiz(&code);
    } else {
        state.open_flashcards(&code);
    }
    Ok(Outcome::Render)
}

/// Accept a 1-based list position or a language code.
fn resolve_code<S: VocabularySource>(
    state: &AppState<S>,
    target: &str,
) -> Result<String, CommandError> {
    if let Ok(position) = target.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|idx| state.app.list_languages().get(idx))
            .map(|l| l.code.clone())
            .ok_or(CommandError::InvalidLanguage(position));
    }
    Ok(state.app.get_language(target)?.code.clone())
}

pub fn render<W: Write>(languages: &[Language], out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Choose a language to learn")?;
    for (idx, language) in languages.iter().enumerate() {
        writeln!(out, "{:>3}. {} ({})", idx + 1, language.label(), language.code)?;
    }
    writeln!(out, "Commands: <number|code> flashcards, quiz <code>, state, quit")
}
