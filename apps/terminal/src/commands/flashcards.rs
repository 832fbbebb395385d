//! Flashcard screen.

use std::io::{self, Write};

use langpal_core::{FlashcardState, VocabularySource};

use super::{CommandError, Outcome};
use crate::state::{AppState, Screen};

pub fn handle<S: VocabularySource>(
    state: &mut AppState<S>,
    line: &str,
) -> Result<Outcome, CommandError> {
    let Screen::Flashcards { code, session } = &mut state.screen else {
        return Err(CommandError::Unknown(line.to_string()));
    };

    match line {
        "flip" | "f" => session.flip(),
        "next" | "n" => session.next(),
        "prev" | "p" => session.previous(),
        "reset" => session.reset(),
        "quiz" => {
            let code = code.clone();
            state.open_quiz(&code);
        }
        "back" => state.back_to_languages(),
        _ => return Err(CommandError::Unknown(line.to_string())),
    }
    Ok(Outcome::Render)
}

pub fn render<W: Write>(state: &FlashcardState, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    let title = state
        .language
        .as_ref()
        .map(|l| l.label())
        .unwrap_or_else(|| "Unknown language".to_string());
    writeln!(out, "{} flashcards", title)?;

    let Some(card) = state.current_card() else {
        writeln!(out, "No vocabulary available for this language yet.")?;
        return writeln!(out, "Commands: back, quit");
    };

    writeln!(
        out,
        "Card {}/{} ({:.0}%)",
        state.index + 1,
        state.len(),
        state.progress() * 100.0
    )?;
    match &card.pronunciation {
        Some(p) => writeln!(out, "  {}  [{}]", card.word, p)?,
        None => writeln!(out, "  {}", card.word)?,
    }
    if state.flipped {
        writeln!(out, "  = {}", card.translation)?;
    } else {
        writeln!(out, "  (flip to reveal)")?;
    }

    if state.is_last_card() {
        writeln!(out, "🎉 You've completed all flashcards! Ready to test your knowledge?")?;
    }

    let mut commands = vec!["flip"];
    if state.can_go_previous() {
        commands.push("prev");
    }
    if state.can_go_next() {
        commands.push("next");
    }
    commands.extend(["reset", "quiz", "back"]);
    writeln!(out, "Commands: {}", commands.join(", "))
}
