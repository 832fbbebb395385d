//! Quiz screen and completion summary.

use std::io::{self, Write};

use langpal_core::{QuizState, ScoreBand, VocabularySource};

use super::{CommandError, Outcome};
use crate::state::{AppState, Screen};

pub fn handle<S: VocabularySource>(
    state: &mut AppState<S>,
    line: &str,
) -> Result<Outcome, CommandError> {
    let Screen::Quiz { code, session } = &mut state.screen else {
        return Err(CommandError::Unknown(line.to_string()));
    };

    if let Ok(choice) = line.parse::<usize>() {
        let snapshot = session.state();
        let Some(question) = snapshot.current_question().filter(|_| !snapshot.completed) else {
            return Err(CommandError::Unknown(line.to_string()));
        };
        let option = choice
            .checked_sub(1)
            .and_then(|idx| question.options.get(idx))
            .ok_or(CommandError::InvalidOption(choice, question.options.len()))?;
        session.select_answer(option.clone());
        return Ok(Outcome::Render);
    }

    match line {
        "submit" | "s" => {
            if session.selected().is_none() {
                return Err(CommandError::NothingSelected);
            }
            session.submit_answer();
        }
        "next" | "n" => {
            if !session.is_revealed() && !session.state().questions.is_empty() {
                return Err(CommandError::NotRevealed);
            }
            session.next_question();
        }
        "restart" => session.restart_quiz(),
        "cards" => {
            let code = code.clone();
            state.open_flashcards(&code);
        }
        "back" => state.back_to_languages(),
        _ => return Err(CommandError::Unknown(line.to_string())),
    }
    Ok(Outcome::Render)
}

pub fn render<W: Write>(state: &QuizState, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    let title = state
        .language
        .as_ref()
        .map(|l| l.label())
        .unwrap_or_else(|| "Unknown language".to_string());
    writeln!(out, "{} quiz", title)?;

    if state.completed {
        return render_summary(state, out);
    }

    let Some(question) = state.current_question() else {
        writeln!(out, "No quiz questions available for this language.")?;
        return writeln!(out, "Commands: back, quit");
    };

    writeln!(
        out,
        "Question {}/{} | Score: {}/{}",
        state.index + 1,
        state.questions.len(),
        state.correct_count(),
        state.answered_count()
    )?;
    writeln!(out, "{}", question.prompt)?;

    let selected = state.selected.as_deref();
    for (idx, option) in question.options.iter().enumerate() {
        let marker = match (state.revealed, selected == Some(option.as_str())) {
            (true, _) if *option == question.correct_option => "✓",
            (true, true) => "✗",
            (false, true) => "*",
            _ => " ",
        };
        writeln!(out, " {} {}. {}", marker, idx + 1, option)?;
    }

    match state.current_result() {
        Some(result) if result.is_correct => {
            writeln!(out, "Correct!")?;
        }
        Some(_) => {
            writeln!(out, "Incorrect. The correct answer is: {}", question.correct_option)?;
        }
        None => {}
    }

    if !state.revealed {
        writeln!(out, "Commands: <number> select, submit, restart, cards, back")
    } else if state.is_last_question() {
        writeln!(out, "Commands: next (finish quiz), restart, cards, back")
    } else {
        writeln!(out, "Commands: next, restart, cards, back")
    }
}

fn render_summary<W: Write>(state: &QuizState, out: &mut W) -> io::Result<()> {
    let emoji = match state.score_band() {
        ScoreBand::Excellent => "🎉",
        ScoreBand::Good => "👏",
        ScoreBand::KeepPracticing => "💪",
    };
    writeln!(out, "{} Quiz Complete!", emoji)?;
    writeln!(
        out,
        "You scored {} out of {} questions correctly",
        state.correct_count(),
        state.answered_count()
    )?;
    writeln!(out, "Your Score: {}%", state.score())?;

    for review in state.review() {
        if review.is_correct {
            writeln!(out, "  ✓ {}: {}", review.word, review.correct_option)?;
        } else {
            writeln!(
                out,
                "  ✗ {}: you answered {}, correct is {}",
                review.word, review.selected_answer, review.correct_option
            )?;
        }
    }
    writeln!(out, "Commands: restart, cards, back")
}

#[cfg(test)]
mod tests {
    use super::*;
    use langpal_core::Langpal;

    fn quiz_on(code: &str) -> AppState {
        let mut state = AppState::new(Langpal::bundled());
        state.open_quiz(code);
        state
    }

    fn snapshot(state: &AppState) -> QuizState {
        match &state.screen {
            Screen::Quiz { session, .. } => session.state(),
            _ => panic!("not on quiz screen"),
        }
    }

    fn correct_choice(state: &AppState) -> String {
        let snapshot = snapshot(state);
        let question = snapshot.current_question().unwrap();
        (question.correct_index().unwrap() + 1).to_string()
    }

    #[test]
    fn select_by_number() {
        let mut state = quiz_on("es");
        handle(&mut state, "2").unwrap();
        let snapshot = snapshot(&state);
        let question = snapshot.current_question().unwrap();
        assert_eq!(snapshot.selected.as_deref(), Some(question.options[1].as_str()));
    }

    #[test]
    fn option_out_of_range() {
        let mut state = quiz_on("es");
        assert!(matches!(handle(&mut state, "5"), Err(CommandError::InvalidOption(5, 4))));
        assert!(matches!(handle(&mut state, "0"), Err(CommandError::InvalidOption(0, 4))));
    }

    #[test]
    fn submit_requires_selection() {
        let mut state = quiz_on("es");
        assert!(matches!(handle(&mut state, "submit"), Err(CommandError::NothingSelected)));
    }

    #[test]
    fn next_requires_reveal() {
        let mut state = quiz_on("es");
        assert!(matches!(handle(&mut state, "next"), Err(CommandError::NotRevealed)));
    }

    #[test]
    fn full_run_reaches_summary() {
        let mut state = quiz_on("de");
        for _ in 0..5 {
            let choice = correct_choice(&state);
            handle(&mut state, &choice).unwrap();
            handle(&mut state, "submit").unwrap();
            handle(&mut state, "next").unwrap();
        }
        let snapshot = snapshot(&state);
        assert!(snapshot.completed);

        let mut out = Vec::new();
        render(&snapshot, &mut out).unwrap();
        let screen = String::from_utf8(out).unwrap();
        assert!(screen.contains("🎉 Quiz Complete!"));
        assert!(screen.contains("Your Score: 100%"));
        assert!(screen.contains("✓ Hallo: Hello"));
    }

    #[test]
    fn wrong_answer_shows_correction() {
        let mut state = quiz_on("es");
        let correct: usize = correct_choice(&state).parse().unwrap();
        let wrong = if correct == 1 { 2 } else { 1 };
        handle(&mut state, &wrong.to_string()).unwrap();
        handle(&mut state, "submit").unwrap();

        let mut out = Vec::new();
        render(&snapshot(&state), &mut out).unwrap();
        let screen = String::from_utf8(out).unwrap();
        assert!(screen.contains("Incorrect. The correct answer is: Hello"));
    }

    #[test]
    fn empty_quiz_placeholder() {
        let state = quiz_on("ko");
        let mut out = Vec::new();
        render(&snapshot(&state), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No quiz questions available"));
    }
}
