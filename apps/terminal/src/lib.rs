//! Line-oriented terminal front end for langpal.
//!
//! Mirrors the three screens of the study app: language selection,
//! flashcards and quiz. All study logic lives in `langpal-core`; this crate
//! only parses commands and renders session snapshots.

pub mod commands;
pub mod state;

use std::io::{BufRead, Write};

use langpal_core::{Langpal, VocabularySource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{CommandError, Outcome};
pub use crate::state::{AppState, Screen};

pub fn run() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the screen on stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let app = Langpal::bundled();
    tracing::info!(languages = app.list_languages().len(), "starting langpal");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    drive(app, stdin.lock(), &mut stdout)
}

/// Run the command loop until `quit` or end of input.
pub fn drive<S, R, W>(app: Langpal<S>, input: R, output: &mut W) -> anyhow::Result<()>
where
    S: VocabularySource,
    R: BufRead,
    W: Write,
{
    let mut state = AppState::new(app);
    commands::render(&state, output)?;
    prompt(output)?;

    for bytes in input.split(b'\n') {
        let line = match String::from_utf8(bytes?) {
            Ok(line) => line,
            Err(e) => {
                let e = CommandError::from(e);
                tracing::debug!(error = %e, "input line rejected");
                writeln!(output, "! {}", e)?;
                prompt(output)?;
                continue;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            prompt(output)?;
            continue;
        }

        match commands::dispatch(&mut state, line) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Render) => commands::render(&state, output)?,
            Ok(Outcome::Print(text)) => writeln!(output, "{}", text)?,
            Err(e) => {
                tracing::debug!(error = %e, command = line, "command rejected");
                writeln!(output, "! {}", e)?;
            }
        }
        prompt(output)?;
    }

    writeln!(output, "Goodbye!")?;
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> std::io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}
