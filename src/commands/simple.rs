//! Simple interactive CLI mode
//!
//! Text-based game without TUI. Each input line is fed to the session as key
//! presses followed by Enter.

use crate::core::WORD_LENGTH;
use crate::game::{Key, KeyOutcome, RevealProgress, Session, Statistics, Status};
use crate::output::formatters::colored_cell;
use crate::output::{print_board, print_game_over, print_statistics};
use crate::wordlists::TargetPicker;
use anyhow::Result;
use std::io::{self, Write};
use std::thread;
use tracing::{debug, info};

/// Line-mode command, or keys to type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    Quit,
    Reset,
    Keys(Vec<Key>),
}

/// Parse one input line
///
/// `:quit`/`:q` and `:reset`/`:r` are commands; `<` erases a letter; every
/// other character becomes a key press, followed by Enter.
#[must_use]
pub fn parse_line(line: &str) -> LineInput {
    match line.trim() {
        ":quit" | ":q" | ":exit" => LineInput::Quit,
        ":reset" | ":r" | ":new" => LineInput::Reset,
        text => {
            let mut keys: Vec<Key> = text
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| if c == '<' { Key::Backspace } else { Key::from_char(c) })
                .collect();
            keys.push(Key::Enter);
            LineInput::Keys(keys)
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<P: TargetPicker>(session: &mut Session<P>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║              Wordle - Line Mode                  ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    println!(
        "Guess the 5-letter word in {} tries.",
        session.config().tries
    );
    println!("Type letters and press Enter. '<' erases a letter.");
    println!("Commands: ':reset' for a new game, ':quit' to exit\n");

    let mut stats = Statistics::new(session.config().tries);

    loop {
        print_board(session.board());

        if session.status().is_over() {
            print_game_over(
                session.board(),
                session.status(),
                session.target(),
                session.guesses_made(),
            );
            print_statistics(&stats);

            match get_user_input("Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    session.reset();
                    continue;
                }
                _ => break,
            }
        }

        let Some(line) = get_user_input("Guess")? else {
            break;
        };

        match parse_line(&line) {
            LineInput::Quit => break,
            LineInput::Reset => {
                session.reset();
                println!("\n🔄 New game started!");
            }
            LineInput::Keys(keys) => {
                for key in keys {
                    if session.handle_key(key) == KeyOutcome::Submitted {
                        let status = animate_reveal(session, &mut io::stdout())?;
                        if status.is_over() {
                            stats.record(status, session.guesses_made());
                        }
                    }
                }
            }
        }
    }

    info!(games = stats.total_games, won = stats.games_won, "Line mode closed");
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Drive the reveal to completion, writing each cell to `out` as it turns
fn animate_reveal<P: TargetPicker, W: Write>(
    session: &mut Session<P>,
    out: &mut W,
) -> Result<Status> {
    let row = session.board().active_row_index();
    write!(out, "\n    ")?;

    while let Some(delay) = session.reveal_delay() {
        thread::sleep(delay);
        let progress = session.tick_reveal();

        let column = match progress {
            RevealProgress::Revealed { column } => column,
            RevealProgress::Complete(_) => WORD_LENGTH - 1,
            RevealProgress::Idle => break,
        };
        let cell = session.board().rows()[row].cells()[column];
        write!(out, "{} ", colored_cell(cell.value(), cell.feedback()))?;
        out.flush()?;

        if let RevealProgress::Complete(status) = progress {
            debug!(%status, "Reveal finished");
            writeln!(out)?;
            return Ok(status);
        }
    }

    writeln!(out)?;
    Ok(session.status())
}

/// Get user input with a prompt; None on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_lowercase()))
}
