//! TUI application state and event loop

use crate::game::{Key, KeyOutcome, RevealProgress, Session, Statistics, Status};
use crate::wordlists::PickerType;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Poll timeout while no reveal is running
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub session: Session<PickerType>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    recorded: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session<PickerType>) -> Self {
        let tries = session.config().tries;
        let mut app = Self {
            session,
            messages: Vec::new(),
            stats: Statistics::new(tries),
            should_quit: false,
            recorded: false,
        };
        app.add_message(
            &format!("Guess the 5-letter word in {tries} tries. Type letters, Enter to submit."),
            MessageStyle::Info,
        );
        app
    }

    /// Handle one terminal key event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Esc => self.should_quit = true,
            _ if ctrl => {}
            code => {
                let outcome = self.session.handle_key(to_game_key(code));
                if outcome != KeyOutcome::Ignored {
                    debug!(?outcome, "Key handled");
                }
            }
        }
    }

    /// Advance the running reveal by one cell
    pub fn tick(&mut self) {
        if let RevealProgress::Complete(status) = self.session.tick_reveal() {
            self.on_turn_resolved(status);
        }
    }

    fn on_turn_resolved(&mut self, status: Status) {
        if !status.is_over() || self.recorded {
            return;
        }

        let guesses = self.session.guesses_made();
        self.stats.record(status, guesses);
        self.recorded = true;

        if status == Status::Won {
            let celebration = match guesses {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "😅 PHEW! Got it in six! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message(
                &format!("Out of tries! The word was {}", self.session.target()),
                MessageStyle::Error,
            );
        }
        self.add_message("Press Ctrl+R for a new game or Esc to quit.", MessageStyle::Info);
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.recorded = false;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Map a terminal key code to a game key
#[must_use]
pub fn to_game_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(c) => Key::from_char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        _ => Key::Other,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    info!("Starting TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "TUI exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut next_tick: Option<Instant> = None;

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Schedule the next reveal tick, if a reveal is running
        next_tick = match (app.session.reveal_delay(), next_tick) {
            (Some(_), Some(deadline)) => Some(deadline),
            (Some(delay), None) => Some(Instant::now() + delay),
            (None, _) => None,
        };
        let timeout =
            next_tick.map_or(IDLE_POLL, |deadline| deadline.saturating_duration_since(Instant::now()));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key_event(key);
        }

        if let Some(deadline) = next_tick
            && Instant::now() >= deadline
        {
            next_tick = None;
            app.tick();
        }

        if app.should_quit {
            break;
        }
    }

    info!(
        games = app.stats.total_games,
        won = app.stats.games_won,
        "TUI closed"
    );
    Ok(())
}
