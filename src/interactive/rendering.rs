//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{Feedback, WORD_LENGTH};
use crate::game::{Row, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH * WORD_LENGTH as u16 + 4), // Board
            Constraint::Min(20),                                     // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

const fn status_color(status: Status) -> Color {
    match status {
        Status::Playing => Color::Cyan,
        Status::Won => Color::Green,
        Status::Lost => Color::Red,
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let status = app.session.status();
    let header = Paragraph::new(Line::from(vec![
        Span::raw("WORDLE  |  "),
        Span::styled(
            status.to_string(),
            Style::default()
                .fg(status_color(status))
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.session.board();
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CELL_HEIGHT); board.rows().len()])
        .split(inner);

    for (i, (row, row_area)) in board.rows().iter().zip(row_areas.iter()).enumerate() {
        let is_active = i == board.active_row_index() && !app.session.status().is_over();
        render_row(f, row, is_active, *row_area);
    }
}

fn render_row(f: &mut Frame, row: &Row, is_active: bool, area: Rect) {
    let cell_areas = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints([Constraint::Length(CELL_WIDTH); WORD_LENGTH])
        .split(area);

    let border_color = if is_active {
        Color::White
    } else {
        Color::DarkGray
    };

    for (cell, cell_area) in row.cells().iter().zip(cell_areas.iter()) {
        let letter = cell.value().map(String::from).unwrap_or_default();
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if let Some(bg) = feedback_color(cell.feedback()) {
            style = style.bg(bg).fg(Color::Black);
        }

        let widget = Paragraph::new(letter)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color)),
            );
        f.render_widget(widget, *cell_area);
    }
}

/// Background for a revealed cell; None keeps the default
#[must_use]
pub const fn feedback_color(feedback: Feedback) -> Option<Color> {
    match feedback {
        Feedback::Unset => None,
        Feedback::Absent => Some(Color::DarkGray),
        Feedback::Present => Some(Color::Yellow),
        Feedback::Correct => Some(Color::Green),
    }
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Statistics
            Constraint::Min(5),     // Messages
        ])
        .split(area);

    render_statistics(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);

    let mut lines = vec![Line::from(format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    ))];
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar_len = count * 16 / max;
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses}: ")),
            Span::styled("█".repeat(bar_len), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let status = app.session.status();
    let mode = Paragraph::new(format!("Status: {status}"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(status_color(status)));
    f.render_widget(mode, chunks[0]);

    let row_text = format!(
        "Guess {}/{}",
        app.session.board().active_row_index() + 1,
        app.session.config().tries
    );
    f.render_widget(Paragraph::new(row_text).alignment(Alignment::Center), chunks[1]);

    let help_text = if app.session.is_busy() {
        "Revealing..."
    } else if status.is_over() {
        "Ctrl+R: New Game | Esc: Quit"
    } else {
        "A-Z: Type | Backspace: Erase | Enter: Submit | Ctrl+R: Reset | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
