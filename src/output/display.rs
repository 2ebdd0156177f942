//! Pretty-printing for line mode

use super::formatters::{colored_cell, create_progress_bar, row_to_emoji};
use crate::core::Word;
use crate::game::{Board, Statistics, Status};
use colored::Colorize;

/// Print the whole board, one line per row
pub fn print_board(board: &Board) {
    println!();
    for (i, row) in board.rows().iter().enumerate() {
        let marker = if i == board.active_row_index() {
            "▶".bright_cyan()
        } else {
            " ".normal()
        };
        let cells: String = row
            .cells()
            .iter()
            .map(|c| format!("{} ", colored_cell(c.value(), c.feedback())))
            .collect();
        println!("  {marker} {cells}");
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_game_over(board: &Board, status: Status, target: &Word, guesses: usize) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    match status {
        Status::Won => println!(
            "{}",
            "    🎉  W O R D L E   S O L V E D !  🎉    ".bright_green().bold()
        ),
        Status::Lost => println!(
            "    {} The word was {}",
            "❌ Out of tries!".bright_red().bold(),
            target.to_string().bright_yellow().bold()
        ),
        Status::Playing => {}
    }
    println!("{}", "═".repeat(50).bright_cyan());

    if status == Status::Won {
        println!(
            "\n  Solved in {} {}",
            guesses.to_string().bright_cyan().bold(),
            if guesses == 1 { "guess" } else { "guesses" }
        );
    }

    println!("\n  Guess history:");
    for (i, row) in board.rows().iter().take(guesses).enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            row.text().bright_white().bold(),
            row_to_emoji(row)
        );
    }
    println!();
}

/// Print games played, win rate and the guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("📈 {}", "Statistics:".bright_cyan().bold());
    println!(
        "   Games: {}  Won: {}  Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count, max, 20);
        println!("   {guesses}: {} {count}", bar.green());
    }
    println!();
}
