//! End-to-end game flows through the public API

use std::time::Duration;
use wordle_game::core::{Feedback, Word};
use wordle_game::game::{Board, GameConfig, Key, KeyOutcome, Session, Status};
use wordle_game::wordlists::{FirstWord, PickerType, WORDS, loader::words_from_slice};

fn session_for(target: &str) -> Session<FirstWord> {
    let config = GameConfig::new().with_reveal_delay(Duration::ZERO);
    Session::new(config, vec![Word::new(target).unwrap()], FirstWord).unwrap()
}

fn press_all(session: &mut Session<FirstWord>, names: &[&str]) {
    for name in names {
        session.handle_key(Key::from_name(name));
    }
}

fn play(session: &mut Session<FirstWord>, word: &str) -> Status {
    for c in word.chars() {
        session.handle_key(Key::Letter(c));
    }
    session.handle_key(Key::Enter);
    session.finish_reveal(|_| {})
}

fn row_colors(session: &Session<FirstWord>, row: usize) -> Vec<Feedback> {
    session.board().rows()[row]
        .cells()
        .iter()
        .map(|c| c.feedback())
        .collect()
}

#[test]
fn default_session_targets_first_word() {
    let session = Session::new(GameConfig::new(), words_from_slice(WORDS), PickerType::First)
        .unwrap();
    assert_eq!(session.target().to_string(), "APPLE");
    assert_eq!(session.board().rows().len(), 6);
}

#[test]
fn react_wins_immediately() {
    let mut session = session_for("REACT");
    assert_eq!(play(&mut session, "react"), Status::Won);
    assert_eq!(row_colors(&session, 0), vec![Feedback::Correct; 5]);
}

#[test]
fn named_keys_drive_the_game() {
    let mut session = session_for("APPLE");
    press_all(
        &mut session,
        &["p", "a", "s", "t", "x", "Backspace", "E", "Shift", "Enter"],
    );
    assert!(session.is_busy());
    session.finish_reveal(|_| {});

    assert_eq!(
        row_colors(&session, 0),
        vec![
            Feedback::Present,
            Feedback::Present,
            Feedback::Absent,
            Feedback::Absent,
            Feedback::Correct,
        ]
    );
    assert_eq!(session.board().active_row_index(), 1);
}

#[test]
fn six_misses_then_terminal() {
    let mut session = session_for("REACT");
    let guesses = ["apple", "beast", "faint", "feast", "fruit", "games"];

    for (i, word) in guesses.iter().enumerate() {
        let status = play(&mut session, word);
        assert!(session.board().active_row_index() <= 5);
        if i < 5 {
            assert_eq!(status, Status::Playing);
            assert_eq!(session.board().active_row_index(), i + 1);
        } else {
            assert_eq!(status, Status::Lost);
        }
    }

    // Terminal status is sticky
    let board = session.board().clone();
    for key in ["r", "Backspace", "Enter"] {
        assert_eq!(session.handle_key(Key::from_name(key)), KeyOutcome::Ignored);
    }
    assert_eq!(session.board(), &board);
    assert_eq!(session.status(), Status::Lost);
}

#[test]
fn revealed_rows_keep_their_colors() {
    let mut session = session_for("APPLE");
    play(&mut session, "paste");
    let first = row_colors(&session, 0);
    play(&mut session, "tower");

    assert_eq!(row_colors(&session, 0), first);
    assert!(session.board().rows()[2].is_empty());
}

#[test]
fn reset_returns_to_fresh_board() {
    let mut session = session_for("APPLE");
    play(&mut session, "paste");
    play(&mut session, "apple");
    assert_eq!(session.status(), Status::Won);

    session.reset();
    assert_eq!(session.status(), Status::Playing);
    assert_eq!(session.board(), &Board::new(6));
    assert_eq!(session.target().to_string(), "APPLE");
}

#[test]
fn overfull_and_empty_edits_do_not_mutate() {
    let mut session = session_for("APPLE");
    let empty = session.board().clone();
    assert_eq!(session.handle_key(Key::Backspace), KeyOutcome::Ignored);
    assert_eq!(session.board(), &empty);

    press_all(&mut session, &["t", "o", "w", "e", "r"]);
    let full = session.board().clone();
    press_all(&mut session, &["s", "z"]);
    assert_eq!(session.board(), &full);
}
