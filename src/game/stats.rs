//! Per-process game statistics

use super::{DEFAULT_TRIES, Status};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses, index 1..=tries
    pub guess_distribution: Vec<usize>,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new(DEFAULT_TRIES)
    }
}

impl Statistics {
    /// Empty statistics with one distribution slot per allowed guess
    #[must_use]
    pub fn new(tries: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; tries + 1],
        }
    }

    /// Record a finished game; unfinished games are not counted
    pub fn record(&mut self, status: Status, guesses: usize) {
        match status {
            Status::Playing => return,
            Status::Won => {
                self.games_won += 1;
                if guesses >= self.guess_distribution.len() {
                    self.guess_distribution.resize(guesses + 1, 0);
                }
                self.guess_distribution[guesses] += 1;
            }
            Status::Lost => {}
        }
        self.total_games += 1;
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record(Status::Won, 3);
        stats.record(Status::Lost, 6);
        stats.record(Status::Won, 3);

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.guess_distribution[3], 2);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn playing_is_not_recorded() {
        let mut stats = Statistics::default();
        stats.record(Status::Playing, 2);
        assert_eq!(stats, Statistics::default());
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn distribution_sized_to_tries() {
        assert_eq!(Statistics::default().guess_distribution.len(), 7);
        assert_eq!(Statistics::new(8).guess_distribution.len(), 9);
    }

    #[test]
    fn late_wins_land_in_distribution() {
        let mut stats = Statistics::new(8);
        stats.record(Status::Won, 8);
        assert_eq!(stats.guess_distribution[8], 1);

        // Beyond the configured size the distribution grows instead of dropping the win
        let mut stats = Statistics::default();
        stats.record(Status::Won, 9);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution.len(), 10);
        assert_eq!(stats.guess_distribution[9], 1);
        assert_eq!(stats.guess_distribution.iter().sum::<usize>(), stats.games_won);
    }
}
