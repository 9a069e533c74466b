use serde::Serialize;

use crate::engine::ledger::Outcome;

/// Round tallies for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    human_wins: usize,
    computer_wins: usize,
    ties: usize,
}

impl Scoreboard {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            human_wins: 0,
            computer_wins: 0,
            ties: 0,
        }
    }

    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Human => self.human_wins += 1,
            Outcome::Computer => self.computer_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    #[must_use]
    pub const fn human_wins(&self) -> usize {
        self.human_wins
    }

    #[must_use]
    pub const fn computer_wins(&self) -> usize {
        self.computer_wins
    }

    #[must_use]
    pub const fn ties(&self) -> usize {
        self.ties
    }

    /// Number of recorded outcomes for `outcome`.
    #[must_use]
    pub const fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Human => self.human_wins,
            Outcome::Computer => self.computer_wins,
            Outcome::Tie => self.ties,
        }
    }

    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.human_wins + self.computer_wins + self.ties
    }

    pub const fn reset(&mut self) {
        *self = Self::new();
    }
}
