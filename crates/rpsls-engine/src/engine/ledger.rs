use serde::{Deserialize, Serialize};

use crate::core::hand::Move;

/// Who took a round.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Human,
    Computer,
    Tie,
}

/// A completed round. Entries are created by [`Ledger::record`] and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEntry {
    round_number: usize,
    outcome: Outcome,
    human_move: Move,
    computer_move: Move,
}

impl RoundEntry {
    /// 1-based position of this round in its ledger.
    #[must_use]
    pub const fn round_number(&self) -> usize {
        self.round_number
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn human_move(&self) -> Move {
        self.human_move
    }

    #[must_use]
    pub const fn computer_move(&self) -> Move {
        self.computer_move
    }
}

/// Append-only, chronological record of the rounds played in one session.
///
/// The i-th entry always carries `round_number == i` (1-based): entries are
/// only ever appended, and the ledger can only be emptied as a whole with
/// [`Ledger::reset`] between sessions.
///
/// # Example
///
/// ```
/// use rpsls_engine::{Ledger, Move, Outcome};
///
/// let mut ledger = Ledger::new();
/// ledger.record(Outcome::Human, Move::Rock, Move::Lizard);
/// ledger.record(Outcome::Tie, Move::Paper, Move::Paper);
///
/// assert_eq!(ledger.len(), 2);
/// assert_eq!(ledger.losing_rounds_for(Outcome::Human).count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<RoundEntry>,
}

impl Ledger {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a round and returns the new entry.
    pub fn record(&mut self, outcome: Outcome, human_move: Move, computer_move: Move) -> &RoundEntry {
        let entry = RoundEntry {
            round_number: self.entries.len() + 1,
            outcome,
            human_move,
            computer_move,
        };
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Entries in the order they were played.
    #[must_use]
    pub fn entries(&self) -> &[RoundEntry] {
        &self.entries
    }

    /// Rounds won by `side`, i.e. the rounds the other side lost.
    ///
    /// `losing_rounds_for(Outcome::Human)` yields the computer's losing rounds.
    pub fn losing_rounds_for(&self, side: Outcome) -> impl Iterator<Item = &RoundEntry> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.outcome == side)
    }

    #[must_use]
    pub fn last(&self) -> Option<&RoundEntry> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets every round. Only meant to be called between sessions.
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
