use rand::{Rng, seq::SliceRandom};

use crate::{
    InsufficientHistory,
    core::{dominance::DominanceTable, hand::Move},
    engine::ledger::{Ledger, Outcome},
};

/// How often each kind is implicated by the rounds the computer lost.
///
/// For every round the human won with kind `w`, both kinds in
/// `table.defeats(w)` are counted once. Kinds that are rarely implicated get
/// a larger selection weight:
///
/// ```text
/// weight(k) = (1 - count(k) / total)^2
/// ```
///
/// A profile always has `total > 0`; an empty history is rejected with
/// [`InsufficientHistory`] when the profile is built.
///
/// # Example
///
/// ```
/// use rpsls_engine::{DominanceTable, Ledger, LossProfile, Move, Outcome};
///
/// let mut ledger = Ledger::new();
/// ledger.record(Outcome::Human, Move::Rock, Move::Scissors);
///
/// let profile = LossProfile::from_ledger(&DominanceTable::CLASSIC, &ledger).unwrap();
/// assert_eq!(profile.count(Move::Scissors), 1);
/// assert_eq!(profile.count(Move::Lizard), 1);
/// assert_eq!(profile.count(Move::Paper), 0);
/// assert_eq!(profile.weight(Move::Paper), 1.0);
/// assert_eq!(profile.weight(Move::Lizard), 0.25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LossProfile {
    counts: [usize; Move::LEN],
    total: usize,
}

impl LossProfile {
    /// Builds the profile from the computer-losing rounds of `ledger`.
    pub fn from_ledger(
        table: &DominanceTable,
        ledger: &Ledger,
    ) -> Result<Self, InsufficientHistory> {
        let mut winning_kinds = [0; Move::LEN];
        for entry in ledger.losing_rounds_for(Outcome::Human) {
            winning_kinds[entry.human_move().index()] += 1;
        }
        Self::from_winning_kinds(table, winning_kinds)
    }

    /// Builds the profile from the number of times the human won with each kind.
    ///
    /// `winning_kinds` is indexed like [`Move::ALL`].
    pub fn from_winning_kinds(
        table: &DominanceTable,
        winning_kinds: [usize; Move::LEN],
    ) -> Result<Self, InsufficientHistory> {
        let mut counts = [0; Move::LEN];
        for (kind, wins) in Move::ALL.into_iter().zip(winning_kinds) {
            for implicated in table.defeats(kind) {
                counts[implicated.index()] += wins;
            }
        }
        let total = counts.iter().sum::<usize>();
        if total == 0 {
            return Err(InsufficientHistory);
        }
        Ok(Self { counts, total })
    }

    #[must_use]
    pub fn count(&self, kind: Move) -> usize {
        self.counts[kind.index()]
    }

    /// Sum of all counts. Always positive.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn weight(&self, kind: Move) -> f64 {
        let share = self.count(kind) as f64 / self.total as f64;
        (1.0 - share).powi(2)
    }

    /// `(kind, weight)` for every kind, in [`Move::ALL`] order.
    #[must_use]
    pub fn weights(&self) -> [(Move, f64); Move::LEN] {
        Move::ALL.map(|kind| (kind, self.weight(kind)))
    }

    /// Draws a kind with probability proportional to its weight.
    ///
    /// The `(kind, weight)` list is shuffled, the weights are normalized to sum
    /// to 1, and a uniform threshold in `[0, 1)` is walked down the list. If
    /// rounding leaves the threshold positive after the last entry, the last
    /// kind of the shuffled list is returned.
    pub fn sample<R>(&self, rng: &mut R) -> Move
    where
        R: Rng + ?Sized,
    {
        let mut weighted = self.weights();
        weighted.shuffle(rng);

        // Every share is at most 1/2, so every weight is at least 1/4.
        let sum = weighted.iter().map(|(_, w)| w).sum::<f64>();
        let mut threshold = rng.random::<f64>();
        for &(kind, weight) in &weighted {
            threshold -= weight / sum;
            if threshold <= 0.0 {
                return kind;
            }
        }
        weighted[Move::LEN - 1].0
    }
}
