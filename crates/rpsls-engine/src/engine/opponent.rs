use rand::Rng;

use crate::{
    core::{dominance::DominanceTable, hand::Move},
    engine::{ledger::Ledger, strategy::Strategy},
};

/// A computer player: a strategy bound to the rules it plays by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opponent {
    strategy: Strategy,
    table: DominanceTable,
}

impl Opponent {
    /// Creates an opponent playing the classic rules.
    #[must_use]
    pub const fn new(strategy: Strategy) -> Self {
        Self::with_table(strategy, DominanceTable::CLASSIC)
    }

    #[must_use]
    pub const fn with_table(strategy: Strategy, table: DominanceTable) -> Self {
        Self { strategy, table }
    }

    /// Picks one of the four strategies uniformly.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::new(Strategy::ALL[rng.random_range(0..Strategy::ALL.len())])
    }

    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Display name shown to the human.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self.strategy {
            Strategy::Naive => "Dice",
            Strategy::Reflective => "Echo",
            Strategy::Adaptive => "Hal",
            Strategy::Weighted => "Sage",
        }
    }

    pub fn choose<R>(&self, ledger: &Ledger, human: Move, rng: &mut R) -> Move
    where
        R: Rng + ?Sized,
    {
        self.strategy.choose(&self.table, ledger, human, rng)
    }
}
