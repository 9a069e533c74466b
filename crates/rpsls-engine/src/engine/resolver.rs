use crate::{
    core::{
        dominance::{DominanceTable, Matchup},
        hand::Move,
    },
    engine::ledger::{Ledger, Outcome},
};

/// Decides rounds and writes them to the ledger.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundResolver {
    table: DominanceTable,
}

impl RoundResolver {
    #[must_use]
    pub const fn new(table: DominanceTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub const fn table(&self) -> &DominanceTable {
        &self.table
    }

    /// Winner of a round, without recording it.
    #[must_use]
    pub fn outcome_of(&self, human: Move, computer: Move) -> Outcome {
        match self.table.matchup(human, computer) {
            Matchup::Wins => Outcome::Human,
            Matchup::Loses => Outcome::Computer,
            Matchup::Ties => Outcome::Tie,
        }
    }

    /// Decides the round and appends exactly one entry to `ledger`.
    pub fn resolve(&self, ledger: &mut Ledger, human: Move, computer: Move) -> Outcome {
        let outcome = self.outcome_of(human, computer);
        let entry = ledger.record(outcome, human, computer);
        tracing::trace!(
            round = entry.round_number(),
            %human,
            %computer,
            ?outcome,
            "round resolved"
        );
        outcome
    }
}
