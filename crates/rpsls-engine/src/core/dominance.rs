use crate::{InvalidDominanceTable, core::hand::Move};

/// Result of comparing one move against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Matchup {
    Wins,
    Loses,
    Ties,
}

/// Declarative win relation between the five kinds.
///
/// Each kind maps to the two kinds it beats. A valid table is a regular
/// tournament: no kind beats itself, no pair beats each other, and every kind
/// beats exactly two others and loses to exactly two others.
///
/// The table is a plain `Copy` value so it can be handed to the resolver and
/// to each opponent instead of living in a global.
///
/// # Example
///
/// ```
/// use rpsls_engine::{DominanceTable, Matchup, Move};
///
/// let table = DominanceTable::CLASSIC;
/// assert_eq!(table.defeats(Move::Spock), [Move::Rock, Move::Scissors]);
/// assert_eq!(table.matchup(Move::Paper, Move::Rock), Matchup::Wins);
/// assert_eq!(table.matchup(Move::Rock, Move::Rock), Matchup::Ties);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DominanceTable {
    defeats: [[Move; 2]; Move::LEN],
}

impl Default for DominanceTable {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl DominanceTable {
    /// The rules of Rock-Paper-Scissors-Lizard-Spock.
    pub const CLASSIC: Self = Self {
        defeats: [
            [Move::Scissors, Move::Lizard], // rock
            [Move::Rock, Move::Spock],      // paper
            [Move::Paper, Move::Lizard],    // scissors
            [Move::Paper, Move::Spock],     // lizard
            [Move::Rock, Move::Scissors],   // spock
        ],
    };

    /// Builds a table from the beaten-set of each kind, indexed like [`Move::ALL`].
    pub fn new(defeats: [[Move; 2]; Move::LEN]) -> Result<Self, InvalidDominanceTable> {
        let table = Self { defeats };
        table.validate()?;
        Ok(table)
    }

    /// Checks that the table is a regular tournament on the five kinds.
    ///
    /// Ten distinct, self-free, one-directional edges over five kinds cover
    /// every pair exactly once, so each kind also loses to exactly two others.
    pub fn validate(&self) -> Result<(), InvalidDominanceTable> {
        for kind in Move::ALL {
            let [a, b] = self.defeats(kind);
            if a == kind || b == kind {
                return Err(InvalidDominanceTable::SelfDefeat(kind));
            }
            if a == b {
                return Err(InvalidDominanceTable::DuplicateEntry(kind, a));
            }
            if let Some(loser) = [a, b].into_iter().find(|&loser| self.beats(loser, kind)) {
                return Err(InvalidDominanceTable::Symmetric(kind, loser));
            }
        }
        Ok(())
    }

    /// The two kinds that `kind` beats.
    #[must_use]
    pub const fn defeats(&self, kind: Move) -> [Move; 2] {
        self.defeats[kind.index()]
    }

    /// The two kinds that beat `kind`.
    ///
    /// # Panics
    ///
    /// Panics if the table is not valid (a validated table always has exactly two).
    #[must_use]
    pub fn defeated_by(&self, kind: Move) -> [Move; 2] {
        let mut winners = Move::ALL.into_iter().filter(|&w| self.beats(w, kind));
        let first = winners.next().expect("every kind loses to two others");
        let second = winners.next().expect("every kind loses to two others");
        [first, second]
    }

    #[must_use]
    pub fn beats(&self, a: Move, b: Move) -> bool {
        self.defeats(a).contains(&b)
    }

    /// Compares `a` against `b` from `a`'s point of view.
    #[must_use]
    pub fn matchup(&self, a: Move, b: Move) -> Matchup {
        if self.beats(a, b) {
            Matchup::Wins
        } else if self.beats(b, a) {
            Matchup::Loses
        } else {
            Matchup::Ties
        }
    }
}
