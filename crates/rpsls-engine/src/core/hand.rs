use std::str::FromStr;

use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use crate::{InvalidMoveKind, core::dominance::DominanceTable};

/// One of the five hand signs a player can throw.
///
/// Moves are plain values: once constructed, a move never changes. Whether
/// one move beats another is decided by a [`DominanceTable`];
/// [`Move::beats`] consults [`DominanceTable::CLASSIC`].
///
/// # Example
///
/// ```
/// use rpsls_engine::Move;
///
/// let spock = Move::from_symbol("Spock").unwrap();
/// assert!(spock.beats(Move::Scissors));
/// assert!(!spock.beats(Move::Paper));
/// assert!(Move::from_symbol("banana").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    #[display("rock")]
    Rock,
    #[display("paper")]
    Paper,
    #[display("scissors")]
    Scissors,
    #[display("lizard")]
    Lizard,
    #[display("spock")]
    Spock,
}

impl Distribution<Move> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        Move::ALL[rng.random_range(0..Move::LEN)]
    }
}

impl FromStr for Move {
    type Err = InvalidMoveKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

impl Move {
    pub const LEN: usize = 5;

    /// All kinds in canonical order. `Move::ALL[m.index()] == m`.
    pub const ALL: [Self; Self::LEN] = [
        Self::Rock,
        Self::Paper,
        Self::Scissors,
        Self::Lizard,
        Self::Spock,
    ];

    /// Parses a move from its name or short form.
    ///
    /// Full names are matched case-insensitively; the short forms are
    /// `r`, `p`, `sc`, `l` and `sp` (a bare `s` is ambiguous and rejected).
    ///
    /// ```
    /// use rpsls_engine::Move;
    ///
    /// assert_eq!(Move::from_symbol("sc"), Ok(Move::Scissors));
    /// assert_eq!(Move::from_symbol(" LIZARD "), Ok(Move::Lizard));
    /// assert!(Move::from_symbol("s").is_err());
    /// ```
    pub fn from_symbol(symbol: &str) -> Result<Self, InvalidMoveKind> {
        let kind = match symbol.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Self::Rock,
            "paper" | "p" => Self::Paper,
            "scissors" | "sc" => Self::Scissors,
            "lizard" | "l" => Self::Lizard,
            "spock" | "sp" => Self::Spock,
            _ => {
                return Err(InvalidMoveKind {
                    symbol: symbol.to_owned(),
                });
            }
        };
        Ok(kind)
    }

    /// Position of this kind in [`Move::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Rock => 0,
            Self::Paper => 1,
            Self::Scissors => 2,
            Self::Lizard => 3,
            Self::Spock => 4,
        }
    }

    /// Returns `true` if `self` beats `other` under the classic rules.
    #[must_use]
    pub fn beats(self, other: Self) -> bool {
        DominanceTable::CLASSIC.beats(self, other)
    }

    /// Upper-case first letter form used for display (`"Rock"`, `"Spock"`).
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
            Self::Lizard => "Lizard",
            Self::Spock => "Spock",
        }
    }

    /// The verb used when `self` beats `other`, e.g. "crushes" for rock against lizard.
    ///
    /// Returns `None` when `self` does not beat `other` under the classic rules.
    #[must_use]
    pub fn verb_against(self, other: Self) -> Option<&'static str> {
        let verb = match (self, other) {
            (Self::Rock, Self::Scissors | Self::Lizard) => "crushes",
            (Self::Paper, Self::Rock) => "covers",
            (Self::Paper, Self::Spock) => "disproves",
            (Self::Scissors, Self::Paper) => "cuts",
            (Self::Scissors, Self::Lizard) => "decapitates",
            (Self::Lizard, Self::Paper) => "eats",
            (Self::Lizard, Self::Spock) => "poisons",
            (Self::Spock, Self::Rock) => "vaporizes",
            (Self::Spock, Self::Scissors) => "smashes",
            _ => return None,
        };
        Some(verb)
    }
}
