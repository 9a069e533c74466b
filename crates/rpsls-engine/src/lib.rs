//! Decision and outcome engine for Rock-Paper-Scissors-Lizard-Spock.
//!
//! - [`core`] - Moves and the dominance table that decides who wins a throw
//! - [`engine`] - Round ledger, resolver, opponent strategies and the session controller
//!
//! # Example
//!
//! ```
//! use rpsls_engine::{Move, Outcome, Session, SessionConfig, Strategy};
//!
//! let config = SessionConfig::new(3).unwrap().opponent(Strategy::Naive);
//! let mut session = Session::new(config);
//!
//! let report = session.play_round(Move::Spock).unwrap();
//! assert_eq!(report.entry.round_number(), 1);
//! assert_eq!(session.ledger().len(), 1);
//! if report.entry.outcome() == Outcome::Human {
//!     assert_eq!(session.scoreboard().human_wins(), 1);
//! }
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// A move symbol that does not name one of the five kinds.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid move kind: {symbol:?}")]
pub struct InvalidMoveKind {
    pub symbol: String,
}

/// A dominance table that is not a regular tournament on the five kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidDominanceTable {
    #[display("{_0} is listed as beating itself")]
    SelfDefeat(#[error(not(source))] Move),
    #[display("{_0} lists {_1} twice")]
    DuplicateEntry(Move, Move),
    #[display("{_0} and {_1} are listed as beating each other")]
    Symmetric(Move, Move),
}

/// The ledger holds no round lost by the computer, so there is nothing to weigh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no computer-losing rounds recorded yet")]
pub struct InsufficientHistory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("session already ended: {state}")]
pub struct SessionOverError {
    pub state: SessionState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("winning score must be at least 1")]
pub struct InvalidWinningScore;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid match seed {input:?}: expected 32 hex characters")]
pub struct InvalidMatchSeed {
    pub input: String,
}
