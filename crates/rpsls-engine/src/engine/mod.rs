//! Round bookkeeping, opponents and the session controller.
//!
//! - [`Ledger`] - Append-only history of the rounds in a session
//! - [`RoundResolver`] - Decides a round and records it
//! - [`Strategy`] / [`Opponent`] - How the computer picks its move
//! - [`LossProfile`] - Loss-weighted sampling used by [`Strategy::Weighted`]
//! - [`Session`] - Plays rounds until one side reaches the winning score
//!
//! # Round Flow
//!
//! 1. The front end obtains the human's [`Move`](crate::Move)
//! 2. The opponent picks a move from the ledger snapshot and the human's move
//! 3. The resolver compares both moves and appends a [`RoundEntry`]
//! 4. The session updates the [`Scoreboard`] and checks the winning score

pub use self::{
    ledger::*, opponent::*, resolver::*, scoreboard::*, session::*, strategy::*, weighting::*,
};

mod ledger;
mod opponent;
mod resolver;
mod scoreboard;
mod session;
mod strategy;
mod weighting;
