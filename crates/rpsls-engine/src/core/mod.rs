//! Move values and the rules that compare them.
//!
//! - [`Move`] - One of the five hand signs
//! - [`DominanceTable`] - Which kinds each kind beats
//! - [`Matchup`] - Ternary result of comparing two moves

pub use self::{dominance::*, hand::*};

pub(crate) mod dominance;
pub(crate) mod hand;
