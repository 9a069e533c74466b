use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    core::{dominance::DominanceTable, hand::Move},
    engine::{
        ledger::{Ledger, Outcome},
        weighting::LossProfile,
    },
};

/// Number of computer-losing rounds at which [`Strategy::Adaptive`] switches
/// to counter mode. The check is an exact match.
pub const ADAPTIVE_LOSS_TRIGGER: usize = 4;

/// Move-selection rule of a computer opponent.
///
/// Every strategy is a function of the dominance table, the ledger snapshot,
/// the human's current move and the random stream; none keeps state between
/// calls.
///
/// - [`Naive`](Self::Naive) - uniform over the five kinds
/// - [`Reflective`](Self::Reflective) - echoes the human's recent moves
/// - [`Adaptive`](Self::Adaptive) - switches to counter mode after exactly
///   [`ADAPTIVE_LOSS_TRIGGER`] losses
/// - [`Weighted`](Self::Weighted) - steers away from kinds implicated in past
///   losses, see [`LossProfile`]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[display("naive")]
    Naive,
    #[display("reflective")]
    Reflective,
    #[display("adaptive")]
    Adaptive,
    #[display("weighted")]
    Weighted,
}

impl Strategy {
    pub const ALL: [Self; 4] = [
        Self::Naive,
        Self::Reflective,
        Self::Adaptive,
        Self::Weighted,
    ];

    /// Picks the computer's move for the current round.
    pub fn choose<R>(self, table: &DominanceTable, ledger: &Ledger, human: Move, rng: &mut R) -> Move
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::Naive => rng.random(),
            Self::Reflective => match ledger.last() {
                None => human,
                Some(previous) if rng.random_bool(0.5) => previous.human_move(),
                Some(_) => human,
            },
            Self::Adaptive => {
                let losses = ledger.losing_rounds_for(Outcome::Human).count();
                if losses == ADAPTIVE_LOSS_TRIGGER {
                    let candidates = table.defeats(human);
                    candidates[rng.random_range(0..candidates.len())]
                } else {
                    rng.random()
                }
            }
            Self::Weighted => match LossProfile::from_ledger(table, ledger) {
                Ok(profile) => profile.sample(rng),
                Err(_) => rng.random(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    const TABLE: DominanceTable = DominanceTable::CLASSIC;
    const TRIALS: usize = 10_000;

    fn histogram(strategy: Strategy, ledger: &Ledger, human: Move, seed: u64) -> [usize; Move::LEN] {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut freq = [0; Move::LEN];
        for _ in 0..TRIALS {
            freq[strategy.choose(&TABLE, ledger, human, &mut rng).index()] += 1;
        }
        freq
    }

    fn ledger_with_computer_losses(losses: usize) -> Ledger {
        let mut ledger = Ledger::new();
        // Interleave other outcomes to make sure only human wins are counted.
        ledger.record(Outcome::Computer, Move::Rock, Move::Paper);
        ledger.record(Outcome::Tie, Move::Lizard, Move::Lizard);
        for _ in 0..losses {
            ledger.record(Outcome::Human, Move::Paper, Move::Rock);
        }
        ledger
    }

    #[test]
    fn test_naive_is_roughly_uniform() {
        let freq = histogram(Strategy::Naive, &Ledger::new(), Move::Rock, 1);
        // Expected 2000 each; the band is about seven standard deviations wide.
        for (kind, count) in Move::ALL.into_iter().zip(freq) {
            assert!((1_700..2_300).contains(&count), "{kind}: {count}");
        }
    }

    #[test]
    fn test_naive_ignores_history() {
        let ledger = ledger_with_computer_losses(ADAPTIVE_LOSS_TRIGGER);
        let freq = histogram(Strategy::Naive, &ledger, Move::Spock, 2);
        assert!(freq.iter().all(|&count| count > 0));
    }

    #[test]
    fn test_reflective_mirrors_first_move() {
        let mut rng = Pcg32::seed_from_u64(3);
        for human in Move::ALL {
            for _ in 0..20 {
                let chosen = Strategy::Reflective.choose(&TABLE, &Ledger::new(), human, &mut rng);
                assert_eq!(chosen, human);
            }
        }
    }

    #[test]
    fn test_reflective_samples_previous_and_current_move() {
        let mut ledger = Ledger::new();
        ledger.record(Outcome::Computer, Move::Paper, Move::Scissors);

        let freq = histogram(Strategy::Reflective, &ledger, Move::Lizard, 4);
        for kind in [Move::Rock, Move::Scissors, Move::Spock] {
            assert_eq!(freq[kind.index()], 0, "{kind} must never be chosen");
        }
        assert!(freq[Move::Paper.index()] > TRIALS / 3);
        assert!(freq[Move::Lizard.index()] > TRIALS / 3);
    }

    #[test]
    fn test_reflective_uses_only_the_immediately_preceding_round() {
        let mut ledger = Ledger::new();
        ledger.record(Outcome::Human, Move::Rock, Move::Scissors);
        ledger.record(Outcome::Tie, Move::Spock, Move::Spock);

        let freq = histogram(Strategy::Reflective, &ledger, Move::Paper, 5);
        assert_eq!(freq[Move::Rock.index()], 0);
        assert_eq!(
            freq[Move::Spock.index()] + freq[Move::Paper.index()],
            TRIALS
        );
    }

    #[test]
    fn test_adaptive_counters_at_exactly_four_losses() {
        let ledger = ledger_with_computer_losses(ADAPTIVE_LOSS_TRIGGER);
        let freq = histogram(Strategy::Adaptive, &ledger, Move::Spock, 6);

        for kind in [Move::Paper, Move::Lizard, Move::Spock] {
            assert_eq!(freq[kind.index()], 0, "{kind} must never be chosen");
        }
        assert!(freq[Move::Rock.index()] > TRIALS / 3);
        assert!(freq[Move::Scissors.index()] > TRIALS / 3);
    }

    #[test]
    fn test_adaptive_is_uniform_below_and_above_trigger() {
        for losses in [0, 3, 5, 8] {
            let ledger = ledger_with_computer_losses(losses);
            let freq = histogram(Strategy::Adaptive, &ledger, Move::Spock, 7);
            for (kind, count) in Move::ALL.into_iter().zip(freq) {
                assert!(
                    (1_700..2_300).contains(&count),
                    "{losses} losses, {kind}: {count}"
                );
            }
        }
    }

    #[test]
    fn test_weighted_falls_back_to_uniform_without_losses() {
        let mut ledger = Ledger::new();
        ledger.record(Outcome::Computer, Move::Rock, Move::Paper);
        let freq = histogram(Strategy::Weighted, &ledger, Move::Rock, 8);
        for (kind, count) in Move::ALL.into_iter().zip(freq) {
            assert!((1_700..2_300).contains(&count), "{kind}: {count}");
        }
    }

    #[test]
    fn test_weighted_deprioritizes_kinds_rock_beats() {
        let mut ledger = Ledger::new();
        for _ in 0..5 {
            ledger.record(Outcome::Human, Move::Rock, Move::Scissors);
        }
        let freq = histogram(Strategy::Weighted, &ledger, Move::Rock, 9);
        let max_low = freq[Move::Scissors.index()].max(freq[Move::Lizard.index()]);
        let min_high = [Move::Rock, Move::Paper, Move::Spock]
            .map(|kind| freq[kind.index()])
            .into_iter()
            .min()
            .unwrap();
        assert!(max_low < min_high, "{freq:?}");
    }

    #[test]
    fn test_strategy_parses_from_name() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().ok(), Some(strategy));
        }
        assert!("random".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_same_seed_same_choices() {
        let ledger = ledger_with_computer_losses(2);
        for strategy in Strategy::ALL {
            assert_eq!(
                histogram(strategy, &ledger, Move::Paper, 10),
                histogram(strategy, &ledger, Move::Paper, 10)
            );
        }
    }
}
