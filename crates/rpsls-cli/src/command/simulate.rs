use std::{collections::BTreeMap, path::PathBuf};

use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg32;
use rpsls_engine::{
    Ledger, MatchSeed, Move, RoundEntry, Scoreboard, Session, SessionConfig, SessionState,
    Strategy,
};
use serde::Serialize;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Sessions to play against each opponent
    #[arg(long, default_value_t = 1000)]
    sessions: usize,
    /// Rounds a side must win to take a session
    #[arg(long, default_value_t = SessionConfig::DEFAULT_WINNING_SCORE)]
    winning_score: usize,
    /// Simulate only this strategy (naive, reflective, adaptive, weighted)
    #[arg(long)]
    opponent: Option<Strategy>,
    /// How the scripted human picks moves (uniform, rock, cycle, mimic)
    #[arg(long, default_value = "uniform")]
    policy: HumanPolicy,
    /// Abandon a session that has not ended after this many rounds
    #[arg(long, default_value_t = 1000)]
    max_rounds: usize,
    /// Seed for the whole run, as 32 hex digits
    #[arg(long)]
    seed: Option<MatchSeed>,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Move-selection rule of the scripted human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display, derive_more::FromStr)]
#[serde(rename_all = "lowercase")]
pub(crate) enum HumanPolicy {
    /// Uniformly random.
    #[display("uniform")]
    Uniform,
    /// Rock, every round.
    #[display("rock")]
    Rock,
    /// Rock, paper, scissors, lizard, spock, and around again.
    #[display("cycle")]
    Cycle,
    /// Whatever the computer threw last round; random in the first round.
    #[display("mimic")]
    Mimic,
}

impl HumanPolicy {
    fn next_move<R>(self, ledger: &Ledger, rng: &mut R) -> Move
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::Uniform => rng.random(),
            Self::Rock => Move::Rock,
            Self::Cycle => Move::ALL[ledger.len() % Move::LEN],
            Self::Mimic => match ledger.last() {
                Some(entry) => entry.computer_move(),
                None => rng.random(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    generated_at: DateTime<Utc>,
    seed: MatchSeed,
    policy: HumanPolicy,
    winning_score: usize,
    max_rounds: usize,
    sessions_per_opponent: usize,
    opponents: Vec<OpponentReport>,
}

#[derive(Debug, Serialize)]
struct OpponentReport {
    name: &'static str,
    strategy: Strategy,
    human_sessions: usize,
    computer_sessions: usize,
    unfinished_sessions: usize,
    human_session_rate: f64,
    rounds: Scoreboard,
    mean_rounds_per_session: f64,
    computer_moves: BTreeMap<Move, usize>,
}

impl OpponentReport {
    fn new(session: &Session) -> Self {
        let opponent = session.opponent();
        Self {
            name: opponent.name(),
            strategy: opponent.strategy(),
            human_sessions: 0,
            computer_sessions: 0,
            unfinished_sessions: 0,
            human_session_rate: 0.0,
            rounds: Scoreboard::new(),
            mean_rounds_per_session: 0.0,
            computer_moves: Move::ALL.into_iter().map(|kind| (kind, 0)).collect(),
        }
    }

    fn record_round(&mut self, entry: &RoundEntry) {
        self.rounds.record(entry.outcome());
        *self.computer_moves.entry(entry.computer_move()).or_default() += 1;
    }

    fn record_session(&mut self, state: SessionState) {
        match state {
            SessionState::HumanWon => self.human_sessions += 1,
            SessionState::ComputerWon => self.computer_sessions += 1,
            SessionState::Playing => self.unfinished_sessions += 1,
        }
    }

    #[expect(clippy::cast_precision_loss)]
    fn finish(&mut self) {
        let sessions = self.human_sessions + self.computer_sessions + self.unfinished_sessions;
        if sessions > 0 {
            self.human_session_rate = self.human_sessions as f64 / sessions as f64;
            self.mean_rounds_per_session = self.rounds.rounds() as f64 / sessions as f64;
        }
    }
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        sessions,
        winning_score,
        opponent,
        policy,
        max_rounds,
        seed,
        output,
    } = arg;

    let config = SessionConfig::new(*winning_score)?;
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let strategies = opponent.map_or_else(|| Strategy::ALL.to_vec(), |strategy| vec![strategy]);
    tracing::info!(%seed, %policy, sessions, "starting simulation");

    let mut master = Pcg32::from_seed(seed.to_bytes());
    let mut opponents = vec![];
    for strategy in strategies {
        let session_seed = master.random::<MatchSeed>();
        let mut policy_rng = Pcg32::from_rng(&mut master);
        let report = simulate_opponent(
            config.opponent(strategy),
            session_seed,
            *policy,
            *sessions,
            *max_rounds,
            &mut policy_rng,
        )?;
        tracing::info!(
            opponent = report.name,
            %strategy,
            human = report.human_sessions,
            computer = report.computer_sessions,
            unfinished = report.unfinished_sessions,
            "opponent simulated"
        );
        if report.unfinished_sessions > 0 {
            tracing::warn!(
                %strategy,
                unfinished = report.unfinished_sessions,
                max_rounds,
                "some sessions hit the round limit"
            );
        }
        opponents.push(report);
    }

    let report = SimulationReport {
        generated_at: Utc::now(),
        seed,
        policy: *policy,
        winning_score: *winning_score,
        max_rounds: *max_rounds,
        sessions_per_opponent: *sessions,
        opponents,
    };
    Output::save_json(&report, output.clone())?;
    Ok(())
}

fn simulate_opponent<R>(
    config: SessionConfig,
    seed: MatchSeed,
    policy: HumanPolicy,
    sessions: usize,
    max_rounds: usize,
    rng: &mut R,
) -> anyhow::Result<OpponentReport>
where
    R: Rng + ?Sized,
{
    let mut session = Session::with_seed(config, seed);
    let mut report = OpponentReport::new(&session);
    for _ in 0..sessions {
        while session.state().is_playing() && session.ledger().len() < max_rounds {
            let human = policy.next_move(session.ledger(), rng);
            let round = session.play_round(human)?;
            report.record_round(&round.entry);
        }
        report.record_session(session.state());
        session.restart();
    }
    report.finish();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    const SEED: &str = "fedcba9876543210fedcba9876543210";

    fn simulate(strategy: Strategy, policy: HumanPolicy, sessions: usize) -> OpponentReport {
        let config = SessionConfig::new(3).unwrap().opponent(strategy);
        let mut rng = Pcg32::seed_from_u64(7);
        simulate_opponent(config, SEED.parse().unwrap(), policy, sessions, 200, &mut rng).unwrap()
    }

    #[test]
    fn test_policy_parses_from_name() {
        for policy in [
            HumanPolicy::Uniform,
            HumanPolicy::Rock,
            HumanPolicy::Cycle,
            HumanPolicy::Mimic,
        ] {
            assert_eq!(policy.to_string().parse::<HumanPolicy>().ok(), Some(policy));
        }
        assert!("paper".parse::<HumanPolicy>().is_err());
    }

    #[test]
    fn test_scripted_policies() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ledger = Ledger::new();
        assert_eq!(HumanPolicy::Rock.next_move(&ledger, &mut rng), Move::Rock);
        assert_eq!(HumanPolicy::Cycle.next_move(&ledger, &mut rng), Move::Rock);

        ledger.record(rpsls_engine::Outcome::Human, Move::Rock, Move::Lizard);
        assert_eq!(HumanPolicy::Cycle.next_move(&ledger, &mut rng), Move::Paper);
        assert_eq!(HumanPolicy::Mimic.next_move(&ledger, &mut rng), Move::Lizard);
    }

    #[test]
    fn test_every_session_is_accounted_for() {
        for strategy in Strategy::ALL {
            let report = simulate(strategy, HumanPolicy::Uniform, 50);
            assert_eq!(report.strategy, strategy);
            assert_eq!(
                report.human_sessions + report.computer_sessions + report.unfinished_sessions,
                50
            );
            assert_eq!(
                report.computer_moves.values().sum::<usize>(),
                report.rounds.rounds()
            );
            assert!(report.mean_rounds_per_session >= 3.0);
        }
    }

    #[test]
    fn test_rock_against_reflective_never_ends() {
        // The reflective opponent only ever echoes rock back.
        let report = simulate(Strategy::Reflective, HumanPolicy::Rock, 4);
        assert_eq!(report.unfinished_sessions, 4);
        assert_eq!(report.rounds.ties(), 4 * 200);
        assert_eq!(report.computer_moves[&Move::Rock], 4 * 200);
        assert!((report.mean_rounds_per_session - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_seed_same_report() {
        let a = simulate(Strategy::Weighted, HumanPolicy::Cycle, 20);
        let b = simulate(Strategy::Weighted, HumanPolicy::Cycle, 20);
        assert_eq!(a.rounds, b.rounds);
        assert_eq!(a.computer_moves, b.computer_moves);
        assert_eq!(a.human_sessions, b.human_sessions);
    }

    #[test]
    fn test_report_serializes_moves_by_name() {
        let report = simulate(Strategy::Naive, HumanPolicy::Uniform, 5);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["name"], report.name);
        assert_eq!(json["strategy"], "naive");
        assert!(json["computer_moves"]["spock"].is_u64());
        assert!(json["rounds"]["ties"].is_u64());
    }
}
