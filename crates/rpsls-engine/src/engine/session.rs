use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    InvalidMatchSeed, InvalidWinningScore, SessionOverError,
    core::{dominance::DominanceTable, hand::Move},
    engine::{
        ledger::{Ledger, Outcome, RoundEntry},
        opponent::Opponent,
        resolver::RoundResolver,
        scoreboard::Scoreboard,
        strategy::Strategy,
    },
};

/// Seed for the computer's random stream.
///
/// A 128-bit seed shown as 32 hex characters. Two sessions built with the same
/// seed and fed the same human moves produce the same computer moves.
///
/// ```
/// use rpsls_engine::{MatchSeed, Move, Session, SessionConfig};
///
/// let seed: MatchSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
/// let mut a = Session::with_seed(SessionConfig::default(), seed);
/// let mut b = Session::with_seed(SessionConfig::default(), seed);
///
/// assert_eq!(a.opponent(), b.opponent());
/// let first = a.play_round(Move::Rock).unwrap();
/// let second = b.play_round(Move::Rock).unwrap();
/// assert_eq!(first.entry, second.entry);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSeed([u8; 16]);

impl MatchSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl fmt::Display for MatchSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for MatchSeed {
    type Err = InvalidMatchSeed;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidMatchSeed {
            input: s.to_owned(),
        };
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| invalid())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for MatchSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MatchSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

impl Distribution<MatchSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MatchSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        MatchSeed(seed)
    }
}

/// Where a session stands.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[display("playing")]
    Playing,
    #[display("human won")]
    HumanWon,
    #[display("computer won")]
    ComputerWon,
}

impl SessionState {
    /// The side that won the session, if it is over.
    #[must_use]
    pub const fn winner(self) -> Option<Outcome> {
        match self {
            Self::Playing => None,
            Self::HumanWon => Some(Outcome::Human),
            Self::ComputerWon => Some(Outcome::Computer),
        }
    }
}

/// Settings fixed for the lifetime of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    winning_score: usize,
    opponent: Option<Strategy>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            winning_score: Self::DEFAULT_WINNING_SCORE,
            opponent: None,
        }
    }
}

impl SessionConfig {
    pub const DEFAULT_WINNING_SCORE: usize = 5;

    /// Rounds a side must win to take the session. Must be at least 1.
    pub const fn new(winning_score: usize) -> Result<Self, InvalidWinningScore> {
        if winning_score == 0 {
            return Err(InvalidWinningScore);
        }
        Ok(Self {
            winning_score,
            opponent: None,
        })
    }

    /// Plays against `strategy` instead of a randomly drawn opponent.
    #[must_use]
    pub const fn opponent(self, strategy: Strategy) -> Self {
        Self {
            opponent: Some(strategy),
            ..self
        }
    }

    #[must_use]
    pub const fn winning_score(&self) -> usize {
        self.winning_score
    }

    #[must_use]
    pub const fn fixed_opponent(&self) -> Option<Strategy> {
        self.opponent
    }
}

/// Result of [`Session::play_round`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub entry: RoundEntry,
    pub state: SessionState,
}

/// Drives rounds between the human and one computer opponent.
///
/// The session owns the ledger, the score, the opponent and the random stream.
/// It ends when either side reaches the configured winning score; after that
/// [`Session::restart`] starts a fresh session against the same opponent.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    seed: MatchSeed,
    rng: Pcg32,
    opponent: Opponent,
    resolver: RoundResolver,
    ledger: Ledger,
    scoreboard: Scoreboard,
    state: SessionState,
    sessions_won: Scoreboard,
}

impl Session {
    /// Creates a session with a random seed.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_seed(config, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for reproducible play.
    #[must_use]
    pub fn with_seed(config: SessionConfig, seed: MatchSeed) -> Self {
        let table = DominanceTable::CLASSIC;
        debug_assert_eq!(table.validate(), Ok(()));

        let mut rng = Pcg32::from_seed(seed.0);
        let opponent = match config.opponent {
            Some(strategy) => Opponent::with_table(strategy, table),
            None => Opponent::random(&mut rng),
        };
        tracing::debug!(
            %seed,
            opponent = opponent.name(),
            strategy = %opponent.strategy(),
            winning_score = config.winning_score,
            "session started"
        );
        Self {
            config,
            seed,
            rng,
            opponent,
            resolver: RoundResolver::new(table),
            ledger: Ledger::new(),
            scoreboard: Scoreboard::new(),
            state: SessionState::Playing,
            sessions_won: Scoreboard::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn winning_score(&self) -> usize {
        self.config.winning_score
    }

    #[must_use]
    pub fn seed(&self) -> MatchSeed {
        self.seed
    }

    #[must_use]
    pub fn opponent(&self) -> &Opponent {
        &self.opponent
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// How many sessions each side has taken since this value was created.
    ///
    /// Only the human and computer counters are used.
    #[must_use]
    pub fn sessions_won(&self) -> &Scoreboard {
        &self.sessions_won
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Plays one round with the human's move.
    pub fn play_round(&mut self, human: Move) -> Result<RoundReport, SessionOverError> {
        if !self.state.is_playing() {
            return Err(SessionOverError { state: self.state });
        }

        let computer = self.opponent.choose(&self.ledger, human, &mut self.rng);
        let outcome = self.resolver.resolve(&mut self.ledger, human, computer);
        self.scoreboard.record(outcome);

        if self.scoreboard.human_wins() >= self.config.winning_score {
            self.finish(SessionState::HumanWon);
        } else if self.scoreboard.computer_wins() >= self.config.winning_score {
            self.finish(SessionState::ComputerWon);
        }

        let entry = *self
            .ledger
            .last()
            .expect("resolving a round always records an entry");
        Ok(RoundReport {
            entry,
            state: self.state,
        })
    }

    fn finish(&mut self, state: SessionState) {
        self.state = state;
        if let Some(winner) = state.winner() {
            self.sessions_won.record(winner);
        }
        tracing::debug!(
            %state,
            rounds = self.ledger.len(),
            human = self.scoreboard.human_wins(),
            computer = self.scoreboard.computer_wins(),
            ties = self.scoreboard.ties(),
            "session finished"
        );
    }

    /// Starts over against the same opponent.
    ///
    /// The ledger and score are cleared; the random stream continues.
    pub fn restart(&mut self) {
        self.ledger.reset();
        self.scoreboard.reset();
        self.state = SessionState::Playing;
        tracing::debug!(opponent = self.opponent.name(), "session restarted");
    }

    /// Starts over against a newly drawn opponent, unless the configuration pins one.
    pub fn restart_with_new_opponent(&mut self) {
        if self.config.opponent.is_none() {
            self.opponent = Opponent::random(&mut self.rng);
        }
        self.restart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: MatchSeed = MatchSeed([
        0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77,
        0x88,
    ]);

    fn session_against(strategy: Strategy, winning_score: usize) -> Session {
        let config = SessionConfig::new(winning_score).unwrap().opponent(strategy);
        Session::with_seed(config, SEED)
    }

    /// Plays until the session ends, always throwing the move that beats the
    /// computer's previous throw. Returns the number of rounds played.
    fn play_out(session: &mut Session) -> usize {
        let mut human = Move::Rock;
        let mut rounds = 0;
        while session.state().is_playing() {
            let report = session.play_round(human).unwrap();
            human = DominanceTable::CLASSIC.defeated_by(report.entry.computer_move())[0];
            rounds += 1;
            assert!(rounds < 10_000, "session never ended");
        }
        rounds
    }

    #[test]
    fn test_zero_winning_score_is_rejected() {
        assert_eq!(SessionConfig::new(0), Err(InvalidWinningScore));
        assert_eq!(
            SessionConfig::default().winning_score(),
            SessionConfig::DEFAULT_WINNING_SCORE
        );
    }

    #[test]
    fn test_play_round_records_ledger_and_score() {
        let mut session = session_against(Strategy::Naive, 100);
        for (i, human) in Move::ALL.into_iter().cycle().take(12).enumerate() {
            let report = session.play_round(human).unwrap();
            assert_eq!(report.entry.round_number(), i + 1);
            assert_eq!(report.entry.human_move(), human);
            assert_eq!(report.state, SessionState::Playing);
        }

        let score = session.scoreboard();
        assert_eq!(session.ledger().len(), 12);
        assert_eq!(score.rounds(), 12);
        for outcome in [Outcome::Human, Outcome::Computer, Outcome::Tie] {
            assert_eq!(
                score.count(outcome),
                session.ledger().losing_rounds_for(outcome).count()
            );
        }
    }

    #[test]
    fn test_session_ends_at_winning_score() {
        let mut session = session_against(Strategy::Naive, 3);
        play_out(&mut session);

        let score = *session.scoreboard();
        match session.state() {
            SessionState::HumanWon => {
                assert_eq!(score.human_wins(), 3);
                assert!(score.computer_wins() < 3);
                assert_eq!(session.sessions_won().human_wins(), 1);
            }
            SessionState::ComputerWon => {
                assert_eq!(score.computer_wins(), 3);
                assert!(score.human_wins() < 3);
                assert_eq!(session.sessions_won().computer_wins(), 1);
            }
            SessionState::Playing => unreachable!(),
        }
    }

    #[test]
    fn test_play_after_end_is_an_error() {
        let mut session = session_against(Strategy::Adaptive, 1);
        play_out(&mut session);
        let state = session.state();
        let rounds = session.ledger().len();

        assert_eq!(
            session.play_round(Move::Spock),
            Err(SessionOverError { state })
        );
        assert_eq!(session.ledger().len(), rounds);
    }

    #[test]
    fn test_restart_clears_round_state_but_keeps_opponent() {
        let mut session = session_against(Strategy::Weighted, 2);
        play_out(&mut session);
        let opponent = *session.opponent();

        session.restart();
        assert!(session.state().is_playing());
        assert!(session.ledger().is_empty());
        assert_eq!(session.scoreboard().rounds(), 0);
        assert_eq!(session.opponent(), &opponent);
        assert_eq!(session.sessions_won().rounds(), 1);

        let report = session.play_round(Move::Paper).unwrap();
        assert_eq!(report.entry.round_number(), 1);
    }

    #[test]
    fn test_restart_with_new_opponent_respects_pinned_strategy() {
        let mut session = session_against(Strategy::Reflective, 1);
        for _ in 0..10 {
            session.restart_with_new_opponent();
            assert_eq!(session.opponent().strategy(), Strategy::Reflective);
        }
    }

    #[test]
    fn test_random_opponent_is_drawn_from_seed() {
        let a = Session::with_seed(SessionConfig::default(), SEED);
        let b = Session::with_seed(SessionConfig::default(), SEED);
        assert_eq!(a.opponent(), b.opponent());
        assert_eq!(a.config().fixed_opponent(), None);
    }

    #[test]
    fn test_same_seed_same_computer_moves() {
        let mut a = session_against(Strategy::Weighted, 50);
        let mut b = session_against(Strategy::Weighted, 50);
        for human in Move::ALL.into_iter().cycle().take(40) {
            assert_eq!(a.play_round(human), b.play_round(human));
        }
    }

    #[test]
    fn test_reflective_first_round_is_a_tie() {
        let mut session = session_against(Strategy::Reflective, 5);
        let report = session.play_round(Move::Lizard).unwrap();
        assert_eq!(report.entry.computer_move(), Move::Lizard);
        assert_eq!(report.entry.outcome(), Outcome::Tie);
    }

    #[test]
    fn test_seed_hex_round_trip() {
        assert_eq!(SEED.to_string(), "123456789abcdef01122334455667788");
        assert_eq!(SEED.to_string().parse::<MatchSeed>(), Ok(SEED));
        assert_eq!(
            "0123456789ABCDEF0123456789ABCDEF".parse::<MatchSeed>(),
            Ok(MatchSeed(0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEF_u128.to_be_bytes()))
        );

        let json = serde_json::to_string(&SEED).unwrap();
        assert_eq!(json, "\"123456789abcdef01122334455667788\"");
        assert_eq!(serde_json::from_str::<MatchSeed>(&json).unwrap(), SEED);
    }

    #[test]
    fn test_seed_rejects_bad_input() {
        for input in [
            "",
            "123",
            "123456789abcdef01122334455667788ff",
            "zz3456789abcdef01122334455667788",
            "+23456789abcdef01122334455667788",
        ] {
            let err = input.parse::<MatchSeed>().unwrap_err();
            assert_eq!(err.input, input);
        }
        assert!(serde_json::from_str::<MatchSeed>("\"nothex\"").is_err());
    }
}
