use rpsls_engine::{MatchSeed, Session, SessionConfig, Strategy};

use self::app::PlayApp;

mod app;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Rounds a side must win to take the session
    #[clap(long, default_value_t = SessionConfig::DEFAULT_WINNING_SCORE)]
    pub(super) winning_score: usize,
    /// Always play against this strategy (naive, reflective, adaptive, weighted)
    #[clap(long)]
    pub(super) opponent: Option<Strategy>,
    /// Seed for the computer's moves, as 32 hex digits
    #[clap(long)]
    pub(super) seed: Option<MatchSeed>,
    /// Show the opponent's strategy while the session is running
    #[clap(long, default_value_t = false)]
    pub(super) reveal: bool,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            winning_score: SessionConfig::DEFAULT_WINNING_SCORE,
            opponent: None,
            seed: None,
            reveal: false,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        winning_score,
        opponent,
        seed,
        reveal,
    } = arg;

    let mut config = SessionConfig::new(*winning_score)?;
    if let Some(strategy) = opponent {
        config = config.opponent(*strategy);
    }
    let session = match seed {
        Some(seed) => Session::with_seed(config, *seed),
        None => Session::new(config),
    };
    tracing::info!(seed = %session.seed(), "starting interactive play");

    let mut app = PlayApp::new(session, *reveal);
    ratatui::run(|terminal| app.run(terminal))?;

    let sessions = app.session().sessions_won();
    tracing::info!(
        human = sessions.human_wins(),
        computer = sessions.computer_wins(),
        "player left"
    );
    Ok(())
}
