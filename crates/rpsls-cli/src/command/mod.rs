use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::{self, LogTarget};

use self::{play::PlayArg, simulate::SimulateArg};

mod play;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Append logs to this file (`RUST_LOG` sets the level)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play Rock-Paper-Scissors-Lizard-Spock against the computer
    Play(#[clap(flatten)] PlayArg),
    /// Pit a scripted human against the computer opponents and report the results
    Simulate(#[clap(flatten)] SimulateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let mode = args.mode.unwrap_or(Mode::Play(PlayArg::default()));

    let target = match (&args.log_file, &mode) {
        (Some(path), _) => LogTarget::File(path),
        (None, Mode::Play(_)) => LogTarget::Off,
        (None, Mode::Simulate(_)) => LogTarget::Stderr,
    };
    let _guard = logging::init(target)?;

    match mode {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
    }
    Ok(())
}
