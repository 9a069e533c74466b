use std::path::Path;

use anyhow::Context as _;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
    util::SubscriberInitExt as _,
};

/// Where log records go.
#[derive(Debug, Clone, Copy)]
pub(crate) enum LogTarget<'a> {
    /// Drop everything. The play screen owns the terminal.
    Off,
    Stderr,
    File(&'a Path),
}

/// Installs the global subscriber.
///
/// The level defaults to `info` and can be overridden with `RUST_LOG`. When
/// logging to a file, the returned guard must be kept alive until exit so the
/// background writer flushes.
pub(crate) fn init(target: LogTarget<'_>) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = || {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy()
    };

    match target {
        LogTarget::Off => Ok(None),
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_filter(env_filter()),
                )
                .try_init()
                .context("Failed to install the log subscriber")?;
            Ok(None)
        }
        LogTarget::File(path) => {
            let dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Log path has no file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_filter(env_filter()),
                )
                .try_init()
                .context("Failed to install the log subscriber")?;
            Ok(Some(guard))
        }
    }
}
