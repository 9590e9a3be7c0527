use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt};

/// Keeps the non-blocking writer alive for the process lifetime; dropping
/// it would lose buffered trace lines.
pub struct LoggingGuard {
    _guard: Option<WorkerGuard>,
}

/// Installs the tracing subscriber: `RUST_LOG` wins, the `--log-level`
/// flag is the fallback. With a trace file the output is non-blocking
/// JSON; otherwise compact text on stderr.
pub fn init_logging(level: &str, trace_file: Option<&Path>) -> Result<LoggingGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let guard = match trace_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating trace file at {}", path.display()))?;
            let (writer, guard) = non_blocking::NonBlockingBuilder::default()
                .lossy(false)
                .finish(file);
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(filter)
                .json()
                .with_writer(writer)
                .finish();
            let _ = tracing::subscriber::set_global_default(subscriber);
            Some(guard)
        }
        None => {
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(filter)
                .compact()
                .with_writer(std::io::stderr)
                .finish();
            let _ = tracing::subscriber::set_global_default(subscriber);
            None
        }
    };

    Ok(LoggingGuard { _guard: guard })
}
