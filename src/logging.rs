use anyhow::{Context, Result};
use std::env;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file
pub const LOG_FILE_VAR: &str = "TTY_SNAKE_LOG";

/// Install a file-backed subscriber when `TTY_SNAKE_LOG` is set.
///
/// The game owns stdout, so without a log file events are discarded.
/// Verbosity follows `RUST_LOG` and defaults to `info`.
pub fn init() -> Result<()> {
    let Some(path) = env::var_os(LOG_FILE_VAR) else {
        return Ok(());
    };

    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.to_string_lossy()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install log subscriber: {err}"))?;

    Ok(())
}
