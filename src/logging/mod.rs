//! Diagnostic logging to disk.
//!
//! When enabled, `tracing` events are written to a single append-only file
//! (default: `~/.local/share/studycircle/studycircle.log`). Nothing is ever
//! written to stdout or stderr while the terminal is in raw mode.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. No-op if logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = expand_home(&config.file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid log level directive {:?}", config.level))?;
    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .with_context(|| "Failed to install log subscriber")?;

    tracing::info!(file = %path.display(), "logging started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_logging_installs_nothing() {
        let cfg = LoggingConfig {
            enabled: false,
            level: "not a [valid directive".into(),
            file: "/nonexistent/dir/x.log".into(),
        };
        assert!(init(&cfg).is_ok());
    }
}
