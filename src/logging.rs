use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::Result;

/// Sends tracing output to the log file; the terminal belongs to the game screen.
pub fn init(config: &Config) -> Result<()>
{
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();

    tracing::debug!(log_file = %config.log_file.display(), "logging initialised");
    Ok(())
}
