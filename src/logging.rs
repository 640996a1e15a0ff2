//! Tracing setup for rndline.
//!
//! The terminal belongs to the console while it runs, so log lines go to a
//! file. Without a log file no subscriber is installed and every `tracing`
//! macro is a no-op.

use crate::config::{LOG_FILE_ENV_VAR, LOG_LEVEL_ENV_VAR};
use anyhow::Result;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

/// Crates whose own logging is pinned to `warn`
const QUIET_CRATES: &[&str] = &[
    "reqwest",
    "hyper",
    "hyper_util",
    "h2",
    "tokio",
    "tokio_util",
    "tokio_rustls",
    "rustls",
    "tower",
    "mio",
    "arboard",
];

/// Log file from `--log-file`, then the environment
pub fn resolve_log_file(cli_log_file: Option<&Path>) -> Option<PathBuf> {
    cli_log_file.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(LOG_FILE_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

fn env_filter() -> Result<EnvFilter> {
    let mut filter = EnvFilter::from_env(LOG_LEVEL_ENV_VAR);
    for name in QUIET_CRATES {
        filter = filter.add_directive(format!("{name}=warn").parse()?);
    }
    Ok(filter)
}

/// Install the global subscriber writing to `log_file`. Returns false when
/// there is nowhere to log.
pub fn init_tracing_subscriber(log_file: Option<&Path>) -> Result<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter()?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(ChronoLocal::rfc_3339())
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("Logging to {}", path.display());
    Ok(true)
}
