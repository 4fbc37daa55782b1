//! File logging setup.
//!
//! Logs go to `$XDG_STATE_HOME/wsm/wsm.log` so they never mix with the
//! output of the interactive shell started by `open`. The filter is read
//! from `WSM_LOG` (e.g. `WSM_LOG=debug`), defaulting to `info`.

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;

const LOG_ENV: &str = "WSM_LOG";
const LOG_FILE: &str = "wsm.log";

/// Install the global subscriber.
///
/// Returns None when no log directory can be set up; the tool then runs
/// without logging. Keep the guard alive until exit so buffered lines flush.
pub fn init() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("wsm: logging disabled, cannot create {}: {}", dir.display(), e);
        return None;
    }

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let appender = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(&dir)
    {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("wsm: logging disabled, cannot open log in {}: {}", dir.display(), e);
            return None;
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .try_init()
        .ok()?;

    Some(guard)
}

/// Checks XDG_STATE_HOME first, falls back to ~/.local/state.
fn log_dir() -> Option<PathBuf> {
    let state_home = std::env::var_os("XDG_STATE_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".local/state")))?;
    Some(state_home.join("wsm"))
}
