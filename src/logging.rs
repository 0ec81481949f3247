#![cfg(feature = "std")]

//! Stderr logging for the `log` facade.
//!
//! Standard output carries the grid and prompts, so every record goes to
//! standard error as `LEVEL - message`.

use std::env;
use std::io::Write;

use log::{LevelFilter, Metadata, Record};

use crate::config::{DEFAULT_LOG_LEVEL, LOG_ENV_VAR};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let _ = writeln!(std::io::stderr().lock(), "{} - {}", record.level(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value` (`off`, `error`, `warn`, `info`, `debug`, `trace`,
/// any case). Missing or unrecognised values give [`DEFAULT_LOG_LEVEL`].
pub fn log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Install the stderr logger at the level given by [`LOG_ENV_VAR`].
///
/// Calling this more than once keeps the first logger.
pub fn init_logging() {
    let level = log_level(env::var(LOG_ENV_VAR).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
