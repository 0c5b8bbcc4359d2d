#![cfg(feature = "std")]

use std::env;
use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "GOBBLET_LOG";

/// Writes records to stderr; stdout carries the rendered game.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value`, or `info` when it is missing or not a level name.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|name| name.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level given by `GOBBLET_LOG`.
/// Calling it again keeps the first logger.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
