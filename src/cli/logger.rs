//! Minimal `log` backend for the console game.

use log::{LevelFilter, Log, Metadata, Record};

/// Writes `LEVEL: message` lines to stderr, keeping stdout for the game.
pub struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the logger and set the level.
///
/// Returns false when another logger was installed first (tests, embedding
/// programs); the level is still applied to it.
pub fn init(level: LevelFilter) -> bool {
    let installed = match log::set_logger(&LOGGER) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("logger not installed: {err}");
            false
        }
    };
    log::set_max_level(level);
    installed
}
