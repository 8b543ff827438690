//! Logger for the terminal game and the simulator.
//!
//! Engine and session events go through the `log` facade. Records are written
//! to stderr so they never interleave with the board drawn on stdout; run with
//! `TICTACTOE_LOG=debug` to trace moves, countdowns and dropped stale timers.

use log::{LevelFilter, Log, Metadata, Record};

const LEVEL_VAR: &str = "TICTACTOE_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Module path without the crate prefix, e.g. `session` or `game`.
        let target = record.target().strip_prefix("tictactoe::").unwrap_or(record.target());
        eprintln!("[{:<5} {}] {}", record.level(), target, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level named by `TICTACTOE_LOG`
/// (`off`, `error` .. `trace`), falling back to `info`. Later calls are no-ops.
pub fn init_logging() {
    let level = level_from(std::env::var(LEVEL_VAR).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
