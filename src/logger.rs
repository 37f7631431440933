//! Diagnostic logging to stderr.
//!
//! Silent unless `--debug` is passed, so stdout carries only the answer and
//! stderr only the one-line error in normal runs.

use std::io::stderr;
use std::sync::Once;
use std::time::SystemTime;

use fern::Dispatch;
use humantime::format_rfc3339_millis;
use log::{LevelFilter, SetLoggerError, debug};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Level used when `--debug` is set.
const DEBUG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Level used otherwise.
const QUIET_LEVEL: LevelFilter = LevelFilter::Off;

/// Pick the level filter for the `--debug` flag.
#[must_use]
pub fn level_for(debug: bool) -> LevelFilter {
    if debug { DEBUG_LEVEL } else { QUIET_LEVEL }
}

/// Install the stderr logger. Later calls are no-ops.
///
/// # Errors
///
/// Returns `SetLoggerError` if another logger is already installed.
pub fn initialize(debug: bool) -> Result<(), SetLoggerError> {
    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        let level = level_for(debug);
        result = Dispatch::new()
            .level(level)
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message}",
                    date = format_rfc3339_millis(SystemTime::now()),
                    level = record.level(),
                ));
            })
            .chain(stderr())
            .apply();
        if result.is_ok() {
            debug!("Logger initialized with level: {level:?}");
        }
    });

    result
}
