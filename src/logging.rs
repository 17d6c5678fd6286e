//! Logger setup.

use crate::config::LogLevel;

/// Install the global logger at the given level.
///
/// Safe to call more than once; later calls leave the first logger in place.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: LogLevel) {
    let result = env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .format_timestamp(None)
        .try_init();

    match result {
        Ok(()) => log::debug!("Logging initialized at {:?}", level),
        Err(_) => log::debug!("Logger already installed, keeping existing one"),
    }
}

/// Only adjusts the level filter; the host page installs its own logger.
#[cfg(target_arch = "wasm32")]
pub fn init(level: LogLevel) {
    log::set_max_level(level.to_level_filter());
}
