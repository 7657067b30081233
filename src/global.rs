//! # Process-wide Logger
//!
//! Convenience wrappers around one lazily created [`DebugLogger`]. The bare
//! forms of the crate macros write through this instance.

use crate::config::LoggerOptions;
use crate::error::DebugLogError;
use crate::logger::DebugLogger;
use once_cell::sync::Lazy;
use std::path::Path;

static GLOBAL_LOGGER: Lazy<DebugLogger> = Lazy::new(DebugLogger::new);

/// The process-wide logger.
pub fn logger() -> &'static DebugLogger {
    &GLOBAL_LOGGER
}

/// Apply options to the process-wide logger.
pub fn init(options: &LoggerOptions) -> Result<(), DebugLogError> {
    logger().configure(options)
}

/// Apply `TAGLOG_*` environment settings to the process-wide logger.
pub fn init_from_env() -> Result<(), DebugLogError> {
    init(&LoggerOptions::from_env()?)
}

pub fn set_debug(enabled: bool) {
    logger().set_debug(enabled);
}

pub fn is_debug_enabled() -> bool {
    logger().is_debug_enabled()
}

pub fn set_microsecond_timestamps(enabled: bool) {
    logger().set_microsecond_timestamps(enabled);
}

pub fn set_file<P: AsRef<Path>>(path: P) -> Result<(), DebugLogError> {
    logger().set_file(path)
}

pub fn set_stdout() {
    logger().set_stdout();
}

pub fn set_stderr() {
    logger().set_stderr();
}

/// Close any owned file and restore standard output.
pub fn deinit() {
    logger().deinit();
}
