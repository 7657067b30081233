//! Backend for the crate's own diagnostics.
//!
//! Write failures and destination switches are reported through the `log`
//! facade. Binaries pick a backend; [`init_logger`] installs `env_logger`, so
//! `RUST_LOG=taglog_rs=debug` shows them on standard error.

/// Initializes the diagnostic logger with the `env_logger` crate.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger() {
    let _ = env_logger::try_init();
}
