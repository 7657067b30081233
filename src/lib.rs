//! # taglog-rs - Caller-Tagged Debug Logging
//!
//! The taglog-rs crate provides small debug-logging conveniences: debug-gated
//! print macros that prefix every message with the `file:function[line]` of the
//! call site, hex dumps of byte buffers, MAC address rendering, and switching
//! output between standard output, standard error and a file.
//!
//! ## Features
//!
//! - Debug gate: `debug_*` macros cost a flag check when debug output is off
//! - Caller tags resolved at the call site, never inside this crate
//! - Timestamped lines with optional microsecond precision
//! - 16-byte-per-row hex dumps written row by row
//! - Explicit [`DebugLogger`] handles plus a process-wide default
//!
//! ## Usage
//!
//! ```rust
//! use taglog_rs::{debug_printf, log_hex_dump, DebugLogger};
//!
//! let logger = DebugLogger::new();
//! logger.set_debug(true);
//!
//! debug_printf!(logger: logger, "opening port {}", 502);
//! log_hex_dump!(logger: logger, "request", [0x68, 0x31, 0x31, 0x68]);
//! ```
//!
//! The bare macro forms go through the process-wide logger:
//!
//! ```rust,no_run
//! taglog_rs::global::set_file("trace.log").expect("open trace.log");
//! taglog_rs::log_printf!("hello {}", 1);
//! taglog_rs::global::deinit();
//! ```

pub mod caller;
pub mod config;
pub mod error;
pub mod global;
pub mod logger;
pub mod logging;
mod macros;
pub mod output;
pub mod timestamp;
pub mod util;

pub use crate::caller::CallerTag;
pub use crate::config::{LoggerOptions, OutputTarget};
pub use crate::error::DebugLogError;
pub use crate::logger::DebugLogger;
pub use crate::logging::init_logger;
pub use crate::output::OutputSink;
pub use crate::timestamp::{timestamped_lines, Precision};
pub use crate::util::hex::{format_hex_dump, format_mac, hex_dump_rows};
