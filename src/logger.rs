//! # Debug Logger
//!
//! The DebugLogger is the shared logger configuration: the debug gate, the
//! timestamp precision and the [`OutputSink`]. It is a cheap `Clone` handle, so
//! independent instances can be created per test or per subsystem while the
//! [`global`](crate::global) module offers one process-wide default.
//!
//! Print entry points are normally reached through the crate macros
//! ([`debug_printf!`](crate::debug_printf), [`log_hex_dump!`](crate::log_hex_dump),
//! ...), which resolve the caller tag at the call site. Debug-gated entry
//! points take the tag as a closure and only call it once the gate is open.
//!
//! Write failures never reach the caller. They are reported through the `log`
//! facade at error level when a backend has that level enabled (see
//! [`init_logger`](crate::init_logger)), and printed to standard error
//! otherwise.

use crate::caller::CallerTag;
use crate::config::{LoggerOptions, OutputTarget};
use crate::error::DebugLogError;
use crate::output::OutputSink;
use crate::timestamp::{timestamped_lines, Precision};
use crate::util::hex::hex_dump_rows;
use chrono::Local;
use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct Inner {
    debug: AtomicBool,
    microseconds: AtomicBool,
    sink: Mutex<OutputSink>,
}

/// Shared handle to a logger configuration and its output destination.
///
/// A failed write is reported with `log::error!`. Without a `log` backend
/// (install one with [`init_logger`](crate::init_logger)) the report goes to
/// standard error instead.
#[derive(Debug, Clone)]
pub struct DebugLogger {
    inner: Arc<Inner>,
}

/// Describe a failed write and the destination it was aimed at.
fn write_failure_report(err: &DebugLogError, target: &OutputTarget) -> String {
    format!("{err} ({target})")
}

/// Send a write failure to the `log` facade, or to stderr without a backend.
fn report_write_failure(err: &DebugLogError, target: &OutputTarget) {
    let report = write_failure_report(err, target);
    if log::log_enabled!(log::Level::Error) {
        log::error!("{report}");
    } else {
        eprintln!("{report}");
    }
}

/// Compose `"<tag>: <message>"`.
pub fn tagged_message(tag: &CallerTag, args: fmt::Arguments<'_>) -> String {
    format!("{tag}: {args}")
}

impl DebugLogger {
    /// Creates a logger with debug output off, microsecond timestamps and
    /// standard output as destination.
    pub fn new() -> Self {
        Self::from_sink(&LoggerOptions::default(), OutputSink::new())
    }

    /// Creates a logger from options, opening the target file if one is set.
    pub fn with_options(options: &LoggerOptions) -> Result<Self, DebugLogError> {
        let sink = OutputSink::open(&options.target)?;
        Ok(Self::from_sink(options, sink))
    }

    fn from_sink(options: &LoggerOptions, sink: OutputSink) -> Self {
        Self {
            inner: Arc::new(Inner {
                debug: AtomicBool::new(options.debug),
                microseconds: AtomicBool::new(options.microseconds),
                sink: Mutex::new(sink),
            }),
        }
    }

    /// Apply options to an existing logger.
    ///
    /// The flags are always applied; the destination is switched only if the
    /// target can be opened.
    pub fn configure(&self, options: &LoggerOptions) -> Result<(), DebugLogError> {
        self.set_debug(options.debug);
        self.set_microsecond_timestamps(options.microseconds);
        self.sink().set_target(&options.target)
    }

    pub fn set_debug(&self, enabled: bool) {
        self.inner.debug.store(enabled, Ordering::Relaxed);
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.inner.debug.load(Ordering::Relaxed)
    }

    /// Toggle microsecond precision in emitted timestamps.
    pub fn set_microsecond_timestamps(&self, enabled: bool) {
        self.inner.microseconds.store(enabled, Ordering::Relaxed);
    }

    pub fn microsecond_timestamps(&self) -> bool {
        self.inner.microseconds.load(Ordering::Relaxed)
    }

    /// Send output to `path`, created or truncated. On failure the current
    /// destination stays active.
    pub fn set_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DebugLogError> {
        self.sink().set_file(path)
    }

    pub fn set_stdout(&self) {
        self.sink().set_stdout();
    }

    pub fn set_stderr(&self) {
        self.sink().set_stderr();
    }

    /// Close any owned file and restore standard output.
    pub fn deinit(&self) {
        self.sink().deinit();
    }

    /// The active destination.
    pub fn target(&self) -> OutputTarget {
        self.sink().target()
    }

    fn sink(&self) -> MutexGuard<'_, OutputSink> {
        // A panic mid-write leaves the sink usable.
        self.inner
            .sink
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn precision(&self) -> Precision {
        Precision::from_micros(self.microsecond_timestamps())
    }

    /// Timestamp `text` and write it line by line, reporting failures.
    fn emit(&self, sink: &mut OutputSink, text: &str) {
        let rendered = timestamped_lines(text, &Local::now(), self.precision());
        for line in rendered.split_inclusive('\n') {
            if let Err(e) = sink.write(line) {
                report_write_failure(&e, &sink.target());
            }
        }
    }

    /// Write a timestamped message without a caller tag.
    pub fn print(&self, text: &str) {
        let mut sink = self.sink();
        self.emit(&mut sink, text);
    }

    /// Write `"<tag>: <message>"` if the debug gate is open.
    ///
    /// `tag` is not called when the gate is closed.
    pub fn debug_print<F>(&self, tag: F, args: fmt::Arguments<'_>)
    where
        F: FnOnce() -> CallerTag,
    {
        if !self.is_debug_enabled() {
            return;
        }
        self.log_print(tag(), args);
    }

    /// Write `"<tag>: <message>"` regardless of the debug gate.
    pub fn log_print(&self, tag: CallerTag, args: fmt::Arguments<'_>) {
        let text = tagged_message(&tag, args);
        let mut sink = self.sink();
        self.emit(&mut sink, &text);
    }

    /// Hex-dump `data` under a `"<tag>: <label>"` header if the debug gate is open.
    pub fn debug_hex_dump<F>(&self, tag: F, label: &str, data: &[u8])
    where
        F: FnOnce() -> CallerTag,
    {
        if !self.is_debug_enabled() {
            return;
        }
        self.log_hex_dump(tag(), label, data);
    }

    /// Hex-dump `data` under a `"<tag>: <label>"` header.
    ///
    /// Each row is written as its own tab-indented, timestamped line. The sink
    /// stays locked for the whole dump, so rows from one call are contiguous.
    pub fn log_hex_dump(&self, tag: CallerTag, label: &str, data: &[u8]) {
        let mut sink = self.sink();
        self.emit(&mut sink, &format!("{tag}: {label}"));
        for row in hex_dump_rows(data) {
            self.emit(&mut sink, &format!("\t{row}"));
        }
    }

    /// Pretty-print `value` (`{:#?}`) under a caller tag if the debug gate is open.
    pub fn debug_pretty<F, T>(&self, tag: F, value: &T)
    where
        F: FnOnce() -> CallerTag,
        T: fmt::Debug + ?Sized,
    {
        if !self.is_debug_enabled() {
            return;
        }
        self.log_print(tag(), format_args!("{value:#?}"));
    }
}

impl Default for DebugLogger {
    fn default() -> Self {
        Self::new()
    }
}
