//! # Logging Macros
//!
//! Every macro resolves the caller tag at its own expansion site. Each has two
//! forms: `logger: <expr>, ...` targets an explicit
//! [`DebugLogger`](crate::DebugLogger), and the bare form targets the
//! process-wide logger from [`global`](crate::global).
//!
//! ```rust
//! use taglog_rs::{log_printf, DebugLogger};
//!
//! let logger = DebugLogger::new();
//! log_printf!(logger: logger, "connected to {}", "10.0.0.1");
//! ```

/// Log a caller-tagged message if the debug gate is open.
///
/// Nothing is formatted and no caller tag is resolved while the gate is closed.
#[macro_export]
macro_rules! debug_printf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.debug_print(|| $crate::caller_tag!(), ::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::debug_printf!(logger: $crate::global::logger(), $($arg)+)
    };
}

/// Log a caller-tagged message unconditionally.
#[macro_export]
macro_rules! log_printf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.log_print($crate::caller_tag!(), ::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::log_printf!(logger: $crate::global::logger(), $($arg)+)
    };
}

/// Build `"<tag>: <message>"` without writing it.
///
/// ```rust
/// fn check() -> String {
///     taglog_rs::format_for_return!("x={}", 5)
/// }
///
/// let msg = check();
/// assert!(msg.contains(":check["), "{msg}");
/// assert!(msg.ends_with("]: x=5"), "{msg}");
/// ```
#[macro_export]
macro_rules! format_for_return {
    ($($arg:tt)+) => {
        $crate::logger::tagged_message(&$crate::caller_tag!(), ::core::format_args!($($arg)+))
    };
}

/// Build a [`DebugLogError::Tagged`](crate::DebugLogError::Tagged) carrying a
/// caller-tagged message.
#[macro_export]
macro_rules! format_for_error {
    ($($arg:tt)+) => {
        $crate::error::DebugLogError::Tagged($crate::format_for_return!($($arg)+))
    };
}

/// Hex-dump bytes under a caller-tagged label if the debug gate is open.
#[macro_export]
macro_rules! debug_hex_dump {
    (logger: $logger:expr, $label:expr, $data:expr $(,)?) => {
        $logger.debug_hex_dump(
            || $crate::caller_tag!(),
            ::core::convert::AsRef::<str>::as_ref(&$label),
            ::core::convert::AsRef::<[u8]>::as_ref(&$data),
        )
    };
    ($label:expr, $data:expr $(,)?) => {
        $crate::debug_hex_dump!(logger: $crate::global::logger(), $label, $data)
    };
}

/// Hex-dump bytes under a caller-tagged label unconditionally.
#[macro_export]
macro_rules! log_hex_dump {
    (logger: $logger:expr, $label:expr, $data:expr $(,)?) => {
        $logger.log_hex_dump(
            $crate::caller_tag!(),
            ::core::convert::AsRef::<str>::as_ref(&$label),
            ::core::convert::AsRef::<[u8]>::as_ref(&$data),
        )
    };
    ($label:expr, $data:expr $(,)?) => {
        $crate::log_hex_dump!(logger: $crate::global::logger(), $label, $data)
    };
}

/// Pretty-print a value (`{:#?}`) under a caller tag if the debug gate is open.
#[macro_export]
macro_rules! debug_pretty {
    (logger: $logger:expr, $value:expr $(,)?) => {
        $logger.debug_pretty(|| $crate::caller_tag!(), &$value)
    };
    ($value:expr $(,)?) => {
        $crate::debug_pretty!(logger: $crate::global::logger(), $value)
    };
}
