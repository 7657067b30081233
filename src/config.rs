//! # Logger Configuration
//!
//! [`LoggerOptions`] describes how a [`DebugLogger`](crate::DebugLogger) starts
//! out: whether the debug gate is open, whether timestamps carry microseconds,
//! and which destination receives output. Options can be built in code or read
//! from the environment:
//!
//! | Variable        | Values                                   | Default  |
//! |-----------------|------------------------------------------|----------|
//! | `TAGLOG_DEBUG`  | `1/0`, `true/false`, `yes/no`, `on/off`  | off      |
//! | `TAGLOG_MICROS` | same as above                            | on       |
//! | `TAGLOG_OUTPUT` | `stdout`, `stderr`, or a file path       | `stdout` |

use crate::error::DebugLogError;
use std::fmt;
use std::path::PathBuf;

pub const ENV_DEBUG: &str = "TAGLOG_DEBUG";
pub const ENV_MICROS: &str = "TAGLOG_MICROS";
pub const ENV_OUTPUT: &str = "TAGLOG_OUTPUT";

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
    File(PathBuf),
}

impl OutputTarget {
    /// Parse a target name: `stdout`, `stderr`, `-` (stdout) or a file path.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "-" | "stdout" => OutputTarget::Stdout,
            "stderr" => OutputTarget::Stderr,
            path => OutputTarget::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("stdout"),
            OutputTarget::Stderr => f.write_str("stderr"),
            OutputTarget::File(path) => write!(f, "file '{}'", path.display()),
        }
    }
}

/// Initial state of a logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerOptions {
    pub debug: bool,
    pub microseconds: bool,
    pub target: OutputTarget,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            debug: false,
            microseconds: true,
            target: OutputTarget::Stdout,
        }
    }
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    pub fn microseconds(mut self, enabled: bool) -> Self {
        self.microseconds = enabled;
        self
    }

    pub fn target(mut self, target: OutputTarget) -> Self {
        self.target = target;
        self
    }

    /// Read options from `TAGLOG_*` environment variables.
    ///
    /// Unset variables keep their defaults; a variable that is set but not a
    /// recognizable boolean is an error.
    pub fn from_env() -> Result<Self, DebugLogError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DebugLogError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut options = Self::default();
        if let Some(value) = lookup(ENV_DEBUG) {
            options.debug = parse_bool(ENV_DEBUG, &value)?;
        }
        if let Some(value) = lookup(ENV_MICROS) {
            options.microseconds = parse_bool(ENV_MICROS, &value)?;
        }
        if let Some(value) = lookup(ENV_OUTPUT) {
            options.target = OutputTarget::parse(&value);
        }
        Ok(options)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, DebugLogError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(DebugLogError::Env {
            var,
            value: value.to_string(),
        }),
    }
}
