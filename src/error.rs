//! # Debug Logger Error Handling
//!
//! This module defines the DebugLogError enum, which represents the different error
//! types that can occur in the taglog-rs crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents the different error types that can occur in the taglog crate.
#[derive(Debug, Error)]
pub enum DebugLogError {
    /// The requested output file could not be created.
    #[error("failed to open file '{}': {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A write reached the destination only partially.
    #[error("{written} / {expected} bytes written")]
    ShortWrite { written: usize, expected: usize },

    /// The write call itself failed.
    #[error("failed to write log ({0})")]
    Write(#[source] io::Error),

    /// A caller-tagged message raised as an error value.
    #[error("{0}")]
    Tagged(String),

    /// Indicates an invalid hexadecimal string was provided.
    #[error("Invalid hexadecimal string: {0}")]
    InvalidHex(String),

    /// An environment variable held a value that is not a boolean.
    #[error("invalid value '{value}' for {var}")]
    Env { var: &'static str, value: String },
}

impl DebugLogError {
    /// Returns the tagged message when this error came from `format_for_error!`.
    pub fn tagged_message(&self) -> Option<&str> {
        match self {
            DebugLogError::Tagged(msg) => Some(msg),
            _ => None,
        }
    }
}
