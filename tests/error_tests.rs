//! Unit tests for the `DebugLogError` enum and its `Display` implementation.

use std::error::Error;
use std::io;
use std::path::PathBuf;
use taglog_rs::DebugLogError;

/// Tests that the `FileOpen` variant names the path and keeps its source.
#[test]
fn test_file_open_error() {
    let err = DebugLogError::FileOpen {
        path: PathBuf::from("/root/out.log"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "failed to open file '/root/out.log': denied");
    assert!(err.source().is_some());
}

/// Tests that the `ShortWrite` variant is correctly formatted.
#[test]
fn test_short_write_error() {
    let err = DebugLogError::ShortWrite {
        written: 3,
        expected: 10,
    };
    assert_eq!(err.to_string(), "3 / 10 bytes written");
}

/// Tests that the `Write` variant is correctly formatted.
#[test]
fn test_write_error() {
    let err = DebugLogError::Write(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
    assert_eq!(err.to_string(), "failed to write log (pipe closed)");
}

/// Tests that the `Tagged` variant displays only its message.
#[test]
fn test_tagged_error() {
    let err = DebugLogError::Tagged("main.rs:run[3]: boom".to_string());
    assert_eq!(err.to_string(), "main.rs:run[3]: boom");
    assert_eq!(err.tagged_message(), Some("main.rs:run[3]: boom"));
}

/// Tests that the `InvalidHex` variant is correctly formatted.
#[test]
fn test_invalid_hex_error() {
    let err = DebugLogError::InvalidHex("Odd number of digits".to_string());
    assert_eq!(err.to_string(), "Invalid hexadecimal string: Odd number of digits");
    assert_eq!(err.tagged_message(), None);
}
