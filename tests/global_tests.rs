//! Tests for the process-wide logger.
//!
//! Everything runs in a single test because the global logger is shared by
//! every test in this binary.

use std::fs;
use taglog_rs::{debug_printf, format_for_error, global, log_printf, LoggerOptions, OutputTarget};

fn load_config() -> Result<(), taglog_rs::DebugLogError> {
    Err(format_for_error!("missing key {}", "port"))
}

#[test]
fn test_global_logger_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("global.log");

    assert!(!global::is_debug_enabled());
    assert_eq!(global::logger().target(), OutputTarget::Stdout);

    global::set_file(&path).unwrap();
    debug_printf!("gated {}", 0);
    global::set_debug(true);
    debug_printf!("gated {}", 1);
    global::set_debug(false);

    let err = load_config().unwrap_err();
    log_printf!("{err}");

    global::set_microsecond_timestamps(false);
    log_printf!("seconds");
    global::deinit();
    assert_eq!(global::logger().target(), OutputTarget::Stdout);

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3, "{contents}");
    assert!(lines[0].contains("global_tests.rs:test_global_logger_lifecycle["));
    assert!(lines[0].ends_with("gated 1"));
    assert!(lines[1].contains("global_tests.rs:load_config["));
    assert!(lines[1].ends_with("missing key port"));
    assert_eq!(&lines[2][19..20], " ");

    let bad = dir.path().join("missing").join("x.log");
    let options = LoggerOptions::new().debug(true).target(OutputTarget::File(bad));
    assert!(global::init(&options).is_err());
    assert!(global::is_debug_enabled());
    assert_eq!(global::logger().target(), OutputTarget::Stdout);

    global::set_stderr();
    assert_eq!(global::logger().target(), OutputTarget::Stderr);
    global::deinit();
    global::set_debug(false);
    global::set_microsecond_timestamps(true);
}
