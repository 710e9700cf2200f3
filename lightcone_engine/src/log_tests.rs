//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, and DefaultLogger.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

fn create_entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "lightcone::SpotLight".to_string(),
        message: "projection recomputed".to_string(),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_u8_round_trip() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(LogSeverity::from_u8(severity as u8), severity);
    }
}

#[test]
fn test_log_severity_from_out_of_range_u8_is_error() {
    assert_eq!(LogSeverity::from_u8(200), LogSeverity::Error);
}

#[test]
fn test_log_severity_debug() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Warn), "Warn");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_creation_without_file_line() {
    let entry = create_entry(LogSeverity::Info, None, None);

    assert_eq!(entry.severity, LogSeverity::Info);
    assert_eq!(entry.source, "lightcone::SpotLight");
    assert_eq!(entry.message, "projection recomputed");
    assert!(entry.file.is_none());
    assert!(entry.line.is_none());
}

#[test]
fn test_log_entry_clone() {
    let entry1 = create_entry(LogSeverity::Warn, Some("spot_light.rs"), Some(10));
    let entry2 = entry1.clone();

    assert_eq!(entry1.severity, entry2.severity);
    assert_eq!(entry1.source, entry2.source);
    assert_eq!(entry1.file, entry2.file);
    assert_eq!(entry1.line, entry2.line);
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;

    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        // Just verify it doesn't panic, with and without location
        logger.log(&create_entry(severity, None, None));
        logger.log(&create_entry(severity, Some("light_scene.rs"), Some(42)));
    }
}

#[test]
fn test_format_entry_plain_without_location() {
    let line = DefaultLogger::format_entry(&create_entry(LogSeverity::Info, None, None), false);

    assert!(line.contains("[INFO ]"));
    assert!(line.contains("[lightcone::SpotLight]"));
    assert!(line.ends_with("projection recomputed"));
}

#[test]
fn test_format_entry_plain_with_location() {
    let line = DefaultLogger::format_entry(
        &create_entry(LogSeverity::Error, Some("light_scene.rs"), Some(7)),
        false,
    );

    assert!(line.contains("[ERROR]"));
    assert!(line.ends_with("(light_scene.rs:7)"));
}

#[test]
fn test_format_entry_plain_timestamp_shape() {
    let line = DefaultLogger::format_entry(&create_entry(LogSeverity::Debug, None, None), false);

    // "[YYYY-MM-DD HH:MM:SS.mmm]" is 25 characters including brackets
    let timestamp = &line[..25];
    assert!(timestamp.starts_with('['));
    assert!(timestamp.ends_with(']'));
    assert_eq!(&timestamp[5..6], "-");
    assert_eq!(&timestamp[20..21], ".");
}

#[test]
fn test_format_entry_colored_keeps_layout() {
    let entry = create_entry(LogSeverity::Warn, Some("light_scene.rs"), Some(7));

    let plain = DefaultLogger::format_entry(&entry, false);
    let colored = DefaultLogger::format_entry(&entry, true);

    // Same layout; colors only add escape sequences around fields
    assert!(colored.len() >= plain.len());
    assert!(colored.contains("projection recomputed"));
    assert!(colored.ends_with("(light_scene.rs:7)"));
    assert_eq!(&colored[..25], &plain[..25]);
}

// ============================================================================
// LOGGER TRAIT TESTS
// ============================================================================

struct CountingLogger {
    logged_count: std::sync::Mutex<usize>,
}

impl Logger for CountingLogger {
    fn log(&self, _entry: &LogEntry) {
        *self.logged_count.lock().unwrap() += 1;
    }
}

#[test]
fn test_custom_logger_implementation() {
    let logger = CountingLogger { logged_count: std::sync::Mutex::new(0) };
    let entry = create_entry(LogSeverity::Info, None, None);

    logger.log(&entry);
    logger.log(&entry);

    assert_eq!(*logger.logged_count.lock().unwrap(), 2);
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
}
