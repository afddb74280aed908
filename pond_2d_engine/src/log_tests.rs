//! Unit tests for the logging types and DefaultLogger plumbing.
//!
//! IMPORTANT: the global logger is shared across all tests.
//! Tests that replace it are marked #[serial].

use super::*;
use crate::engine::Engine;
use std::sync::{Arc, Mutex};
use serial_test::serial;

/// Test logger that captures entries for verification.
///
/// Only entries tagged with the test source are recorded: other tests
/// run in parallel and may log through the same global logger.
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.source == "pond2d::test" {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger {
        entries: Arc::clone(&entries),
    });
    entries
}

// ============================================================================
// Severity ordering
// ============================================================================

#[test]
fn test_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

// ============================================================================
// Macro plumbing through the Engine singleton
// ============================================================================

#[test]
#[serial]
fn test_info_macro_reaches_logger() {
    let entries = install_capture();

    crate::engine_info!("pond2d::test", "hello {}", 42);

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].source, "pond2d::test");
    assert_eq!(captured[0].message, "hello 42");
    assert!(captured[0].file.is_none());
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_error_macro_carries_file_and_line() {
    let entries = install_capture();

    crate::engine_error!("pond2d::test", "boom");

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    assert!(captured[0].file.is_some());
    assert!(captured[0].line.is_some());
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_all_severity_macros() {
    let entries = install_capture();

    crate::engine_trace!("pond2d::test", "t");
    crate::engine_debug!("pond2d::test", "d");
    crate::engine_info!("pond2d::test", "i");
    crate::engine_warn!("pond2d::test", "w");
    crate::engine_error!("pond2d::test", "e");

    let captured = entries.lock().unwrap();
    let severities: Vec<LogSeverity> = captured.iter().map(|e| e.severity).collect();
    assert_eq!(
        severities,
        vec![
            LogSeverity::Trace,
            LogSeverity::Debug,
            LogSeverity::Info,
            LogSeverity::Warn,
            LogSeverity::Error,
        ]
    );
    drop(captured);

    Engine::reset_logger();
}
