//! Unit tests for log.rs
//!
//! Tests LogSeverity, LogEntry formatting, DefaultLogger, the global logger
//! and the severity filter.
//!
//! IMPORTANT: the logger and severity filter are process-wide.
//! Tests touching them are marked #[serial].

use crate::log::{self, Logger, LogEntry, LogSeverity, DefaultLogger, LogFacadeLogger};
use serial_test::serial;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

// ============================================================================
// TEST HELPERS
// ============================================================================

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    log::set_logger(CaptureLogger { entries: entries.clone() });
    entries
}

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "galaxy3d::PassChain".to_string(),
        message: "resized to 800x600".to_string(),
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
fn test_log_severity_parse() {
    assert_eq!(LogSeverity::parse("trace"), Some(LogSeverity::Trace));
    assert_eq!(LogSeverity::parse(" INFO "), Some(LogSeverity::Info));
    assert_eq!(LogSeverity::parse("warning"), Some(LogSeverity::Warn));
    assert_eq!(LogSeverity::parse("Error"), Some(LogSeverity::Error));
    assert_eq!(LogSeverity::parse("loud"), None);
}

// ============================================================================
// FORMAT TESTS
// ============================================================================

#[test]
fn test_format_entry_without_location() {
    let text = log::format_entry(&entry(LogSeverity::Info, None, None));
    assert!(text.contains("[INFO ]"));
    assert!(text.contains("[galaxy3d::PassChain]"));
    assert!(text.ends_with("resized to 800x600"));
}

#[test]
fn test_format_entry_with_location() {
    let text = log::format_entry(&entry(LogSeverity::Error, Some("pass_chain.rs"), Some(42)));
    assert!(text.contains("[ERROR]"));
    assert!(text.ends_with("(pass_chain.rs:42)"));
}

// ============================================================================
// LOGGER IMPLEMENTATIONS
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
        logger.log(&entry(severity, None, None));
        logger.log(&entry(severity, Some("test.rs"), Some(7)));
    }
}

#[test]
fn test_facade_logger_does_not_panic_without_backend() {
    let logger = LogFacadeLogger;
    logger.log(&entry(LogSeverity::Warn, None, None));
    logger.log(&entry(LogSeverity::Error, Some("test.rs"), Some(1)));
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
    assert_send_sync::<LogFacadeLogger>();
}

// ============================================================================
// GLOBAL LOGGER TESTS
// ============================================================================

#[test]
#[serial]
fn test_global_logger_receives_macro_output() {
    let entries = install_capture();
    log::set_min_severity(LogSeverity::Trace);

    crate::engine_info!("galaxy3d::test", "hello {}", 3);
    crate::engine_error!("galaxy3d::test", "boom");

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].message, "hello 3");
        assert!(captured[0].file.is_none());
        assert_eq!(captured[1].severity, LogSeverity::Error);
        assert!(captured[1].file.is_some());
        assert!(captured[1].line.is_some());
    }

    log::set_min_severity(LogSeverity::Debug);
    log::reset_logger();
}

#[test]
#[serial]
fn test_min_severity_filters_entries() {
    let entries = install_capture();
    log::set_min_severity(LogSeverity::Warn);
    assert_eq!(log::min_severity(), LogSeverity::Warn);

    crate::engine_debug!("galaxy3d::test", "dropped");
    crate::engine_info!("galaxy3d::test", "dropped too");
    crate::engine_warn!("galaxy3d::test", "kept");

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].message, "kept");
    }

    log::set_min_severity(LogSeverity::Debug);
    log::reset_logger();
}
