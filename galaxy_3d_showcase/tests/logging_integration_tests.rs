//! Integration tests for the logging system
//!
//! These tests swap the global logger, so they run serially.
//!
//! Run with: cargo test --test logging_integration_tests


use galaxy_3d_showcase::galaxy3d::demos::PlanetsExample;
use galaxy_3d_showcase::galaxy3d::example::ExampleDriver;
use galaxy_3d_showcase::galaxy3d::log::LogSeverity;
use galaxy_3d_showcase::galaxy3d::post::PassChain;
use galaxy_3d_showcase::galaxy3d::render::HeadlessRenderer;
use galaxy_3d_showcase::log::{log, reset_logger, set_logger, set_min_severity};
use serial_test::serial;
use test_utils::{CaptureLogger, TestHost};

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_lifecycle_violation_is_logged_with_location() {
    let (logger, entries) = CaptureLogger::new();
    set_logger(logger);
    set_min_severity(LogSeverity::Debug);

    let mut host = TestHost::new();
    let mut driver = ExampleDriver::new(Box::new(PlanetsExample::new()), 1280, 720);
    assert!(driver.render(&mut host.host()).is_err());

    {
        let entries = entries.lock().unwrap();
        let error = entries
            .iter()
            .find(|e| e.severity == LogSeverity::Error)
            .expect("an error entry");
        assert_eq!(error.source, "galaxy3d::ExampleDriver");
        assert!(error.file.is_some());
        assert!(error.line.is_some());
    }

    reset_logger();
}

#[test]
#[serial]
fn test_integration_stale_completion_is_logged_not_raised() {
    let (logger, entries) = CaptureLogger::new();
    set_logger(logger);
    set_min_severity(LogSeverity::Debug);

    let mut host = TestHost::new();
    let mut driver = ExampleDriver::new(Box::new(PlanetsExample::new()), 1280, 720);
    let mut other = ExampleDriver::new(Box::new(galaxy_3d_showcase::galaxy3d::demos::GltfExample::new()), 1280, 720);
    other.initialize(&mut host.host()).unwrap();
    let foreign = host.loader.success(0);
    other.destroy(&mut host.host());
    driver.initialize(&mut host.host()).unwrap();

    assert!(!driver.deliver(&mut host.host(), foreign));

    {
        let entries = entries.lock().unwrap();
        assert!(entries.iter().any(|e| e.severity == LogSeverity::Debug
            && e.source == "galaxy3d::ExampleDriver"
            && e.message.contains("Dropping completion")));
        assert!(entries.iter().all(|e| e.severity != LogSeverity::Error));
    }

    reset_logger();
}

#[test]
#[serial]
fn test_integration_degenerate_chain_resize_is_a_warning() {
    let (logger, entries) = CaptureLogger::new();
    set_logger(logger);
    set_min_severity(LogSeverity::Debug);

    let mut renderer = HeadlessRenderer::new();
    let mut chain = PassChain::new(640, 480);
    assert!(chain.resize(&mut renderer, 0, 480).is_err());
    assert_eq!(chain.size(), (640, 480));

    {
        let entries = entries.lock().unwrap();
        let chain_entries: Vec<_> = entries
            .iter()
            .filter(|e| e.source == "galaxy3d::PassChain")
            .collect();
        assert_eq!(chain_entries.len(), 1);
        assert_eq!(chain_entries[0].severity, LogSeverity::Warn);
        assert!(chain_entries[0].message.contains("0x480"));
    }

    reset_logger();
}

#[test]
#[serial]
fn test_integration_min_severity_filters_entries() {
    let (logger, entries) = CaptureLogger::new();
    set_logger(logger);
    set_min_severity(LogSeverity::Warn);

    log(LogSeverity::Info, "test::module", "dropped".to_string());
    log(LogSeverity::Warn, "test::module", "kept".to_string());

    {
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "kept");
    }

    set_min_severity(LogSeverity::Debug);
    reset_logger();
}
