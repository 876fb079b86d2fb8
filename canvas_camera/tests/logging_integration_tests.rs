//! Integration tests for camera logging
//!
//! These tests swap the global logger and check what cameras, transitions
//! and the SVG backend report through it.
//!
//! Run with: cargo test --test logging_integration_tests

use canvas_camera::canvas::{
    Camera, CameraConfig, CameraState, CameraTransition, Engine, SizePolicy, ViewportHandle,
};
use canvas_camera::canvas::log::{Logger, LogEntry, LogSeverity};
use canvas_camera_renderer_svg::{SvgConfig, SvgPath, SvgTransformTarget};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn create_camera(config: CameraConfig) -> (Camera, SvgTransformTarget) {
    let target = SvgTransformTarget::new("clip", SvgConfig::default());
    target.add_layer("scene");
    let state = CameraState::new(50.0, 50.0, 100.0, 100.0, 0.0, false).unwrap();
    let camera = Camera::new(state, ViewportHandle::new(100.0, 100.0), Box::new(target.clone()), config)
        .unwrap();
    (camera, target)
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_rejected_zoom_logs_error_with_location() {
    let (mut camera, _target) = create_camera(CameraConfig::default());
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    assert!(camera.zoom(-1.0, 0.0, 0.0).is_err());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        let entry = &captured[0];
        assert_eq!(entry.severity, LogSeverity::Error);
        assert_eq!(entry.source, "canvas::Camera");
        assert!(entry.message.contains("zoom factor"));
        assert!(entry.file.is_some());
        assert!(entry.line.is_some());
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_clamped_zoom_logs_warning() {
    let config = CameraConfig::default()
        .with_frame_size_bounds(10.0, 1000.0)
        .with_size_policy(SizePolicy::Clamp);
    let (mut camera, _target) = create_camera(config);
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    camera.zoom(50.0, 50.0, 50.0).unwrap();

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Warn);
        assert!(captured[0].file.is_none());
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_dropped_frame_is_logged() {
    let (mut camera, _target) = create_camera(CameraConfig::default());
    let transition = CameraTransition::new(
        CameraState::new(0.0, 0.0, 100.0, 100.0, 0.0, false).unwrap(),
        CameraState::new(0.0, 0.0, 200.0, 200.0, 0.0, false).unwrap(),
    )
    .with_relative_zoom(-0.2);
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    assert!(!transition.apply(0.5, &mut camera));

    {
        let captured = entries.lock().unwrap();
        let sources: Vec<&str> = captured.iter().map(|e| e.source.as_str()).collect();
        assert_eq!(sources, vec!["canvas::CameraState", "canvas::CameraTransition"]);
        assert!(captured.iter().all(|e| e.severity == LogSeverity::Error));
        assert!(captured[1].message.contains("progress 0.5"));
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_trace_is_filtered_by_default() {
    let (mut camera, _target) = create_camera(CameraConfig::default());
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    camera.drag(5.0, 5.0).unwrap();
    assert!(entries.lock().unwrap().is_empty());

    Engine::set_min_severity(LogSeverity::Trace);
    camera.drag(5.0, 5.0).unwrap();
    {
        let captured = entries.lock().unwrap();
        assert!(captured.iter().any(|e| e.source == "canvas::Camera" && e.severity == LogSeverity::Trace));
        assert!(captured.iter().any(|e| e.source == "canvas::svg::Target"));
    }

    Engine::reset_logger();
    assert_eq!(Engine::min_severity(), LogSeverity::Info);
}

#[test]
#[serial]
fn test_integration_malformed_path_is_logged() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    assert!(SvgPath::parse("M 0 0 L 1 x").is_err());
    assert!(SvgPath::parse("M 0 0 Q 1 1 2 2").is_ok());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].source, "canvas::svg::Path");
        assert_eq!(captured[0].severity, LogSeverity::Error);
        assert!(captured[0].message.contains("'M 0 0 L 1 x'"));
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_closed_target_logs_info() {
    let (mut camera, target) = create_camera(CameraConfig::default());
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    target.close();
    target.close();
    assert!(camera.drag(1.0, 0.0).is_err());

    {
        let captured = entries.lock().unwrap();
        let info: Vec<&LogEntry> = captured.iter().filter(|e| e.severity == LogSeverity::Info).collect();
        assert_eq!(info.len(), 1);
        assert_eq!(info[0].source, "canvas::svg::Target");
        assert!(info[0].message.contains("'clip' closed"));
    }

    Engine::reset_logger();
}
