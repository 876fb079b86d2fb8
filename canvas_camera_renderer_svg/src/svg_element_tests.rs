use canvas_camera::canvas::{CameraState, Error};
use super::*;

// ============================================================================
// bounding_box
// ============================================================================

#[test]
fn test_rect_reports_own_attributes() {
    let element = SvgElement::rect("frame1", 10.0, 20.0, 300.0, 200.0);
    assert_eq!(element.bounding_box().unwrap(), BoundingBox::new(10.0, 20.0, 300.0, 200.0));
    assert_eq!(element.id(), "frame1");
}

#[test]
fn test_polyline_reports_point_bounds() {
    let element = SvgElement::polyline("outline", vec![
        DVec2::new(5.0, 5.0),
        DVec2::new(-5.0, 15.0),
        DVec2::new(25.0, 0.0),
    ]);
    assert_eq!(element.bounding_box().unwrap(), BoundingBox::new(-5.0, 0.0, 30.0, 15.0));
}

#[test]
fn test_empty_polyline_fails() {
    let element = SvgElement::polyline("empty", Vec::new());
    assert!(matches!(element.bounding_box(), Err(Error::BackendError(_))));
}

// ============================================================================
// current_transform
// ============================================================================

#[test]
fn test_nested_transform_accumulates() {
    let element = SvgElement::rect("frame", 0.0, 0.0, 10.0, 10.0)
        .with_transform(Matrix2D::translation(5.0, 0.0))
        .under(&Matrix2D::similarity(2.0, 0.0, 100.0, 0.0));

    let transform = element.current_transform().unwrap();
    // translate first, then the parent's scale and offset
    assert_eq!(transform.transform_point(DVec2::ZERO), DVec2::new(110.0, 0.0));
}

#[test]
fn test_camera_state_from_rotated_frame() {
    let element = SvgElement::rect("frame", 0.0, 0.0, 40.0, 30.0)
        .with_transform(Matrix2D::similarity(0.5, 90.0, 0.0, 0.0));

    let mut state = CameraState::new(0.0, 0.0, 1.0, 1.0, 0.0, false).unwrap();
    state.set_at_element(&element).unwrap();

    assert!((state.width() - 20.0).abs() < 1e-9);
    assert!((state.height() - 15.0).abs() < 1e-9);
    assert!((state.angle() - 90.0).abs() < 1e-9);
    // local center (20, 15) rotated a quarter turn and halved
    assert!((state.cx() + 7.5).abs() < 1e-9);
    assert!((state.cy() - 10.0).abs() < 1e-9);
}
