/// TransformSink trait - renderer-side transform target
///
/// Each Camera owns exactly one sink for its lifetime: the clip rectangle
/// and one transform group per scene layer bound to that camera. The sink
/// receives the full transform after every camera mutation and must apply
/// the clip geometry to the clip rectangle and the content transform to
/// every group it owns.

use crate::error::Result;
use super::view_transform::ViewTransform;

pub trait TransformSink {
    fn apply(&mut self, transform: &ViewTransform) -> Result<()>;
}

/// Sink that discards every transform.
///
/// Useful for cameras driven purely for their geometry (thumbnails,
/// hit-testing) where nothing is rendered.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TransformSink for NullSink {
    fn apply(&mut self, _transform: &ViewTransform) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Camera, CameraConfig, CameraState, ViewportHandle};

    #[test]
    fn test_null_sink_drives_geometry_only_camera() {
        let state = CameraState::new(0.0, 0.0, 50.0, 50.0, 0.0, false).unwrap();
        let mut camera = Camera::new(
            state,
            ViewportHandle::new(100.0, 100.0),
            Box::new(NullSink),
            CameraConfig::default(),
        )
        .unwrap();

        camera.zoom(2.0, 50.0, 50.0).unwrap();
        assert_eq!(camera.scale().unwrap(), 4.0);
    }
}
