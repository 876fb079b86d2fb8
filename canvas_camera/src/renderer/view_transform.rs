/// ViewTransform - the numeric description a Camera hands to its sink.
///
/// The content transform is always composed in the same order:
/// scale, then translate, then rotate about the camera center. Written as
/// an SVG transform list this is `scale(s) translate(tx, ty) rotate(a, cx, cy)`.
/// How the numbers are serialized is up to the sink.

use glam::{DAffine2, DVec2};

/// Clip rectangle in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClipRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Uniform fit-inside scale factor
    pub scale: f64,
    /// Translation in pre-scale (scene) units
    pub translate: DVec2,
    /// Rotation in degrees (the negated camera angle)
    pub rotate: f64,
    /// Rotation pivot in scene units (the camera center)
    pub rotate_center: DVec2,
    /// Clip rectangle geometry
    pub clip: ClipRect,
}

impl ViewTransform {
    /// Rotation about `rotate_center` alone.
    pub fn rotation_affine(&self) -> DAffine2 {
        DAffine2::from_translation(self.rotate_center)
            * DAffine2::from_angle(self.rotate.to_radians())
            * DAffine2::from_translation(-self.rotate_center)
    }

    /// Full scene-to-screen matrix: `scale * translate * rotate_about_center`.
    pub fn to_affine(&self) -> DAffine2 {
        DAffine2::from_scale(DVec2::splat(self.scale))
            * DAffine2::from_translation(self.translate)
            * self.rotation_affine()
    }
}
