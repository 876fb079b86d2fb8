/// CameraState - geometric state of a view on the canvas.
///
/// A state is the rectangle of scene coordinates considered "in view":
/// its center, its size, its rotation and whether rendering is clipped to
/// it. States are plain values. The presentation layer keeps one per frame
/// and layer, and builds intermediate ones with `interpolate` on every
/// animation tick.
///
/// Invariants:
/// - `width > 0 && height > 0`, both finite. Every mutator that could break
///   this returns `Error::InvalidState` and leaves the state untouched.
/// - `angle` is in [-180, 180) after `set_angle`. `interpolate` stores the
///   raw interpolated angle; a Camera normalizes it when the state is pushed.

use glam::DVec2;
use crate::error::Result;
use crate::geometry::{BoundingBox, Matrix2D};
use crate::renderer::{ElementQuery, PathSampler};
use crate::{camera_bail, camera_trace};
use super::interpolation::{angle_at, lerp, size_at};

const SOURCE: &str = "canvas::CameraState";

/// Map any angle in degrees to [-180, 180).
///
/// Uses a Euclidean remainder so negative inputs wrap the same way as
/// positive ones: `normalize_angle(a) == normalize_angle(a + 360.0 * k)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let mut wrapped = (angle + 180.0).rem_euclid(360.0);
    // rem_euclid may round up to the divisor for tiny negative inputs
    if wrapped >= 360.0 {
        wrapped = 0.0;
    }
    wrapped - 180.0
}

/// Optional inputs to `CameraState::interpolate`.
#[derive(Clone, Copy, Default)]
pub struct InterpolationParams<'a> {
    /// 0 for linear size changes, > 0 to bulge out, < 0 for the
    /// `min(u0, u1)·(1 - relative_zoom)` apex
    pub relative_zoom: f64,
    /// Guide path for the camera center
    pub path: Option<&'a dyn PathSampler>,
    /// Travel the guide path from its end to its start
    pub reverse_path: bool,
}

impl<'a> InterpolationParams<'a> {
    pub fn linear() -> Self {
        Self::default()
    }

    pub fn with_relative_zoom(mut self, relative_zoom: f64) -> Self {
        self.relative_zoom = relative_zoom;
        self
    }

    pub fn with_path(mut self, path: &'a dyn PathSampler, reverse_path: bool) -> Self {
        self.path = Some(path);
        self.reverse_path = reverse_path;
        self
    }
}

/// Offset of a view relative to a reference element.
///
/// Lets a view stay attached to an element that is later moved, scaled or
/// rotated: record the offset once, re-derive the state from the element,
/// then apply the offset again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraOffset {
    pub delta_x: f64,
    pub delta_y: f64,
    pub width_factor: f64,
    pub height_factor: f64,
    pub delta_angle: f64,
}

impl CameraOffset {
    pub const NONE: Self = Self {
        delta_x: 0.0,
        delta_y: 0.0,
        width_factor: 1.0,
        height_factor: 1.0,
        delta_angle: 0.0,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    cx: f64,
    cy: f64,
    width: f64,
    height: f64,
    angle: f64,
    clipped: bool,
}

impl CameraState {
    /// Create a validated state. The angle is normalized.
    pub fn new(cx: f64, cy: f64, width: f64, height: f64, angle: f64, clipped: bool) -> Result<Self> {
        validate_center(cx, cy)?;
        validate_size(width, height)?;
        if !angle.is_finite() {
            camera_bail!(SOURCE, InvalidState, "angle must be finite, got {}", angle);
        }
        let mut state = Self { cx, cy, width, height, angle: 0.0, clipped };
        state.set_angle(angle);
        Ok(state)
    }

    /// Default view of a coordinate space: centered on the root's bounding
    /// box, same size, no rotation, unclipped.
    pub fn from_root(root: &dyn ElementQuery) -> Result<Self> {
        let bbox = root.bounding_box()?;
        let center = bbox.center();
        Self::new(center.x, center.y, bbox.width, bbox.height, 0.0, false)
    }

    // ===== GETTERS =====

    pub fn cx(&self) -> f64 {
        self.cx
    }

    pub fn cy(&self) -> f64 {
        self.cy
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.cx, self.cy)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Rotation in degrees
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn clipped(&self) -> bool {
        self.clipped
    }

    // ===== SETTERS =====

    pub fn set_center(&mut self, cx: f64, cy: f64) -> Result<&mut Self> {
        validate_center(cx, cy)?;
        self.cx = cx;
        self.cy = cy;
        Ok(self)
    }

    pub fn set_size(&mut self, width: f64, height: f64) -> Result<&mut Self> {
        validate_size(width, height)?;
        self.width = width;
        self.height = height;
        Ok(self)
    }

    pub fn set_clipped(&mut self, clipped: bool) -> &mut Self {
        self.clipped = clipped;
        self
    }

    /// Set the rotation, normalized to [-180, 180).
    pub fn set_angle(&mut self, angle: f64) -> &mut Self {
        self.angle = normalize_angle(angle);
        self
    }

    /// Field-wise copy of `other`.
    pub fn set_from_state(&mut self, other: &CameraState) -> &mut Self {
        self.cx = other.cx;
        self.cy = other.cy;
        self.width = other.width;
        self.height = other.height;
        self.angle = other.angle;
        self.clipped = other.clipped;
        self
    }

    /// Derive the view from an element's local bounding box and its
    /// local-to-root transform.
    ///
    /// The transform is assumed to be a similarity (uniform scale, rotation,
    /// translation); shear and non-uniform scale are approximated by the
    /// length of the transformed x axis. `clipped` is left unchanged.
    pub fn set_from_element(&mut self, bbox: &BoundingBox, matrix: &Matrix2D) -> Result<&mut Self> {
        if !bbox.has_area() {
            camera_bail!(SOURCE, InvalidState,
                "element bounding box has no area: {}x{}", bbox.width, bbox.height);
        }
        if !matrix.is_finite() {
            camera_bail!(SOURCE, InvalidState, "element transform is not finite: {:?}", matrix);
        }
        let scale = matrix.scale_factor();
        if scale <= 0.0 || !scale.is_finite() {
            camera_bail!(SOURCE, InvalidState, "element transform collapses its x axis: {:?}", matrix);
        }

        let center = matrix.transform_point(bbox.center());
        let (width, height) = (bbox.width * scale, bbox.height * scale);
        validate_size(width, height)?;

        self.cx = center.x;
        self.cy = center.y;
        self.width = width;
        self.height = height;
        Ok(self.set_angle(matrix.rotation_degrees()))
    }

    /// Query an element through the renderer, then `set_from_element`.
    pub fn set_at_element(&mut self, element: &dyn ElementQuery) -> Result<&mut Self> {
        let bbox = element.bounding_box()?;
        let matrix = element.current_transform()?;
        self.set_from_element(&bbox, &matrix)
    }

    /// Set this state to the view at `progress` between `initial` and
    /// `final_state`.
    ///
    /// - Size: linear when `relative_zoom == 0`, parabolic otherwise.
    /// - Center: linear, or riding `path` while the mismatch between the
    ///   path anchors and the declared centers decays linearly.
    /// - Angle: along the shorter arc, not re-normalized.
    /// - Clip flag: `initial`'s until the transition completes.
    ///
    /// Atomic: on error `self` is unchanged.
    pub fn interpolate(
        &mut self,
        initial: &CameraState,
        final_state: &CameraState,
        progress: f64,
        params: &InterpolationParams<'_>,
    ) -> Result<&mut Self> {
        if !progress.is_finite() || !(0.0..=1.0).contains(&progress) {
            camera_bail!(SOURCE, InvalidArgument, "progress must be within [0, 1], got {}", progress);
        }
        if !params.relative_zoom.is_finite() {
            camera_bail!(SOURCE, InvalidArgument,
                "relative zoom must be finite, got {}", params.relative_zoom);
        }

        let width = size_at(initial.width, final_state.width, progress, params.relative_zoom)?;
        let height = size_at(initial.height, final_state.height, progress, params.relative_zoom)?;
        validate_size(width, height)?;

        let center = match params.path {
            None => DVec2::new(
                lerp(initial.cx, final_state.cx, progress),
                lerp(initial.cy, final_state.cy, progress),
            ),
            Some(path) => path_center(initial, final_state, progress, path, params.reverse_path)?,
        };

        self.cx = center.x;
        self.cy = center.y;
        self.width = width;
        self.height = height;
        self.angle = angle_at(initial.angle, final_state.angle, progress);
        self.clipped = if progress >= 1.0 { final_state.clipped } else { initial.clipped };

        camera_trace!(SOURCE, "t={:.4} center=({:.3}, {:.3}) size={:.3}x{:.3} angle={:.3}",
            progress, self.cx, self.cy, self.width, self.height, self.angle);
        Ok(self)
    }

    /// Offset of this view relative to the view derived from an element.
    pub fn offset_from_element(&self, bbox: &BoundingBox, matrix: &Matrix2D) -> Result<CameraOffset> {
        let mut reference = self.clone();
        reference.set_from_element(bbox, matrix)?;
        Ok(CameraOffset {
            delta_x: self.cx - reference.cx,
            delta_y: self.cy - reference.cy,
            width_factor: self.width / reference.width,
            height_factor: self.height / reference.height,
            delta_angle: self.angle - reference.angle,
        })
    }

    /// Re-apply an offset recorded by `offset_from_element`.
    pub fn apply_offset(&mut self, offset: &CameraOffset) -> Result<&mut Self> {
        let cx = self.cx + offset.delta_x;
        let cy = self.cy + offset.delta_y;
        let width = self.width * offset.width_factor;
        let height = self.height * offset.height_factor;
        validate_center(cx, cy)?;
        validate_size(width, height)?;

        self.cx = cx;
        self.cy = cy;
        self.width = width;
        self.height = height;
        let angle = self.angle + offset.delta_angle;
        Ok(self.set_angle(angle))
    }
}

/// Center riding `path`, with the anchor mismatch decaying linearly.
fn path_center(
    initial: &CameraState,
    final_state: &CameraState,
    progress: f64,
    path: &dyn PathSampler,
    reverse_path: bool,
) -> Result<DVec2> {
    let length = path.total_length();
    if !length.is_finite() || length < 0.0 {
        camera_bail!(SOURCE, InterpolationFailed, "guide path has invalid length {}", length);
    }

    let (start, end, current) = if reverse_path {
        (
            path.point_at_length(length),
            path.point_at_length(0.0),
            path.point_at_length(length * (1.0 - progress)),
        )
    } else {
        (
            path.point_at_length(0.0),
            path.point_at_length(length),
            path.point_at_length(length * progress),
        )
    };
    if !(start.is_finite() && end.is_finite() && current.is_finite()) {
        camera_bail!(SOURCE, InterpolationFailed,
            "guide path returned a non-finite point: start={:?} end={:?} current={:?}",
            start, end, current);
    }

    Ok(DVec2::new(
        current.x + lerp(initial.cx - start.x, final_state.cx - end.x, progress),
        current.y + lerp(initial.cy - start.y, final_state.cy - end.y, progress),
    ))
}

fn validate_size(width: f64, height: f64) -> Result<()> {
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        camera_bail!(SOURCE, InvalidState,
            "frame size must be positive and finite, got {}x{}", width, height);
    }
    Ok(())
}

fn validate_center(cx: f64, cy: f64) -> Result<()> {
    if !(cx.is_finite() && cy.is_finite()) {
        camera_bail!(SOURCE, InvalidState, "center must be finite, got ({}, {})", cx, cy);
    }
    Ok(())
}

#[cfg(test)]
#[path = "camera_state_tests.rs"]
mod tests;
