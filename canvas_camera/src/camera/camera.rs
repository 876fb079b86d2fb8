/// Camera - binds a CameraState to a viewport and a renderer transform target.
///
/// The camera derives everything it emits from three inputs: its own state,
/// the shared viewport and its config. Nothing derived is cached; the fit
/// scale and the transform are recomputed on every `update`, so a viewport
/// resize needs no notification beyond the next update.
///
/// Every mutator builds the next state on the side, emits the transform it
/// implies, and only keeps the new state if the emit succeeded. A failed
/// call leaves both the state and the last emitted transform untouched.

use std::fmt;
use glam::DVec2;
use crate::error::Result;
use crate::renderer::{ClipRect, TransformSink, ViewTransform};
use crate::{camera_bail, camera_debug, camera_trace, camera_warn};
use super::camera_state::CameraState;
use super::config::{CameraConfig, SizePolicy};
use super::viewport::ViewportHandle;

const SOURCE: &str = "canvas::Camera";

pub struct Camera {
    state: CameraState,
    viewport: ViewportHandle,
    target: Box<dyn TransformSink>,
    config: CameraConfig,
}

impl Camera {
    /// Create a camera and emit its initial transform.
    pub fn new(
        state: CameraState,
        viewport: ViewportHandle,
        target: Box<dyn TransformSink>,
        config: CameraConfig,
    ) -> Result<Self> {
        viewport.get().validate()?;
        if !(config.min_frame_size > 0.0 && config.min_frame_size <= config.max_frame_size) {
            camera_bail!(SOURCE, InvalidArgument,
                "frame size bounds must satisfy 0 < min <= max, got [{}, {}]",
                config.min_frame_size, config.max_frame_size);
        }

        let mut camera = Self { state, viewport, target, config };
        let angle = camera.state.angle();
        camera.state.set_angle(angle);
        camera.emit()?;

        let viewport = camera.viewport.get();
        camera_debug!(SOURCE, "Camera created: frame {}x{} in viewport {}x{}",
            camera.state.width(), camera.state.height(), viewport.width, viewport.height);
        Ok(camera)
    }

    // ===== GETTERS =====

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn viewport(&self) -> &ViewportHandle {
        &self.viewport
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Uniform fit-inside scale: `min(vw / width, vh / height)`.
    pub fn scale(&self) -> Result<f64> {
        self.scale_for(&self.state)
    }

    /// The transform the current state implies for the current viewport.
    pub fn view_transform(&self) -> Result<ViewTransform> {
        self.transform_for(&self.state)
    }

    /// Map a viewport pixel to scene coordinates.
    pub fn screen_to_scene(&self, point: DVec2) -> Result<DVec2> {
        let affine = self.view_transform()?.to_affine();
        Ok(affine.inverse().transform_point2(point))
    }

    /// Map a scene point to viewport pixels.
    pub fn scene_to_screen(&self, point: DVec2) -> Result<DVec2> {
        Ok(self.view_transform()?.to_affine().transform_point2(point))
    }

    // ===== MUTATORS =====

    /// Rotate the view by `delta` degrees.
    pub fn rotate(&mut self, delta: f64) -> Result<&mut Self> {
        if !delta.is_finite() {
            camera_bail!(SOURCE, InvalidArgument, "rotation must be finite, got {}", delta);
        }
        let mut next = self.state.clone();
        next.set_angle(self.state.angle() + delta);
        self.commit(next)
    }

    /// Move the view by a screen-space delta in pixels.
    ///
    /// The content follows the pointer: dragging right moves the camera
    /// left in scene space. Clears the clip flag.
    pub fn drag(&mut self, dx: f64, dy: f64) -> Result<&mut Self> {
        let next = self.dragged(&self.state, dx, dy)?;
        self.commit(next)
    }

    /// Zoom by `factor` keeping the scene point under pixel
    /// `(pivot_x, pivot_y)` fixed on screen. `factor > 1` zooms in.
    pub fn zoom(&mut self, factor: f64, pivot_x: f64, pivot_y: f64) -> Result<&mut Self> {
        if !(factor.is_finite() && factor > 0.0) {
            camera_bail!(SOURCE, InvalidArgument, "zoom factor must be finite and positive, got {}", factor);
        }
        if !(pivot_x.is_finite() && pivot_y.is_finite()) {
            camera_bail!(SOURCE, InvalidArgument, "zoom pivot must be finite, got ({}, {})", pivot_x, pivot_y);
        }

        let factor = self.bounded_factor(factor)?;
        let mut resized = self.state.clone();
        resized.set_size(self.state.width() / factor, self.state.height() / factor)?;

        let viewport = self.viewport.get();
        let next = self.dragged(
            &resized,
            (1.0 - factor) * (pivot_x - viewport.width / 2.0),
            (1.0 - factor) * (pivot_y - viewport.height / 2.0),
        )?;
        self.commit(next)
    }

    /// Replace the whole state. The angle is normalized on the way in.
    pub fn set_from_state(&mut self, state: &CameraState) -> Result<&mut Self> {
        let mut next = state.clone();
        next.set_angle(state.angle());
        self.commit(next)
    }

    /// Recompute the transform and hand it to the target.
    pub fn update(&mut self) -> Result<&mut Self> {
        self.emit()?;
        Ok(self)
    }

    // ===== INTERNALS =====

    fn scale_for(&self, state: &CameraState) -> Result<f64> {
        let viewport = self.viewport.get();
        viewport.validate()?;
        Ok((viewport.width / state.width()).min(viewport.height / state.height()))
    }

    fn transform_for(&self, state: &CameraState) -> Result<ViewTransform> {
        let viewport = self.viewport.get();
        let scale = self.scale_for(state)?;

        let frame_width = state.width() * scale;
        let frame_height = state.height() * scale;
        let x = (viewport.width - frame_width) / 2.0;
        let y = (viewport.height - frame_height) / 2.0;

        let clip = if state.clipped() {
            ClipRect { x, y, width: frame_width, height: frame_height }
        } else {
            ClipRect { x: 0.0, y: 0.0, width: viewport.width, height: viewport.height }
        };

        Ok(ViewTransform {
            scale,
            translate: DVec2::new(
                -state.cx() + state.width() / 2.0 + x / scale,
                -state.cy() + state.height() / 2.0 + y / scale,
            ),
            rotate: -state.angle(),
            rotate_center: state.center(),
            clip,
        })
    }

    /// `state` moved by a screen-space delta, at `state`'s own scale.
    fn dragged(&self, state: &CameraState, dx: f64, dy: f64) -> Result<CameraState> {
        if !(dx.is_finite() && dy.is_finite()) {
            camera_bail!(SOURCE, InvalidArgument, "drag delta must be finite, got ({}, {})", dx, dy);
        }
        let scale = self.scale_for(state)?;
        let (sin, cos) = state.angle().to_radians().sin_cos();

        let mut next = state.clone();
        next.set_center(
            state.cx() - (dx * cos - dy * sin) / scale,
            state.cy() - (dx * sin + dy * cos) / scale,
        )?;
        next.set_clipped(false);
        Ok(next)
    }

    /// Apply the config's frame size bounds to a zoom factor.
    fn bounded_factor(&self, factor: f64) -> Result<f64> {
        let (width, height) = (self.state.width(), self.state.height());
        let smallest = width.min(height) / factor;
        let largest = width.max(height) / factor;
        if smallest >= self.config.min_frame_size && largest <= self.config.max_frame_size {
            return Ok(factor);
        }

        match self.config.size_policy {
            SizePolicy::Reject => {
                camera_bail!(SOURCE, InvalidArgument,
                    "zoom factor {} gives a {}x{} frame outside [{}, {}]",
                    factor, width / factor, height / factor,
                    self.config.min_frame_size, self.config.max_frame_size);
            }
            SizePolicy::Clamp => {
                let lowest = width.max(height) / self.config.max_frame_size;
                let highest = width.min(height) / self.config.min_frame_size;
                if lowest > highest {
                    camera_bail!(SOURCE, InvalidArgument,
                        "a {}x{} frame cannot fit in [{}, {}] at any zoom",
                        width, height, self.config.min_frame_size, self.config.max_frame_size);
                }
                let clamped = factor.clamp(lowest, highest);
                camera_warn!(SOURCE, "Zoom factor {} clamped to {}", factor, clamped);
                Ok(clamped)
            }
        }
    }

    /// Keep `next` only if its transform reaches the target.
    fn commit(&mut self, next: CameraState) -> Result<&mut Self> {
        let previous = std::mem::replace(&mut self.state, next);
        if let Err(err) = self.emit() {
            self.state = previous;
            return Err(err);
        }
        Ok(self)
    }

    fn emit(&mut self) -> Result<()> {
        let transform = self.transform_for(&self.state)?;
        self.target.apply(&transform)?;
        camera_trace!(SOURCE, "scale={:.4} translate=({:.3}, {:.3}) rotate={:.3}",
            transform.scale, transform.translate.x, transform.translate.y, transform.rotate);
        Ok(())
    }
}

impl fmt::Debug for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Camera")
            .field("state", &self.state)
            .field("viewport", &self.viewport.get())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
