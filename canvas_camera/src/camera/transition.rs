/// CameraTransition - one animated move between two camera states.
///
/// Holds both endpoints and the interpolation options so a driver only has
/// to supply the progress of each tick. Timing and easing stay with the
/// driver.

use crate::error::Result;
use crate::renderer::PathSampler;
use crate::camera_error;
use super::camera::Camera;
use super::camera_state::{CameraState, InterpolationParams};

const SOURCE: &str = "canvas::CameraTransition";

pub struct CameraTransition {
    initial: CameraState,
    final_state: CameraState,
    relative_zoom: f64,
    path: Option<Box<dyn PathSampler>>,
    reverse_path: bool,
}

impl CameraTransition {
    /// Linear transition with no guide path.
    pub fn new(initial: CameraState, final_state: CameraState) -> Self {
        Self {
            initial,
            final_state,
            relative_zoom: 0.0,
            path: None,
            reverse_path: false,
        }
    }

    pub fn with_relative_zoom(mut self, relative_zoom: f64) -> Self {
        self.relative_zoom = relative_zoom;
        self
    }

    pub fn with_path(mut self, path: Box<dyn PathSampler>, reverse_path: bool) -> Self {
        self.path = Some(path);
        self.reverse_path = reverse_path;
        self
    }

    pub fn initial(&self) -> &CameraState {
        &self.initial
    }

    pub fn final_state(&self) -> &CameraState {
        &self.final_state
    }

    pub fn params(&self) -> InterpolationParams<'_> {
        InterpolationParams {
            relative_zoom: self.relative_zoom,
            path: self.path.as_deref(),
            reverse_path: self.reverse_path,
        }
    }

    /// The interpolated state at `progress`.
    pub fn state_at(&self, progress: f64) -> Result<CameraState> {
        let mut state = self.initial.clone();
        state.interpolate(&self.initial, &self.final_state, progress, &self.params())?;
        Ok(state)
    }

    /// Push the state at `progress` into `camera`.
    ///
    /// Returns `false` when the frame could not be computed or emitted; the
    /// error is logged and the camera keeps showing its previous frame.
    pub fn apply(&self, progress: f64, camera: &mut Camera) -> bool {
        let result = self
            .state_at(progress)
            .and_then(|state| camera.set_from_state(&state).map(|_| ()));
        match result {
            Ok(()) => true,
            Err(err) => {
                camera_error!(SOURCE, "Frame at progress {} dropped: {}", progress, err);
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "transition_tests.rs"]
mod tests;
