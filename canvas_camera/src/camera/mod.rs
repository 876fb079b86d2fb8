//! Camera module - view states, their interpolation, and the compositor.
//!
//! `CameraState` is the plain geometric value the presentation layer stores
//! per frame. `Camera` binds one state to a viewport and a renderer target
//! and turns it into a screen transform. `CameraTransition` drives one
//! animated move between two states.

mod camera;
mod camera_state;
mod config;
mod interpolation;
mod transition;
mod viewport;

pub use camera::Camera;
pub use camera_state::{normalize_angle, CameraOffset, CameraState, InterpolationParams};
pub use config::{CameraConfig, SizePolicy};
pub use interpolation::{angle_at, lerp, size_at, ZoomParabola};
pub use transition::CameraTransition;
pub use viewport::{Viewport, ViewportHandle};
