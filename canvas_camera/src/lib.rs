/*!
# Canvas Camera

Core types for animating a 2D camera over a vector canvas.

This crate computes where a view looks and how the renderer should
transform the scene to show it. It never touches a document itself: the
renderer is reached through small capability traits, and backend crates
(SVG, ...) implement them.

## Architecture

- **CameraState**: center, size, rotation and clip flag of a view, plus the
  interpolation between two views (parabolic zoom, shorter-arc rotation,
  path-guided translation)
- **Camera**: binds a state to a shared viewport and a transform target,
  exposes drag / zoom / rotate
- **CameraTransition**: pushes interpolated frames into a camera
- **ElementQuery / PathSampler / TransformSink**: what the camera needs
  from a renderer
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod geometry;
pub mod renderer;
pub mod camera;

// Main canvas namespace module
pub mod canvas {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Camera types
    pub use crate::camera::{
        Camera, CameraConfig, CameraOffset, CameraState, CameraTransition,
        InterpolationParams, SizePolicy, Viewport, ViewportHandle,
    };

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Renderer capabilities
    pub mod render {
        pub use crate::renderer::*;
    }
}

// Re-export math library at crate root
pub use glam;
