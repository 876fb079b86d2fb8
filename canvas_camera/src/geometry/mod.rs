//! Geometry module - 2D points, affine matrices and bounding boxes.
//!
//! Points are `glam::DVec2`. Matrices use the renderer convention
//! `{a, b, c, d, e, f}` and convert losslessly to `glam::DAffine2`.

mod matrix;
mod bounding_box;

pub use matrix::Matrix2D;
pub use bounding_box::BoundingBox;
pub use glam::{DAffine2, DVec2};
