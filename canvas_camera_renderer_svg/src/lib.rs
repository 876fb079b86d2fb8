/*!
# Canvas Camera - SVG Renderer Backend

SVG implementation of the canvas_camera renderer capabilities.

This crate lets a `Camera` drive an SVG document: elements report their
bounds and accumulated transforms, path data serves as a guide path, and
each camera writes its transform into a clip rectangle and a set of layer
groups.
*/

mod svg_config;
mod svg_element;
mod svg_path;
mod svg_target;

pub use svg_config::SvgConfig;
pub use svg_element::{SvgElement, SvgShape};
pub use svg_path::{SvgPath, DEFAULT_FLATTEN_TOLERANCE};
pub use svg_target::{LayerKey, SvgGroup, SvgTransformTarget};
