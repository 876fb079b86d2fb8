/// SVG element inspection
///
/// An `SvgElement` is the backend's view of a labeled scene element: its
/// local geometry and the accumulated transform from its coordinate space
/// to the document root. Rectangles report their own attributes; any other
/// shape falls back to the bounds of its points.

use canvas_camera::canvas::Result;
use canvas_camera::canvas::geometry::{BoundingBox, DVec2, Matrix2D};
use canvas_camera::canvas::render::ElementQuery;
use canvas_camera::camera_bail;

const SOURCE: &str = "canvas::svg::Element";

/// Local geometry of an element
#[derive(Debug, Clone, PartialEq)]
pub enum SvgShape {
    /// `<rect x y width height>`
    Rect { x: f64, y: f64, width: f64, height: f64 },
    /// `<polyline points>` or `<polygon points>`
    Polyline(Vec<DVec2>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    id: String,
    shape: SvgShape,
    transform: Matrix2D,
}

impl SvgElement {
    pub fn rect(id: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.to_string(),
            shape: SvgShape::Rect { x, y, width, height },
            transform: Matrix2D::IDENTITY,
        }
    }

    pub fn polyline(id: &str, points: Vec<DVec2>) -> Self {
        Self {
            id: id.to_string(),
            shape: SvgShape::Polyline(points),
            transform: Matrix2D::IDENTITY,
        }
    }

    /// Set the element's own `transform` attribute.
    pub fn with_transform(mut self, transform: Matrix2D) -> Self {
        self.transform = transform;
        self
    }

    /// Place the element inside a group whose accumulated transform is
    /// `parent`.
    pub fn under(mut self, parent: &Matrix2D) -> Self {
        self.transform = parent.multiply(&self.transform);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn shape(&self) -> &SvgShape {
        &self.shape
    }
}

impl ElementQuery for SvgElement {
    fn bounding_box(&self) -> Result<BoundingBox> {
        match &self.shape {
            SvgShape::Rect { x, y, width, height } => Ok(BoundingBox::new(*x, *y, *width, *height)),
            SvgShape::Polyline(points) => match BoundingBox::from_points(points) {
                Some(bbox) => Ok(bbox),
                None => camera_bail!(SOURCE, BackendError, "element '{}' has no points", self.id),
            },
        }
    }

    fn current_transform(&self) -> Result<Matrix2D> {
        Ok(self.transform)
    }
}

#[cfg(test)]
#[path = "svg_element_tests.rs"]
mod tests;
