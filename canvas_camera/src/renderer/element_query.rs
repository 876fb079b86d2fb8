/// ElementQuery trait - scene element inspection
///
/// A camera view can be derived from any labeled scene element. The core
/// never touches the element itself; it asks the renderer for two facts.
/// How the box is computed (a rectangle's own attributes, a generic shape
/// bounds query, ...) is the renderer's choice.

use crate::error::Result;
use crate::geometry::{BoundingBox, Matrix2D};

pub trait ElementQuery {
    /// Axis-aligned bounding box in the element's local coordinate space.
    fn bounding_box(&self) -> Result<BoundingBox>;

    /// Accumulated transform from the element's local space to the root
    /// coordinate space.
    fn current_transform(&self) -> Result<Matrix2D>;
}
