/// Mock renderer capabilities for unit tests (no rendering surface required)
///
/// These mocks let CameraState and Camera be tested in isolation: elements
/// report a fixed box and transform, and the sink records every transform
/// it receives so tests can check what the renderer would have shown.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::geometry::{BoundingBox, Matrix2D};
use crate::renderer::{ElementQuery, TransformSink, ViewTransform};

// ============================================================================
// Mock Element
// ============================================================================

#[derive(Debug, Clone)]
pub struct MockElement {
    pub bbox: BoundingBox,
    pub transform: Matrix2D,
    pub fail: bool,
}

impl MockElement {
    pub fn new(bbox: BoundingBox, transform: Matrix2D) -> Self {
        Self { bbox, transform, fail: false }
    }

    /// An element whose renderer queries always fail
    pub fn detached() -> Self {
        Self {
            bbox: BoundingBox::default(),
            transform: Matrix2D::IDENTITY,
            fail: true,
        }
    }
}

impl ElementQuery for MockElement {
    fn bounding_box(&self) -> Result<BoundingBox> {
        if self.fail {
            return Err(Error::BackendError("element is not attached to a document".to_string()));
        }
        Ok(self.bbox)
    }

    fn current_transform(&self) -> Result<Matrix2D> {
        if self.fail {
            return Err(Error::BackendError("element is not attached to a document".to_string()));
        }
        Ok(self.transform)
    }
}

// ============================================================================
// Recording Sink
// ============================================================================

/// Sink that records every applied transform.
///
/// Clones share the same record, so a test keeps one handle while the
/// camera owns the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub applied: Rc<RefCell<Vec<ViewTransform>>>,
    pub fail: Rc<Cell<bool>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.applied.borrow().len()
    }

    pub fn last(&self) -> Option<ViewTransform> {
        self.applied.borrow().last().copied()
    }
}

impl TransformSink for RecordingSink {
    fn apply(&mut self, transform: &ViewTransform) -> Result<()> {
        if self.fail.get() {
            return Err(Error::BackendError("transform target was torn down".to_string()));
        }
        self.applied.borrow_mut().push(*transform);
        Ok(())
    }
}
