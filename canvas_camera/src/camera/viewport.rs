/// Viewport - the device-pixel area a camera renders into.
///
/// The resize-handling owner keeps one `ViewportHandle` and every Camera
/// bound to the same surface holds a clone of it. Cameras only read it;
/// a resize is visible to all of them on their next `update`.

use std::cell::Cell;
use std::rc::Rc;
use crate::error::Result;
use crate::camera_bail;

const SOURCE: &str = "canvas::Viewport";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `Error::InvalidViewport` unless both extents are finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()) {
            camera_bail!(SOURCE, InvalidViewport,
                "viewport must have a positive finite size, got {}x{}", self.width, self.height);
        }
        Ok(())
    }
}

/// Shared, single-threaded handle to a Viewport.
#[derive(Debug, Clone)]
pub struct ViewportHandle {
    inner: Rc<Cell<Viewport>>,
}

impl ViewportHandle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { inner: Rc::new(Cell::new(Viewport::new(width, height))) }
    }

    pub fn get(&self) -> Viewport {
        self.inner.get()
    }

    /// Store a new size. Not validated here: cameras reject an unusable
    /// viewport when they next compute their transform.
    pub fn resize(&self, width: f64, height: f64) {
        self.inner.set(Viewport::new(width, height));
    }

    /// True when both handles point at the same viewport.
    pub fn shares_with(&self, other: &ViewportHandle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
