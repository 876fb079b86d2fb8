/// Interpolation primitives for camera transitions.
///
/// Sizes follow either a straight line or a parabola whose apex bulges
/// past both endpoints (the zoom-out-then-in effect of a relative zoom).
/// Angles always travel the shorter way around the circle.

use crate::error::Result;
use crate::camera_bail;

const SOURCE: &str = "canvas::CameraState";

/// `u0·(1-t) + u1·t`, exact at both ends.
#[inline]
pub fn lerp(u0: f64, u1: f64, t: f64) -> f64 {
    u0 * (1.0 - t) + u1 * t
}

/// Parabola through `(0, u0)` and `(1, u1)` with its extremum `um` at `tm`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomParabola {
    /// Apex value
    pub um: f64,
    /// Progress at which the apex is reached, in (0, 1)
    pub tm: f64,
    /// Quadratic coefficient
    pub k: f64,
}

impl ZoomParabola {
    /// Build the parabola for one frame dimension.
    ///
    /// `relative_zoom > 0` puts the apex at `max(u0, u1)·(1 + relative_zoom)`,
    /// `relative_zoom < 0` at `min(u0, u1)·(1 - relative_zoom)`. Both endpoints
    /// must lie on the same side of the apex; when they don't, `du0/du1` is
    /// not positive and there is no real solution.
    pub fn new(u0: f64, u1: f64, relative_zoom: f64) -> Result<Self> {
        let um = if relative_zoom > 0.0 {
            u0.max(u1) * (1.0 + relative_zoom)
        } else {
            u0.min(u1) * (1.0 - relative_zoom)
        };
        let du0 = u0 - um;
        let du1 = u1 - um;
        let ratio = du0 / du1;
        if !(ratio.is_finite() && ratio > 0.0) {
            camera_bail!(SOURCE, InterpolationFailed,
                "apex {} is not outside [{}, {}] (relative zoom {}): du0/du1 = {}",
                um, u0.min(u1), u0.max(u1), relative_zoom, ratio);
        }
        let r = ratio.sqrt();
        let tm = r / (1.0 + r);
        Ok(Self { um, tm, k: du0 / (tm * tm) })
    }

    pub fn value_at(&self, t: f64) -> f64 {
        let dt = t - self.tm;
        self.k * dt * dt + self.um
    }
}

/// Size of one frame dimension at progress `t`.
pub fn size_at(u0: f64, u1: f64, t: f64, relative_zoom: f64) -> Result<f64> {
    if relative_zoom == 0.0 {
        return Ok(lerp(u0, u1, t));
    }
    Ok(ZoomParabola::new(u0, u1, relative_zoom)?.value_at(t))
}

/// Angle at progress `t`, along the shorter signed arc.
///
/// The result is linear in the adjusted space and may leave [-180, 180).
pub fn angle_at(a0: f64, a1: f64, t: f64) -> f64 {
    let delta = a1 - a0;
    if delta > 180.0 {
        lerp(a0, a1 - 360.0, t)
    } else if delta < -180.0 {
        lerp(a0 - 360.0, a1, t)
    } else {
        lerp(a0, a1, t)
    }
}

#[cfg(test)]
#[path = "interpolation_tests.rs"]
mod tests;
