/// PathSampler trait - arc-length sampling of a guide path
///
/// Path-guided transitions move the camera center along a curve. The curve
/// is only ever sampled by arc length, so any renderer path (or a flattened
/// approximation of one) can drive the camera.

use glam::DVec2;

pub trait PathSampler {
    /// Total arc length of the path.
    fn total_length(&self) -> f64;

    /// Point at arc length `length`, clamped to `[0, total_length()]`.
    /// A NaN length samples the start of the path.
    fn point_at_length(&self, length: f64) -> DVec2;
}

/// Piecewise-linear path sampled by arc length.
///
/// Renderers that can flatten their curves hand one of these to the camera
/// instead of implementing `PathSampler` themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylinePath {
    points: Vec<DVec2>,
    /// Cumulative arc length at each point, same length as `points`
    lengths: Vec<f64>,
}

impl PolylinePath {
    pub fn new(points: Vec<DVec2>) -> Self {
        let mut lengths = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for (i, point) in points.iter().enumerate() {
            if i > 0 {
                total += point.distance(points[i - 1]);
            }
            lengths.push(total);
        }
        Self { points, lengths }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PathSampler for PolylinePath {
    fn total_length(&self) -> f64 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    fn point_at_length(&self, length: f64) -> DVec2 {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return DVec2::ZERO,
        };
        if length.is_nan() || length <= 0.0 {
            return first;
        }
        if length >= self.total_length() {
            return last;
        }

        // First point whose cumulative length reaches `length`
        let index = self.lengths.partition_point(|&l| l < length);
        let (l0, l1) = (self.lengths[index - 1], self.lengths[index]);
        let (p0, p1) = (self.points[index - 1], self.points[index]);
        let segment = l1 - l0;
        if segment <= 0.0 {
            return p1;
        }
        p0.lerp(p1, (length - l0) / segment)
    }
}

#[cfg(test)]
#[path = "path_sampler_tests.rs"]
mod tests;
