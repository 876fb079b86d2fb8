/// SVG path data as a camera guide path
///
/// The `d` attribute is parsed by kurbo, so every SVG path command is
/// accepted (lines, quadratic and cubic curves, arcs). The path is flattened
/// into a polyline once at parse time and sampled by arc length afterwards.

use kurbo::{BezPath, PathEl, Point};
use canvas_camera::canvas::Result;
use canvas_camera::canvas::geometry::DVec2;
use canvas_camera::canvas::render::{PathSampler, PolylinePath};
use canvas_camera::{camera_bail, camera_err};

const SOURCE: &str = "canvas::svg::Path";

/// Maximum distance between a curve and its flattened polyline, in path units.
pub const DEFAULT_FLATTEN_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct SvgPath {
    data: String,
    polyline: PolylinePath,
}

impl SvgPath {
    /// Parse `d` attribute data, flattened with `DEFAULT_FLATTEN_TOLERANCE`.
    pub fn parse(data: &str) -> Result<Self> {
        Self::parse_with_tolerance(data, DEFAULT_FLATTEN_TOLERANCE)
    }

    /// Parse `d` attribute data, flattening curves to within `tolerance`.
    ///
    /// A single subpath is supported; a second moveto is rejected because
    /// the camera samples the path as one continuous curve.
    pub fn parse_with_tolerance(data: &str, tolerance: f64) -> Result<Self> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            camera_bail!(SOURCE, InvalidArgument,
                "flatten tolerance must be positive and finite, got {}", tolerance);
        }
        if !matches!(data.trim_start().chars().next(), Some('M' | 'm')) {
            camera_bail!(SOURCE, InvalidArgument, "path data must start with a moveto: '{}'", data);
        }

        let bez = BezPath::from_svg(data).map_err(|err| {
            camera_err!(SOURCE, InvalidArgument, "malformed path data '{}': {}", data, err)
        })?;
        let subpaths = bez.elements().iter().filter(|el| matches!(el, PathEl::MoveTo(_))).count();
        if subpaths != 1 {
            camera_bail!(SOURCE, InvalidArgument,
                "path data must have exactly one subpath, found {}: '{}'", subpaths, data);
        }

        Ok(Self { data: data.to_string(), polyline: flatten(&bez, tolerance) })
    }

    /// The source `d` attribute
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn points(&self) -> &[DVec2] {
        self.polyline.points()
    }
}

impl PathSampler for SvgPath {
    fn total_length(&self) -> f64 {
        self.polyline.total_length()
    }

    fn point_at_length(&self, length: f64) -> DVec2 {
        self.polyline.point_at_length(length)
    }
}

fn to_dvec(point: Point) -> DVec2 {
    DVec2::new(point.x, point.y)
}

/// Flattened points of a single-subpath `BezPath`. A closepath repeats the
/// subpath start so the closing segment is sampled too.
fn flatten(bez: &BezPath, tolerance: f64) -> PolylinePath {
    let mut points: Vec<DVec2> = Vec::new();
    let mut start = DVec2::ZERO;
    kurbo::flatten(bez.iter(), tolerance, |el| match el {
        PathEl::MoveTo(p) => {
            start = to_dvec(p);
            points.push(start);
        }
        PathEl::LineTo(p) => points.push(to_dvec(p)),
        PathEl::ClosePath => points.push(start),
        // flatten only emits moveto, lineto and closepath
        PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
    });
    PolylinePath::new(points)
}

#[cfg(test)]
#[path = "svg_path_tests.rs"]
mod tests;
