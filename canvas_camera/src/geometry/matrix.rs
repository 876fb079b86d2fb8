/// Matrix2D - 2x3 affine matrix in renderer order.
///
/// ```text
/// | a  c  e |
/// | b  d  f |
/// | 0  0  1 |
/// ```
///
/// A point maps as `(a*x + c*y + e, b*x + d*y + f)`. This is the layout
/// renderers report for an element's accumulated transform, so it is the
/// type crossing the `ElementQuery` boundary. Composition and inversion go
/// through `glam::DAffine2`, whose column order is the same.

use glam::{DAffine2, DVec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2D {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Matrix2D {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Pure translation.
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self::from_affine(&DAffine2::from_translation(DVec2::new(tx, ty)))
    }

    /// Uniform scale followed by a rotation (degrees) and a translation.
    ///
    /// This is the family of matrices `CameraState::set_from_element` reads
    /// exactly; anything with shear or non-uniform scale is approximated.
    pub fn similarity(scale: f64, angle_degrees: f64, tx: f64, ty: f64) -> Self {
        Self::from_affine(&DAffine2::from_scale_angle_translation(
            DVec2::splat(scale),
            angle_degrees.to_radians(),
            DVec2::new(tx, ty),
        ))
    }

    pub fn from_affine(affine: &DAffine2) -> Self {
        let [a, b, c, d, e, f] = affine.to_cols_array();
        Self { a, b, c, d, e, f }
    }

    pub fn to_affine(&self) -> DAffine2 {
        DAffine2::from_cols_array(&[self.a, self.b, self.c, self.d, self.e, self.f])
    }

    /// `self * other`: applies `other` first, then `self`.
    pub fn multiply(&self, other: &Matrix2D) -> Matrix2D {
        Self::from_affine(&(self.to_affine() * other.to_affine()))
    }

    /// Inverse matrix, or `None` when the determinant is zero or not finite.
    pub fn inverse(&self) -> Option<Matrix2D> {
        let det = self.a * self.d - self.b * self.c;
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(Self::from_affine(&self.to_affine().inverse()))
    }

    pub fn transform_point(&self, point: DVec2) -> DVec2 {
        DVec2::new(
            self.a * point.x + self.c * point.y + self.e,
            self.b * point.x + self.d * point.y + self.f,
        )
    }

    /// Length of the transformed x axis, `sqrt(a² + b²)`.
    pub fn scale_factor(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Rotation of the transformed x axis in degrees, `atan2(b, a)`.
    pub fn rotation_degrees(&self) -> f64 {
        self.b.atan2(self.a).to_degrees()
    }

    pub fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.d, self.e, self.f]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl Default for Matrix2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<DAffine2> for Matrix2D {
    fn from(affine: DAffine2) -> Self {
        Self::from_affine(&affine)
    }
}

impl From<Matrix2D> for DAffine2 {
    fn from(matrix: Matrix2D) -> Self {
        matrix.to_affine()
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
