use crate::math::{Point3, Vector3};

use super::{Curve, CurveDomain};

/// The twisted cubic `f(x) = (x, x^2, x^3)`.
///
/// Its natural animation domain is `[-2, 2]`. The tangent never vanishes
/// and the curvature is strictly positive everywhere, so every frame along
/// it is well defined.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwistedCubic;

impl TwistedCubic {
    /// Creates the reference cubic.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Curve for TwistedCubic {
    fn evaluate(&self, x: f64) -> Point3 {
        Point3::new(x, x * x, x * x * x)
    }

    fn first_derivative(&self, x: f64) -> Vector3 {
        Vector3::new(1.0, 2.0 * x, 3.0 * x * x)
    }

    fn second_derivative(&self, x: f64) -> Vector3 {
        Vector3::new(0.0, 2.0, 6.0 * x)
    }

    fn third_derivative(&self, _x: f64) -> Vector3 {
        Vector3::new(0.0, 0.0, 6.0)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(-2.0, 2.0)
    }
}
