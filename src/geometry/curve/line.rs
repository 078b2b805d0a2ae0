use crate::error::{GeometryError, Result};
use crate::math::{try_normalize, Point3, Vector3};

use super::{Curve, CurveDomain};

/// An infinite line defined by an origin point and a direction vector.
///
/// The parametric form is: `P(t) = origin + t * direction`.
///
/// Both higher derivatives vanish, so a line has zero curvature everywhere
/// and its binormal and torsion are undefined.
#[derive(Debug, Clone)]
pub struct Line {
    origin: Point3,
    direction: Vector3,
}

impl Line {
    /// Creates a new line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        let direction = try_normalize(&direction).ok_or(GeometryError::ZeroVector)?;
        Ok(Self { origin, direction })
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }
}

impl Curve for Line {
    fn evaluate(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    fn first_derivative(&self, _t: f64) -> Vector3 {
        self.direction
    }

    fn second_derivative(&self, _t: f64) -> Vector3 {
        Vector3::zeros()
    }

    fn third_derivative(&self, _t: f64) -> Vector3 {
        Vector3::zeros()
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(f64::NEG_INFINITY, f64::INFINITY)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn direction_is_normalized() {
        let l = Line::new(Point3::origin(), Vector3::new(0.0, 3.0, 4.0)).unwrap();
        assert!((l.direction().norm() - 1.0).abs() < TOLERANCE);
        assert!((l.evaluate(5.0) - Point3::new(0.0, 3.0, 4.0)).norm() < TOLERANCE);
    }

    #[test]
    fn higher_derivatives_vanish() {
        let l = Line::new(Point3::new(1.0, 1.0, 1.0), Vector3::x()).unwrap();
        assert!(l.second_derivative(2.0).norm() < TOLERANCE);
        assert!(l.third_derivative(-2.0).norm() < TOLERANCE);
    }

    #[test]
    fn zero_direction_rejected() {
        assert!(Line::new(Point3::origin(), Vector3::zeros()).is_err());
    }
}
