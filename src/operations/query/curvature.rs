use crate::error::{GeometryError, Result};
use crate::geometry::curve::{Curve, CurvePoint};
use crate::math::TOLERANCE;

/// Curvature `|f' x f''| / |f'|^3` from raw derivatives.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] when `f'` vanishes (the formula is
/// `0 / 0` there).
pub fn curvature_at(point: &CurvePoint) -> Result<f64> {
    let speed = point.first.norm();
    if !speed.is_finite() || speed < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(point.first.cross(&point.second).norm() / speed.powi(3))
}

/// Computes the curvature of a curve at a parameter.
pub struct Curvature {
    t: f64,
}

impl Curvature {
    /// Creates a new `Curvature` query.
    #[must_use]
    pub fn new(t: f64) -> Self {
        Self { t }
    }

    /// Executes the query, returning a non-negative curvature.
    ///
    /// # Errors
    ///
    /// Returns an error if the first derivative vanishes at the parameter.
    pub fn execute(&self, curve: &impl Curve) -> Result<f64> {
        curvature_at(&curve.point(self.t))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{Helix, Line, TwistedCubic};
    use crate::math::{Point3, Vector3};
    use approx::assert_relative_eq;

    #[test]
    fn cubic_at_origin_is_two() {
        // f'(0) = (1,0,0), f''(0) = (0,2,0): |(0,0,2)| / 1 = 2
        let k = Curvature::new(0.0).execute(&TwistedCubic).unwrap();
        assert_relative_eq!(k, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn cubic_at_one() {
        // |(6,-6,2)| / |(1,2,3)|^3 = sqrt(76) / 14^(3/2)
        let k = Curvature::new(1.0).execute(&TwistedCubic).unwrap();
        assert_relative_eq!(k, 76f64.sqrt() / 14f64.powf(1.5), epsilon = 1e-12);
    }

    #[test]
    fn never_negative_along_cubic() {
        let mut x = -2.0;
        while x < 2.0 {
            assert!(Curvature::new(x).execute(&TwistedCubic).unwrap() >= 0.0);
            x += 0.05;
        }
    }

    #[test]
    fn helix_matches_closed_form() {
        let h = Helix::new(
            Point3::origin(),
            2.0,
            Vector3::z(),
            Vector3::x(),
            0.5,
            0.0,
            10.0,
        )
        .unwrap();
        for &t in &[0.0, 1.3, 7.7] {
            let k = Curvature::new(t).execute(&h).unwrap();
            assert_relative_eq!(k, h.curvature(), epsilon = 1e-12);
        }
    }

    #[test]
    fn line_is_flat() {
        let l = Line::new(Point3::origin(), Vector3::new(1.0, 2.0, 3.0)).unwrap();
        assert!(Curvature::new(4.0).execute(&l).unwrap().abs() < TOLERANCE);
    }

    #[test]
    fn stationary_point_is_degenerate() {
        let point = CurvePoint {
            t: 0.0,
            position: Point3::origin(),
            first: Vector3::zeros(),
            second: Vector3::x(),
            third: Vector3::zeros(),
        };
        assert!(curvature_at(&point).is_err());
    }
}
