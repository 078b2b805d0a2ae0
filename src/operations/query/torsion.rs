use crate::error::{GeometryError, Result};
use crate::geometry::curve::{Curve, CurvePoint};
use crate::math::TOLERANCE;

/// Torsion `((f' x f'') . f''') / |f' x f''|^2` from raw derivatives.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] when `f'` vanishes and
/// [`GeometryError::ZeroCurvature`] when `f' x f''` vanishes.
pub fn torsion_at(point: &CurvePoint) -> Result<f64> {
    let speed = point.first.norm();
    if !speed.is_finite() || speed < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    let cross = point.first.cross(&point.second);
    let cross_len = cross.norm();
    if !cross_len.is_finite() {
        return Err(GeometryError::Degenerate("non-finite derivative cross product".into()).into());
    }
    if cross_len < TOLERANCE {
        return Err(GeometryError::ZeroCurvature.into());
    }
    // |f' x f''|^2 overflows long before |f' x f''| does.
    Ok((cross / cross_len).dot(&point.third) / cross_len)
}

/// Computes the signed torsion of a curve at a parameter.
pub struct Torsion {
    t: f64,
}

impl Torsion {
    /// Creates a new `Torsion` query.
    #[must_use]
    pub fn new(t: f64) -> Self {
        Self { t }
    }

    /// Executes the query, returning the signed torsion.
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent is undefined or the curvature is zero.
    pub fn execute(&self, curve: &impl Curve) -> Result<f64> {
        torsion_at(&curve.point(self.t))
    }
}
