use crate::error::{GeometryError, Result};
use crate::geometry::curve::{Curve, CurvePoint};
use crate::math::{is_finite, try_normalize, Vector3};

/// Unit tangent `normalize(f')`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] when `f'` vanishes.
pub fn unit_tangent(point: &CurvePoint) -> Result<Vector3> {
    if !is_finite(&point.first) || !is_finite(&point.second) {
        return Err(GeometryError::Degenerate("non-finite derivative".into()).into());
    }
    try_normalize(&point.first).ok_or_else(|| GeometryError::ZeroVector.into())
}

/// Unit binormal `normalize(T x f'')`.
///
/// Built from the unit tangent and the raw second derivative, not from the
/// unit normal.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] when the tangent is undefined and
/// [`GeometryError::ZeroCurvature`] when `f''` is parallel to `f'`.
pub fn unit_binormal(point: &CurvePoint) -> Result<Vector3> {
    let tangent = unit_tangent(point)?;
    try_normalize(&tangent.cross(&point.second))
        .ok_or_else(|| GeometryError::ZeroCurvature.into())
}

/// Unit normal `T x B`.
///
/// Note the order: this is `T x B`, not the textbook `B x T`, so the
/// resulting triad satisfies `N x T = B`. Camera roll depends on it.
///
/// # Errors
///
/// Fails whenever [`unit_binormal`] fails.
pub fn unit_normal(point: &CurvePoint) -> Result<Vector3> {
    let tangent = unit_tangent(point)?;
    let binormal = unit_binormal(point)?;
    Ok(tangent.cross(&binormal))
}

/// Evaluates the unit tangent of a curve.
pub struct Tangent {
    t: f64,
}

impl Tangent {
    /// Creates a new `Tangent` query.
    #[must_use]
    pub fn new(t: f64) -> Self {
        Self { t }
    }

    /// Executes the query, returning the unit tangent.
    ///
    /// # Errors
    ///
    /// Returns an error if the first derivative vanishes at the parameter.
    pub fn execute(&self, curve: &impl Curve) -> Result<Vector3> {
        unit_tangent(&curve.point(self.t))
    }
}

/// Evaluates the unit normal of a curve.
pub struct Normal {
    t: f64,
}

impl Normal {
    /// Creates a new `Normal` query.
    #[must_use]
    pub fn new(t: f64) -> Self {
        Self { t }
    }

    /// Executes the query, returning the unit normal `T x B`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent or the binormal is undefined.
    pub fn execute(&self, curve: &impl Curve) -> Result<Vector3> {
        unit_normal(&curve.point(self.t))
    }
}

/// Evaluates the unit binormal of a curve.
pub struct Binormal {
    t: f64,
}

impl Binormal {
    /// Creates a new `Binormal` query.
    #[must_use]
    pub fn new(t: f64) -> Self {
        Self { t }
    }

    /// Executes the query, returning the unit binormal.
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent is undefined or the curvature is zero.
    pub fn execute(&self, curve: &impl Curve) -> Result<Vector3> {
        unit_binormal(&curve.point(self.t))
    }
}
