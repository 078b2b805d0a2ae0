mod helix;
mod line;
mod twisted_cubic;

pub use helix::Helix;
pub use line::Line;
pub use twisted_cubic::TwistedCubic;

use crate::math::{Point3, Vector3};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns `t_max - t_min`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.t_max - self.t_min
    }

    /// Clamps `t` into the closed range `[t_min, t_max]`.
    #[must_use]
    pub fn clamp(&self, t: f64) -> f64 {
        t.clamp(self.t_min, self.t_max)
    }
}

/// Position and the first three derivatives of a curve at one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Parameter the point was evaluated at.
    pub t: f64,
    /// `f(t)`.
    pub position: Point3,
    /// `f'(t)`, not normalized.
    pub first: Vector3,
    /// `f''(t)`.
    pub second: Vector3,
    /// `f'''(t)`.
    pub third: Vector3,
}

/// Trait for parametric curves in 3D space with analytic derivatives.
///
/// Implementors must return the exact derivatives of [`Curve::evaluate`].
/// Curvature and torsion are built from these values directly, so finite
/// difference approximations would compound into visible error.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    fn evaluate(&self, t: f64) -> Point3;

    /// First derivative `f'(t)`.
    fn first_derivative(&self, t: f64) -> Vector3;

    /// Second derivative `f''(t)`.
    fn second_derivative(&self, t: f64) -> Vector3;

    /// Third derivative `f'''(t)`.
    fn third_derivative(&self, t: f64) -> Vector3;

    /// Returns the natural parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Evaluates position and all derivatives at once.
    fn point(&self, t: f64) -> CurvePoint {
        CurvePoint {
            t,
            position: self.evaluate(t),
            first: self.first_derivative(t),
            second: self.second_derivative(t),
            third: self.third_derivative(t),
        }
    }
}
