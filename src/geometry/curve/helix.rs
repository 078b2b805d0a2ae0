use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A circular helix in 3D space.
///
/// Defined by a center, radius, axis, a reference direction for the
/// zero-angle, and a pitch (rise along the axis per radian).
///
/// `P(t) = center + radius * cos(t) * ref_dir + radius * sin(t) * side + pitch * t * axis`
/// where `side = axis x ref_dir`.
///
/// A helix has constant curvature `r / (r^2 + c^2)` and constant torsion
/// `c / (r^2 + c^2)`, with `c` the pitch.
#[derive(Debug, Clone)]
pub struct Helix {
    center: Point3,
    radius: f64,
    axis: Vector3,
    ref_dir: Vector3,
    pitch: f64,
    start_angle: f64,
    end_angle: f64,
}

impl Helix {
    /// Creates a new helix.
    ///
    /// # Arguments
    ///
    /// * `center` - Point on the axis at `t = 0`
    /// * `radius` - Radius (must be positive)
    /// * `axis` - Axis direction
    /// * `ref_dir` - Reference direction for angle = 0 (must be perpendicular to axis)
    /// * `pitch` - Rise along the axis per radian (may be negative or zero)
    /// * `start_angle` - Start angle in radians
    /// * `end_angle` - End angle in radians
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive, the axis is zero-length,
    /// the reference direction is not perpendicular to the axis, or the
    /// angular range is empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        center: Point3,
        radius: f64,
        axis: Vector3,
        ref_dir: Vector3,
        pitch: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("helix radius must be positive".into()).into());
        }

        let axis_len = axis.norm();
        if axis_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let axis = axis / axis_len;

        let ref_len = ref_dir.norm();
        if ref_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let ref_dir = ref_dir / ref_len;

        if axis.dot(&ref_dir).abs() > TOLERANCE {
            return Err(GeometryError::Degenerate(
                "reference direction must be perpendicular to axis".into(),
            )
            .into());
        }

        if end_angle <= start_angle {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "end_angle",
                value: end_angle,
                min: start_angle,
                max: f64::INFINITY,
            }
            .into());
        }

        Ok(Self {
            center,
            radius,
            axis,
            ref_dir,
            pitch,
            start_angle,
            end_angle,
        })
    }

    /// Returns the radius of the helix.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the pitch (axial rise per radian).
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Returns the unit axis direction.
    #[must_use]
    pub fn axis(&self) -> &Vector3 {
        &self.axis
    }

    /// Closed-form curvature `r / (r^2 + c^2)`.
    #[must_use]
    pub fn curvature(&self) -> f64 {
        self.radius / (self.radius * self.radius + self.pitch * self.pitch)
    }

    /// Closed-form torsion `c / (r^2 + c^2)`.
    #[must_use]
    pub fn torsion(&self) -> f64 {
        self.pitch / (self.radius * self.radius + self.pitch * self.pitch)
    }

    fn side(&self) -> Vector3 {
        self.axis.cross(&self.ref_dir)
    }
}

impl Curve for Helix {
    fn evaluate(&self, t: f64) -> Point3 {
        let x = self.radius * t.cos();
        let y = self.radius * t.sin();
        self.center + self.ref_dir * x + self.side() * y + self.axis * (self.pitch * t)
    }

    fn first_derivative(&self, t: f64) -> Vector3 {
        let dx = -self.radius * t.sin();
        let dy = self.radius * t.cos();
        self.ref_dir * dx + self.side() * dy + self.axis * self.pitch
    }

    fn second_derivative(&self, t: f64) -> Vector3 {
        let dx = -self.radius * t.cos();
        let dy = -self.radius * t.sin();
        self.ref_dir * dx + self.side() * dy
    }

    fn third_derivative(&self, t: f64) -> Vector3 {
        let dx = self.radius * t.sin();
        let dy = -self.radius * t.cos();
        self.ref_dir * dx + self.side() * dy
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.start_angle, self.end_angle)
    }
}
