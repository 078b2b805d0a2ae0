use crate::error::{GeometryError, Result};
use crate::geometry::curve::{Curve, CurvePoint};
use crate::math::{is_finite, Point3, Vector3};

use super::curvature::curvature_at;
use super::frame_vectors::{unit_binormal, unit_tangent};
use super::torsion::torsion_at;

/// The moving frame of a curve at one parameter.
///
/// `tangent`, `normal` and `binormal` are unit length and mutually
/// orthogonal. The normal is `T x B`, so `normal x tangent == binormal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrenetFrame {
    /// Parameter the frame was evaluated at.
    pub t: f64,
    /// Curve position `f(t)`.
    pub position: Point3,
    /// Unit tangent.
    pub tangent: Vector3,
    /// Unit normal.
    pub normal: Vector3,
    /// Unit binormal.
    pub binormal: Vector3,
    /// Non-negative curvature.
    pub curvature: f64,
    /// Signed torsion.
    pub torsion: f64,
}

impl FrenetFrame {
    /// Builds the frame from an already evaluated [`CurvePoint`].
    ///
    /// Curvature and torsion come from the raw derivatives. Only the frame
    /// vectors are normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent is undefined (`f' = 0`), the
    /// curvature is zero (binormal and torsion undefined), or any resulting
    /// value is NaN or infinite.
    pub fn from_point(point: &CurvePoint) -> Result<Self> {
        let tangent = unit_tangent(point)?;
        let binormal = unit_binormal(point)?;
        let normal = tangent.cross(&binormal);
        let frame = Self {
            t: point.t,
            position: point.position,
            tangent,
            normal,
            binormal,
            curvature: curvature_at(point)?,
            torsion: torsion_at(point)?,
        };
        if !frame.is_finite() {
            return Err(GeometryError::Degenerate("non-finite frame".into()).into());
        }
        Ok(frame)
    }

    /// Returns `true` when every scalar and vector component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.t.is_finite()
            && self.curvature.is_finite()
            && self.torsion.is_finite()
            && is_finite(&self.position.coords)
            && is_finite(&self.tangent)
            && is_finite(&self.normal)
            && is_finite(&self.binormal)
    }
}

/// Computes the full Frenet frame of a curve at a parameter.
pub struct FrenetFrameQuery {
    t: f64,
}

impl FrenetFrameQuery {
    /// Creates a new `FrenetFrameQuery`.
    #[must_use]
    pub fn new(t: f64) -> Self {
        Self { t }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame is degenerate at the parameter.
    pub fn execute(&self, curve: &impl Curve) -> Result<FrenetFrame> {
        FrenetFrame::from_point(&curve.point(self.t))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{Helix, Line, TwistedCubic};
    use approx::assert_relative_eq;

    fn sweep() -> impl Iterator<Item = f64> {
        (0..=80).map(|i| -2.0 + f64::from(i) * 0.05)
    }

    #[test]
    fn vectors_are_unit_length() {
        for x in sweep() {
            let f = FrenetFrameQuery::new(x).execute(&TwistedCubic).unwrap();
            assert!((f.tangent.norm() - 1.0).abs() < 1e-6);
            assert!((f.normal.norm() - 1.0).abs() < 1e-6);
            assert!((f.binormal.norm() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn vectors_are_orthogonal() {
        for x in sweep() {
            let f = FrenetFrameQuery::new(x).execute(&TwistedCubic).unwrap();
            assert!(f.tangent.dot(&f.normal).abs() < 1e-9);
            assert!(f.tangent.dot(&f.binormal).abs() < 1e-9);
            assert!(f.normal.dot(&f.binormal).abs() < 1e-9);
        }
    }

    #[test]
    fn normal_chirality_is_t_cross_b() {
        for x in sweep() {
            let f = FrenetFrameQuery::new(x).execute(&TwistedCubic).unwrap();
            assert_relative_eq!(f.normal, f.tangent.cross(&f.binormal), epsilon = 1e-12);
            // T x (T x B) = -B, so the triad closes as N x T = B.
            assert_relative_eq!(f.normal.cross(&f.tangent), f.binormal, epsilon = 1e-9);
            assert_relative_eq!(f.tangent.cross(&f.normal), -f.binormal, epsilon = 1e-9);
        }
    }

    #[test]
    fn normal_points_away_from_center_of_curvature() {
        // With N = T x B the normal is the negated principal normal:
        // it points away from the side f'' bends towards.
        let f = FrenetFrameQuery::new(0.5).execute(&TwistedCubic).unwrap();
        let second = TwistedCubic.second_derivative(0.5);
        assert!(f.normal.dot(&second) < 0.0);
    }

    #[test]
    fn reference_values_at_one() {
        let f = FrenetFrameQuery::new(1.0).execute(&TwistedCubic).unwrap();
        assert_relative_eq!(f.torsion, 12.0 / 76.0, epsilon = 1e-12);
        assert_relative_eq!(f.position, Point3::new(1.0, 1.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(
            f.tangent,
            Vector3::new(1.0, 2.0, 3.0) / 14f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn reference_values_at_origin() {
        let f = FrenetFrameQuery::new(0.0).execute(&TwistedCubic).unwrap();
        assert_relative_eq!(f.curvature, 2.0, epsilon = 1e-12);
        assert_relative_eq!(f.tangent, Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(f.binormal, Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(f.normal, -Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(f.torsion, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn helix_binormal_tilts_towards_axis() {
        let h = Helix::new(Point3::origin(), 1.0, Vector3::z(), Vector3::x(), 1.0, 0.0, 9.0)
            .unwrap();
        let f = FrenetFrameQuery::new(0.0).execute(&h).unwrap();
        // B = (0, -c, r) / sqrt(r^2 + c^2) at t = 0
        assert_relative_eq!(
            f.binormal,
            Vector3::new(0.0, -1.0, 1.0) / 2f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn infinite_third_derivative_is_rejected() {
        let point = CurvePoint {
            t: 0.0,
            position: Point3::origin(),
            first: Vector3::x(),
            second: Vector3::new(0.0, 2.0, 0.0),
            third: Vector3::new(0.0, 0.0, f64::INFINITY),
        };
        assert!(FrenetFrame::from_point(&point).is_err());
    }

    #[test]
    fn line_frame_is_undefined() {
        let l = Line::new(Point3::origin(), Vector3::x()).unwrap();
        assert!(FrenetFrameQuery::new(0.0).execute(&l).is_err());
    }
}
