/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Normalizes `v`, or returns `None` when its length is below [`TOLERANCE`].
#[must_use]
pub fn try_normalize(v: &Vector3) -> Option<Vector3> {
    v.try_normalize(TOLERANCE)
}

/// Returns `true` when every component of `v` is finite.
#[must_use]
pub fn is_finite(v: &Vector3) -> bool {
    v.iter().all(|c| c.is_finite())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn normalize_rejects_zero() {
        assert!(try_normalize(&Vector3::zeros()).is_none());
    }

    #[test]
    fn normalize_unit_length() {
        let n = try_normalize(&Vector3::new(3.0, 4.0, 0.0)).unwrap();
        assert!((n.norm() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(!is_finite(&Vector3::new(0.0, f64::NAN, 1.0)));
        assert!(is_finite(&Vector3::new(0.0, -2.0, 1.0)));
    }
}
