use nalgebra::Perspective3;

use crate::math::{is_finite, Matrix4, Point3, Vector3};

/// Camera placement in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position.
    pub position: Point3,
    /// Look-at target.
    pub target: Point3,
    /// Up vector.
    pub up: Vector3,
}

impl CameraPose {
    /// Creates a new pose.
    #[must_use]
    pub fn new(position: Point3, target: Point3, up: Vector3) -> Self {
        Self {
            position,
            target,
            up,
        }
    }

    /// Direction from the eye towards the target (not normalized).
    #[must_use]
    pub fn look_direction(&self) -> Vector3 {
        self.target - self.position
    }

    /// Returns `true` when every coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        is_finite(&self.position.coords) && is_finite(&self.target.coords) && is_finite(&self.up)
    }

    /// Right-handed world-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Matrix4 {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 5.0),
            target: Point3::origin(),
            up: Vector3::y(),
        }
    }
}

/// Perspective projection settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f64,
    /// Near clipping plane.
    pub near: f64,
    /// Far clipping plane.
    pub far: f64,
}

impl Projection {
    /// Projection of the user-controlled orbit camera.
    #[must_use]
    pub fn orbit() -> Self {
        Self {
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Projection of the ride camera. It sits on the curve, so the near
    /// plane must be tiny or the frame indicators get clipped.
    #[must_use]
    pub fn ride() -> Self {
        Self {
            fov_y_degrees: 75.0,
            near: 0.00001,
            far: 1000.0,
        }
    }

    /// Projection matrix for a viewport with the given width / height ratio.
    #[must_use]
    pub fn matrix(&self, aspect: f64) -> Matrix4 {
        Perspective3::new(aspect, self.fov_y_degrees.to_radians(), self.near, self.far)
            .to_homogeneous()
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::orbit()
    }
}
