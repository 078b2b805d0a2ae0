use tracing::{debug, warn};

use crate::operations::query::FrenetFrame;

use super::{CameraPose, Projection};

/// Which camera the rig renders through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// User-controlled orbit camera.
    #[default]
    FreeOrbit,
    /// Camera riding the curve, looking along the tangent with the binormal up.
    RideAlong,
}

impl CameraMode {
    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::FreeOrbit => Self::RideAlong,
            Self::RideAlong => Self::FreeOrbit,
        }
    }
}

/// The camera a render request is made with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveCamera {
    /// Mode the camera was selected by.
    pub mode: CameraMode,
    /// World-space pose.
    pub pose: CameraPose,
    /// Projection settings.
    pub projection: Projection,
}

/// Two cameras and the switch between them.
///
/// The free pose is only mirrored here: an external orbit controller owns
/// it and pushes updates through [`CameraRig::set_free_pose`]. The ride pose
/// is derived from the latest valid [`FrenetFrame`] and held when a frame
/// turns out degenerate.
#[derive(Debug, Clone)]
pub struct CameraRig {
    mode: CameraMode,
    free_pose: CameraPose,
    ride_pose: CameraPose,
    free_projection: Projection,
    ride_projection: Projection,
}

impl CameraRig {
    /// Creates a rig in [`CameraMode::FreeOrbit`] with default poses.
    #[must_use]
    pub fn new(free_projection: Projection, ride_projection: Projection) -> Self {
        Self {
            mode: CameraMode::FreeOrbit,
            free_pose: CameraPose::default(),
            ride_pose: CameraPose::default(),
            free_projection,
            ride_projection,
        }
    }

    /// Selects a camera. Always legal, takes effect on the next render.
    pub fn set_mode(&mut self, mode: CameraMode) {
        if self.mode != mode {
            debug!(from = ?self.mode, to = ?mode, "camera mode switched");
            self.mode = mode;
        }
    }

    /// Switches to the other camera.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Returns the selected camera mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Mirrors the pose of the externally controlled orbit camera.
    ///
    /// Non-finite poses are ignored.
    pub fn set_free_pose(&mut self, pose: CameraPose) {
        if pose.is_finite() {
            self.free_pose = pose;
        } else {
            warn!(?pose, "ignoring non-finite orbit camera pose");
        }
    }

    /// Returns the orbit camera pose.
    #[must_use]
    pub fn free_pose(&self) -> &CameraPose {
        &self.free_pose
    }

    /// Returns the ride camera pose.
    #[must_use]
    pub fn ride_pose(&self) -> &CameraPose {
        &self.ride_pose
    }

    /// Places the ride camera on the curve: eye at the curve position,
    /// target one unit ahead along the tangent, binormal as up.
    ///
    /// Returns `false` and keeps the previous pose if the result would not
    /// be finite.
    pub fn update_ride(&mut self, frame: &FrenetFrame) -> bool {
        let pose = CameraPose::new(frame.position, frame.position + frame.tangent, frame.binormal);
        if !pose.is_finite() {
            return false;
        }
        self.ride_pose = pose;
        true
    }

    /// Returns the camera selected by the current mode.
    #[must_use]
    pub fn active(&self) -> ActiveCamera {
        match self.mode {
            CameraMode::FreeOrbit => ActiveCamera {
                mode: self.mode,
                pose: self.free_pose,
                projection: self.free_projection,
            },
            CameraMode::RideAlong => ActiveCamera {
                mode: self.mode,
                pose: self.ride_pose,
                projection: self.ride_projection,
            },
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(Projection::orbit(), Projection::ride())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::TwistedCubic;
    use crate::math::{Point3, Vector3};
    use crate::operations::query::FrenetFrameQuery;
    use approx::assert_relative_eq;

    #[test]
    fn starts_in_free_orbit() {
        let rig = CameraRig::default();
        assert_eq!(rig.mode(), CameraMode::FreeOrbit);
        assert_eq!(rig.active().pose, CameraPose::default());
        assert_eq!(rig.active().projection, Projection::orbit());
    }

    #[test]
    fn ride_pose_follows_frame() {
        let mut rig = CameraRig::default();
        let frame = FrenetFrameQuery::new(0.0).execute(&TwistedCubic).unwrap();
        assert!(rig.update_ride(&frame));
        let pose = rig.ride_pose();
        assert_relative_eq!(pose.position, Point3::origin());
        assert_relative_eq!(pose.target, Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(pose.up, Vector3::z());
    }

    #[test]
    fn switching_is_instant() {
        let mut rig = CameraRig::default();
        let frame = FrenetFrameQuery::new(1.0).execute(&TwistedCubic).unwrap();
        rig.update_ride(&frame);
        rig.set_mode(CameraMode::RideAlong);
        let active = rig.active();
        assert_eq!(active.mode, CameraMode::RideAlong);
        assert_eq!(active.pose, *rig.ride_pose());
        assert_eq!(active.projection, Projection::ride());
        rig.toggle_mode();
        assert_eq!(rig.active().pose, *rig.free_pose());
    }

    #[test]
    fn non_finite_frame_keeps_previous_pose() {
        let mut rig = CameraRig::default();
        let good = FrenetFrameQuery::new(0.5).execute(&TwistedCubic).unwrap();
        rig.update_ride(&good);
        let held = *rig.ride_pose();
        let bad = FrenetFrame {
            tangent: Vector3::new(f64::NAN, 0.0, 0.0),
            ..good
        };
        assert!(!rig.update_ride(&bad));
        assert_eq!(*rig.ride_pose(), held);
    }

    #[test]
    fn non_finite_free_pose_ignored() {
        let mut rig = CameraRig::default();
        let pose = CameraPose::new(Point3::new(f64::INFINITY, 0.0, 0.0), Point3::origin(), Vector3::y());
        rig.set_free_pose(pose);
        assert_eq!(*rig.free_pose(), CameraPose::default());
    }
}
