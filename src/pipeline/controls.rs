use crate::animation::AnimationClock;
use crate::camera::{CameraMode, CameraPose, CameraRig};
use crate::error::Result;
use crate::math::Vector3;
use crate::operations::query::FrenetFrame;

/// Read-only mirror of the simulation for a parameter panel.
///
/// Refreshed once per tick. When the current frame is degenerate the
/// frame fields keep their last valid values and `degenerate` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    /// Current clock parameter.
    pub parameter: f64,
    /// Whether the clock is paused.
    pub paused: bool,
    /// Selected camera.
    pub camera_mode: CameraMode,
    /// Curvature of the held frame.
    pub curvature: f64,
    /// Torsion of the held frame.
    pub torsion: f64,
    /// Unit tangent of the held frame.
    pub tangent: Vector3,
    /// Unit normal of the held frame.
    pub normal: Vector3,
    /// Unit binormal of the held frame.
    pub binormal: Vector3,
    /// Set while the frame at `parameter` is undefined.
    pub degenerate: bool,
}

impl DisplayState {
    pub(crate) fn new(parameter: f64) -> Self {
        Self {
            parameter,
            paused: false,
            camera_mode: CameraMode::default(),
            curvature: 0.0,
            torsion: 0.0,
            tangent: Vector3::zeros(),
            normal: Vector3::zeros(),
            binormal: Vector3::zeros(),
            degenerate: false,
        }
    }

    pub(crate) fn set_frame(&mut self, frame: &FrenetFrame) {
        self.curvature = frame.curvature;
        self.torsion = frame.torsion;
        self.tangent = frame.tangent;
        self.normal = frame.normal;
        self.binormal = frame.binormal;
        self.degenerate = false;
    }
}

/// Write access for a control surface: pause, scrub, camera switch.
///
/// Changes take effect on the next tick or refresh.
pub struct Controls<'a> {
    pub(crate) clock: &'a mut AnimationClock,
    pub(crate) rig: &'a mut CameraRig,
}

impl Controls<'_> {
    /// Returns whether the clock is paused.
    #[must_use]
    pub fn paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Pauses or resumes the clock.
    pub fn set_paused(&mut self, paused: bool) {
        if paused {
            self.clock.pause();
        } else {
            self.clock.resume();
        }
    }

    /// Pauses when running, resumes when paused.
    pub fn toggle_pause(&mut self) {
        self.clock.toggle_pause();
    }

    /// Returns the current parameter.
    #[must_use]
    pub fn parameter(&self) -> f64 {
        self.clock.parameter()
    }

    /// Scrubs to `value`, pausing the clock. Returns the clamped value.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not finite.
    pub fn set_parameter(&mut self, value: f64) -> Result<f64> {
        self.clock.set_parameter(value)
    }

    /// Returns the selected camera mode.
    #[must_use]
    pub fn camera_mode(&self) -> CameraMode {
        self.rig.mode()
    }

    /// Selects a camera.
    pub fn set_camera_mode(&mut self, mode: CameraMode) {
        self.rig.set_mode(mode);
    }

    /// Switches to the other camera.
    pub fn toggle_camera_mode(&mut self) {
        self.rig.toggle_mode();
    }

    /// Forwards the orbit controller's camera pose.
    pub fn set_free_pose(&mut self, pose: CameraPose) {
        self.rig.set_free_pose(pose);
    }
}
