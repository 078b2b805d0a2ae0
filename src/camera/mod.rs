mod pose;
mod rig;

pub use pose::{CameraPose, Projection};
pub use rig::{ActiveCamera, CameraMode, CameraRig};
