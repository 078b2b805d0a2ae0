mod sample_curve;

pub use sample_curve::SampleCurve;

use crate::math::Point3;

/// Parameters controlling how densely a curve path is sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    /// Parameter increment between consecutive samples.
    pub step: f64,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self { step: 0.01 }
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}
