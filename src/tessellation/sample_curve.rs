use crate::error::{GeometryError, Result};
use crate::geometry::curve::{Curve, CurveDomain};

use super::{Polyline, SamplingParams};

/// Samples a curve into the polyline drawn as its path.
///
/// Samples start at `t_min` and advance by `step` while strictly below
/// `t_max`, so the end of the domain itself is not emitted.
pub struct SampleCurve {
    domain: CurveDomain,
    params: SamplingParams,
}

impl SampleCurve {
    /// Creates a new `SampleCurve` operation.
    #[must_use]
    pub fn new(domain: CurveDomain, params: SamplingParams) -> Self {
        Self { domain, params }
    }

    /// Executes the sampling, returning a polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is not positive and finite or the domain
    /// is unbounded.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self, curve: &impl Curve) -> Result<Polyline> {
        let step = self.params.step;
        if !step.is_finite() || step <= 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "step",
                value: step,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        let CurveDomain { t_min, t_max } = self.domain;
        if !t_min.is_finite() || !t_max.is_finite() {
            return Err(GeometryError::Degenerate("cannot sample an unbounded domain".into()).into());
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = ((t_max - t_min) / step).ceil().max(0.0) as usize;
        let points = (0..count)
            .map(|i| t_min + i as f64 * step)
            .filter(|&t| t < t_max)
            .map(|t| curve.evaluate(t))
            .collect();

        Ok(Polyline { points })
    }
}
