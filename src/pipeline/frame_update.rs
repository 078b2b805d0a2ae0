use tracing::{trace, warn};

use crate::animation::{AnimationClock, ClockConfig};
use crate::camera::{CameraRig, Projection};
use crate::error::Result;
use crate::geometry::curve::Curve;
use crate::operations::query::FrenetFrame;
use crate::tessellation::{Polyline, SampleCurve, SamplingParams};

use super::{Controls, DisplayState, FrameIndicators, RenderSink};

/// Session configuration, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Sweep of the animation clock. Its domain, not [`Curve::domain`],
    /// decides which parameters are visited.
    pub clock: ClockConfig,
    /// Projection of the orbit camera.
    pub free_projection: Projection,
    /// Projection of the ride camera.
    pub ride_projection: Projection,
    /// Length of the T/N/B arrows.
    pub indicator_length: f64,
    /// Sampling of the curve path handed to the scene.
    pub path_sampling: SamplingParams,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            clock: ClockConfig::default(),
            free_projection: Projection::orbit(),
            ride_projection: Projection::ride(),
            indicator_length: 1.0,
            path_sampling: SamplingParams::default(),
        }
    }
}

/// Per-tick orchestrator owning the clock, the camera rig and the frame
/// indicators for one curve.
///
/// Each [`tick`](Self::tick) runs, in order: clock advance, frame
/// evaluation, indicator and ride camera update, render request. A
/// degenerate frame never reaches the render path; the last valid frame
/// and pose are held instead.
#[derive(Debug)]
pub struct FrameUpdatePipeline<C> {
    curve: C,
    config: PipelineConfig,
    clock: AnimationClock,
    rig: CameraRig,
    indicators: FrameIndicators,
    display: DisplayState,
    last_frame: Option<FrenetFrame>,
}

impl<C: Curve> FrameUpdatePipeline<C> {
    /// Creates the pipeline and evaluates the frame at the starting parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the clock configuration is invalid.
    pub fn new(curve: C, config: PipelineConfig) -> Result<Self> {
        let clock = AnimationClock::new(config.clock)?;
        let mut pipeline = Self {
            curve,
            config,
            display: DisplayState::new(clock.parameter()),
            clock,
            rig: CameraRig::new(config.free_projection, config.ride_projection),
            indicators: FrameIndicators::new(config.indicator_length),
            last_frame: None,
        };
        pipeline.update();
        Ok(pipeline)
    }

    /// Like [`new`](Self::new), but sweeps the curve's own domain when it is
    /// bounded. Unbounded curves keep `config.clock.domain`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting clock configuration is invalid.
    pub fn over_curve_domain(curve: C, mut config: PipelineConfig) -> Result<Self> {
        let domain = curve.domain();
        if domain.t_min.is_finite() && domain.t_max.is_finite() {
            config.clock.domain = domain;
        }
        Self::new(curve, config)
    }

    /// Advances the clock one step, then [`refresh`](Self::refresh)es.
    pub fn tick<R: RenderSink + ?Sized>(&mut self, sink: &mut R) {
        let parameter = self.clock.tick();
        trace!(parameter, ticks = self.clock.elapsed_ticks(), "tick");
        self.refresh(sink);
    }

    /// Re-evaluates the frame at the current parameter, updates indicators
    /// and cameras, and requests a render. Does not advance the clock, so
    /// repeated calls without intervening changes render the same state.
    pub fn refresh<R: RenderSink + ?Sized>(&mut self, sink: &mut R) {
        self.update();
        sink.render(&self.rig.active(), &self.indicators);
    }

    /// Control surface for pause, scrub and camera switching.
    pub fn controls(&mut self) -> Controls<'_> {
        Controls {
            clock: &mut self.clock,
            rig: &mut self.rig,
        }
    }

    /// Display mirror as of the last tick or refresh.
    #[must_use]
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Last non-degenerate frame, if any has been seen.
    #[must_use]
    pub fn frame(&self) -> Option<&FrenetFrame> {
        self.last_frame.as_ref()
    }

    /// Frame indicators as of the last tick or refresh.
    #[must_use]
    pub fn indicators(&self) -> &FrameIndicators {
        &self.indicators
    }

    /// The camera rig.
    #[must_use]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// The animation clock.
    #[must_use]
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// The curve being ridden.
    #[must_use]
    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// Samples the curve over the clock domain for drawing its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the sampling step is invalid.
    pub fn path(&self) -> Result<Polyline> {
        SampleCurve::new(self.config.clock.domain, self.config.path_sampling).execute(&self.curve)
    }

    fn update(&mut self) {
        let parameter = self.clock.parameter();
        match FrenetFrame::from_point(&self.curve.point(parameter)) {
            Ok(frame) => {
                self.indicators.update(&frame);
                if !self.rig.update_ride(&frame) {
                    warn!(parameter, "ride camera pose not finite, holding previous pose");
                }
                self.display.set_frame(&frame);
                self.last_frame = Some(frame);
            }
            Err(err) => {
                if !self.display.degenerate {
                    warn!(parameter, %err, "degenerate frame, holding last valid frame");
                }
                self.display.degenerate = true;
            }
        }
        self.display.parameter = parameter;
        self.display.paused = self.clock.is_paused();
        self.display.camera_mode = self.rig.mode();
    }
}
