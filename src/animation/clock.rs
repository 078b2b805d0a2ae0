use tracing::debug;

use crate::error::{AnimationError, Result};
use crate::geometry::curve::CurveDomain;

/// Fixed configuration of the animation clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockConfig {
    /// Parameter interval swept by the clock.
    pub domain: CurveDomain,
    /// Ticks per unit of parameter.
    pub speed_divisor: f64,
}

impl ClockConfig {
    /// Checks that the domain is non-empty and the speed is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is empty or unbounded, or the speed
    /// divisor is not positive and finite.
    pub fn validate(&self) -> Result<()> {
        let CurveDomain { t_min, t_max } = self.domain;
        if !t_min.is_finite() || !t_max.is_finite() || t_max <= t_min {
            return Err(AnimationError::EmptyDomain { min: t_min, max: t_max }.into());
        }
        if !self.speed_divisor.is_finite() || self.speed_divisor <= 0.0 {
            return Err(AnimationError::InvalidSpeed(self.speed_divisor).into());
        }
        Ok(())
    }

    /// Number of ticks in one full sweep of the domain.
    #[must_use]
    pub fn period_ticks(&self) -> f64 {
        self.domain.width() * self.speed_divisor
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            domain: CurveDomain::new(-2.0, 2.0),
            speed_divisor: 50.0,
        }
    }
}

/// Whether the clock advances on tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMode {
    /// Each tick advances the counter.
    Running,
    /// The counter is frozen.
    Paused,
}

/// Sawtooth parameter clock.
///
/// While running, each tick bumps a counter and sets
/// `parameter = (ticks / speed_divisor) mod width + t_min`. While paused the
/// counter is frozen and the parameter only moves through
/// [`AnimationClock::set_parameter`].
#[derive(Debug, Clone)]
pub struct AnimationClock {
    config: ClockConfig,
    elapsed_ticks: u64,
    mode: ClockMode,
    parameter: f64,
}

impl AnimationClock {
    /// Creates a running clock at counter zero, i.e. at `t_min`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: ClockConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            elapsed_ticks: 0,
            mode: ClockMode::Running,
            parameter: config.domain.t_min,
        })
    }

    /// Advances the clock by one tick and returns the current parameter.
    ///
    /// Does nothing while paused.
    pub fn tick(&mut self) -> f64 {
        if self.mode == ClockMode::Running {
            self.elapsed_ticks += 1;
            self.parameter = self.sweep_position();
        }
        self.parameter
    }

    /// Stops the counter.
    pub fn pause(&mut self) {
        if self.mode != ClockMode::Paused {
            debug!(ticks = self.elapsed_ticks, parameter = self.parameter, "clock paused");
            self.mode = ClockMode::Paused;
        }
    }

    /// Restarts the counter from where it stopped.
    ///
    /// A manual override made while paused is discarded on the next tick:
    /// the parameter jumps back onto the sweep.
    pub fn resume(&mut self) {
        if self.mode != ClockMode::Running {
            debug!(ticks = self.elapsed_ticks, "clock resumed");
            self.mode = ClockMode::Running;
        }
    }

    /// Pauses when running, resumes when paused.
    pub fn toggle_pause(&mut self) {
        match self.mode {
            ClockMode::Running => self.pause(),
            ClockMode::Paused => self.resume(),
        }
    }

    /// Sets the parameter by hand and forces the clock into [`ClockMode::Paused`].
    ///
    /// Out-of-range values are clamped into the closed domain. Returns the
    /// value actually applied.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is NaN or infinite. The clock is left
    /// untouched in that case.
    pub fn set_parameter(&mut self, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(AnimationError::NonFiniteParameter(value).into());
        }
        self.pause();
        self.parameter = self.config.domain.clamp(value);
        debug!(requested = value, applied = self.parameter, "parameter override");
        Ok(self.parameter)
    }

    /// Returns the current parameter.
    #[must_use]
    pub fn parameter(&self) -> f64 {
        self.parameter
    }

    /// Returns the number of ticks counted while running.
    #[must_use]
    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    /// Returns whether the clock is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.mode == ClockMode::Paused
    }

    /// Returns the clock configuration.
    #[must_use]
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    #[allow(clippy::cast_precision_loss)]
    fn sweep_position(&self) -> f64 {
        let domain = self.config.domain;
        (self.elapsed_ticks as f64 / self.config.speed_divisor).rem_euclid(domain.width())
            + domain.t_min
    }
}
