use std::time::{Duration, Instant};

use tracing::debug;

use crate::camera::ActiveCamera;
use crate::geometry::curve::Curve;

use super::{FrameIndicators, FrameUpdatePipeline};

/// Receives one render request per tick.
pub trait RenderSink {
    /// Draws the scene through `camera` with the current frame indicators.
    fn render(&mut self, camera: &ActiveCamera, indicators: &FrameIndicators);
}

/// Paces the main loop, typically tied to display refresh.
pub trait TickSource {
    /// Blocks until the next frame is due. Returns `false` to stop the loop.
    fn wait_for_next_tick(&mut self) -> bool;
}

/// Tick source with a fixed interval and an optional tick limit.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    interval: Duration,
    remaining: Option<u64>,
    next_deadline: Option<Instant>,
}

impl FixedTimestep {
    /// Ticks forever every `interval`.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            remaining: None,
            next_deadline: None,
        }
    }

    /// Stops after `ticks` ticks.
    #[must_use]
    pub fn with_limit(mut self, ticks: u64) -> Self {
        self.remaining = Some(ticks);
        self
    }

    /// Roughly 60 frames per second.
    #[must_use]
    pub fn sixty_hz() -> Self {
        Self::new(Duration::from_micros(16_667))
    }
}

impl TickSource for FixedTimestep {
    fn wait_for_next_tick(&mut self) -> bool {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return false;
            }
            *remaining -= 1;
        }

        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now);
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        // Late frames are not made up for.
        self.next_deadline = Some(deadline.max(now) + self.interval);
        true
    }
}

/// Drives `pipeline` until `source` stops. Returns the number of ticks run.
pub fn run<C, S, R>(pipeline: &mut FrameUpdatePipeline<C>, source: &mut S, sink: &mut R) -> u64
where
    C: Curve,
    S: TickSource + ?Sized,
    R: RenderSink + ?Sized,
{
    let mut ticks = 0;
    while source.wait_for_next_tick() {
        pipeline.tick(sink);
        ticks += 1;
    }
    debug!(ticks, "main loop stopped");
    ticks
}
