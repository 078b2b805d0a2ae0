//! Headless ride along the twisted cubic.
//!
//! ```text
//! cargo run --example headless              # one full sweep, orbit camera
//! cargo run --example headless -- ride      # same, through the ride camera
//! RUST_LOG=frenet_ride=trace cargo run --example headless
//! ```

use std::time::Duration;

use frenet_ride::camera::{ActiveCamera, CameraMode};
use frenet_ride::geometry::TwistedCubic;
use frenet_ride::pipeline::{self, FixedTimestep, FrameIndicators, FrameUpdatePipeline, PipelineConfig, RenderSink};
use tracing::info;

/// Logs every tenth render request instead of drawing.
#[derive(Default)]
struct LogSink {
    count: u64,
}

impl RenderSink for LogSink {
    fn render(&mut self, camera: &ActiveCamera, indicators: &FrameIndicators) {
        if self.count % 10 == 0 {
            let eye = camera.pose.position;
            let t = indicators.tangent.direction;
            info!(
                frame = self.count,
                mode = ?camera.mode,
                eye = %format!("({:.3}, {:.3}, {:.3})", eye.x, eye.y, eye.z),
                tangent = %format!("({:.3}, {:.3}, {:.3})", t.x, t.y, t.z),
                "render"
            );
        }
        self.count += 1;
    }
}

fn main() -> frenet_ride::Result<()> {
    // Default: WARN for everything, INFO for this demo and the engine.
    // Override with RUST_LOG env var.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("headless=info".parse().unwrap_or_default())
        .add_directive("frenet_ride=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = PipelineConfig::default();
    let mut pipeline = FrameUpdatePipeline::new(TwistedCubic, config)?;
    if std::env::args().nth(1).as_deref() == Some("ride") {
        pipeline.controls().set_camera_mode(CameraMode::RideAlong);
    }
    info!(points = pipeline.path()?.points.len(), "curve path sampled");

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let period = config.clock.period_ticks() as u64;
    let mut source = FixedTimestep::new(Duration::from_millis(1)).with_limit(period);
    let mut sink = LogSink::default();
    let ticks = pipeline::run(&mut pipeline, &mut source, &mut sink);

    let shown = pipeline.display();
    info!(
        ticks,
        parameter = shown.parameter,
        curvature = shown.curvature,
        torsion = shown.torsion,
        "sweep finished"
    );
    Ok(())
}
