mod controls;
mod driver;
mod frame_update;
mod indicators;

pub use controls::{Controls, DisplayState};
pub use driver::{run, FixedTimestep, RenderSink, TickSource};
pub use frame_update::{FrameUpdatePipeline, PipelineConfig};
pub use indicators::{ArrowIndicator, FrameIndicators};
