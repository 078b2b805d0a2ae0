mod clock;

pub use clock::{AnimationClock, ClockConfig, ClockMode};
