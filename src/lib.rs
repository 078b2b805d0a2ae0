pub mod animation;
pub mod camera;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod pipeline;
pub mod tessellation;

pub use error::{FrenetError, Result};
