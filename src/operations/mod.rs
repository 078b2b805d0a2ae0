pub mod query;

pub use query::{Curvature, FrenetFrame, FrenetFrameQuery, Torsion};
