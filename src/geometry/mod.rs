pub mod curve;

pub use curve::{Curve, CurveDomain, CurvePoint, Helix, Line, TwistedCubic};
