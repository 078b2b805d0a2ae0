mod curvature;
mod frame_vectors;
mod frenet_frame;
mod torsion;

pub use curvature::{curvature_at, Curvature};
pub use frame_vectors::{unit_binormal, unit_normal, unit_tangent, Binormal, Normal, Tangent};
pub use frenet_frame::{FrenetFrame, FrenetFrameQuery};
pub use torsion::{torsion_at, Torsion};
