use thiserror::Error;

/// Top-level error type for the Frenet ride engine.
#[derive(Debug, Error)]
pub enum FrenetError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Animation(#[from] AnimationError),
}

/// Errors related to curve construction and differential-geometry queries.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    /// The first derivative vanishes, so the tangent is undefined.
    #[error("zero-length vector")]
    ZeroVector,

    /// `f' x f''` vanishes, so the binormal and torsion are undefined.
    #[error("zero curvature: binormal and torsion are undefined")]
    ZeroCurvature,
}

/// Errors related to the animation clock and its manual controls.
#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("parameter override must be finite, got {0}")]
    NonFiniteParameter(f64),

    #[error("speed divisor must be positive and finite, got {0}")]
    InvalidSpeed(f64),

    #[error("animation domain [{min}, {max}] is empty")]
    EmptyDomain { min: f64, max: f64 },
}

/// Convenience type alias for results using [`FrenetError`].
pub type Result<T> = std::result::Result<T, FrenetError>;
