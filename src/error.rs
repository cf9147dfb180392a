use thiserror::Error;

/// Top-level error type for the morphing library.
#[derive(Debug, Error)]
pub enum MorphError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Animation(#[from] AnimationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
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

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Errors raised while constructing a curve animation.
#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("a curve needs at least one sample point")]
    EmptySamples,

    #[error("sample point {index} is not finite")]
    NonFiniteSample { index: usize },

    #[error("mapping is undefined at sample point {index}")]
    UndefinedImage { index: usize },

    #[error("animation duration must be finite and positive, got {0}")]
    InvalidDuration(f64),
}

/// Errors related to startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid grid configuration: {0}")]
    Invalid(String),
}

/// Convenience type alias for results using [`MorphError`].
pub type Result<T> = std::result::Result<T, MorphError>;
