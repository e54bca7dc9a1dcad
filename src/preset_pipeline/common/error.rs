use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Invalid intensity range: min={min}, max={max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("Invalid volume extent for camera normalization: {0:?}")]
    InvalidExtent([i32; 6]),

    #[error("Control point position is not finite: {0}")]
    NonFiniteControlPoint(f64),

    #[error("Invalid edited point at index {index}: {reason}")]
    InvalidEditedPoint { index: usize, reason: String },

    #[error("Host object not found: {0}")]
    MissingHostObject(String),

    #[error("Invalid scene description: {0}")]
    InvalidScene(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Unsupported transport: {0}")]
    UnsupportedTransport(String),

    #[error("Failed to launch renderer: {0}")]
    LaunchError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PresetError>;
