//! Error types for loading, navigation and configuration.

use thiserror::Error;

/// Errors raised while loading frames or navigating between them.
///
/// All variants are recoverable: a failing operation leaves the previously
/// loaded frames and navigation state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Source bytes were malformed or could not be read.
    #[error("failed to decode image: {0}")]
    Decode(String),
    /// The decoder produced no frames.
    #[error("no frames found in image")]
    EmptySequence,
    /// A jump or lookup targeted an index outside `0..len`.
    #[error("frame index {index} out of range (frame count {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// A decoded frame has a zero dimension.
    #[error("frame {index} has invalid dimensions {width}x{height}")]
    InvalidFrame { index: usize, width: u32, height: u32 },
}

/// Errors raised when a [`ViewerConfig`](crate::ViewerConfig) is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A viewport dimension is not a positive, finite number.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    /// Zoom limits are non-positive or do not bracket 1.0.
    #[error("invalid zoom limits [{min}, {max}]")]
    InvalidZoomLimits { min: f64, max: f64 },
    /// The multiplicative zoom step must be greater than 1.0.
    #[error("invalid zoom step {0}")]
    InvalidZoomStep(f64),
    /// The TOML document could not be parsed.
    #[cfg(feature = "toml")]
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}
