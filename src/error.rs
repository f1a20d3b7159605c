//! Error types for the motion sentinel.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// `OpenCV` operation failed
    #[error("OpenCV error: {0}")]
    OpenCV(#[from] opencv::Error),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Face detector backing data could not be loaded
    #[error("Resource load error: {0}")]
    ResourceLoad(String),

    /// Camera could not be opened or produced an unusable frame
    #[error("Frame acquisition error: {0}")]
    Acquisition(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
