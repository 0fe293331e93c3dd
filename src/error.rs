// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the studio library.

use std::fmt;

/// Result type alias for studio operations.
pub type Result<T> = std::result::Result<T, StudioError>;

/// Main error type for the studio library.
#[derive(Debug)]
pub enum StudioError {
    /// Error encoding or writing still image data.
    ImageError(String),
    /// Animated GIF encoding error.
    EncodeError(String),
    /// Editor window error.
    VisualizerError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for StudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
            Self::EncodeError(msg) => write!(f, "Encode error: {msg}"),
            Self::VisualizerError(msg) => write!(f, "Visualizer error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for StudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StudioError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for StudioError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}

impl From<gif::EncodingError> for StudioError {
    fn from(err: gif::EncodingError) -> Self {
        Self::EncodeError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StudioError::ImageError("test".to_string());
        assert_eq!(err.to_string(), "Image error: test");

        let err = StudioError::EncodeError("test".to_string());
        assert_eq!(err.to_string(), "Encode error: test");
    }
}
