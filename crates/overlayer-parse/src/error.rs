//! Error types for page dimension resolution.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides
//! [`ResolveError`] that wraps PDF and raster decoding errors and converts
//! them to [`OverlayError`].

use overlayer_core::OverlayError;
use thiserror::Error;

/// Error type for dimension resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Error reading the input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from PDF parsing (structure, syntax, object resolution).
    #[error("PDF parse error: {0}")]
    Pdf(String),

    /// Error reading a raster image header.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// The input is neither a PDF nor a recognized raster image.
    #[error("unsupported document format: {0}")]
    Unsupported(String),

    /// The PDF is encrypted.
    #[error("PDF is encrypted")]
    Encrypted,

    /// A core library error.
    #[error(transparent)]
    Core(#[from] OverlayError),
}

impl From<ResolveError> for OverlayError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Io(e) => OverlayError::IoError(e.to_string()),
            ResolveError::Pdf(msg) => OverlayError::ParseError(msg),
            ResolveError::Image(image::ImageError::IoError(e)) => {
                OverlayError::IoError(e.to_string())
            }
            ResolveError::Image(e @ image::ImageError::Unsupported(_)) => {
                OverlayError::UnsupportedFormat(e.to_string())
            }
            ResolveError::Image(e) => OverlayError::ParseError(e.to_string()),
            ResolveError::Unsupported(msg) => OverlayError::UnsupportedFormat(msg),
            ResolveError::Encrypted => OverlayError::ParseError("PDF is encrypted".to_string()),
            ResolveError::Core(e) => e,
        }
    }
}
