//! Error types for overlayer.
//!
//! Provides [`OverlayError`], the single fatal error type shared by box
//! extraction and page dimension resolution. Every variant aborts the
//! current document; there is no partial-result mode.

use std::fmt;

use crate::feature::BoxType;

/// Fatal error types for overlay extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayError {
    /// An element selected for extraction carries no geometry.
    MissingGeometry {
        /// Type of the box that was being constructed.
        box_type: BoxType,
        /// 1-based page number of the element.
        page_number: usize,
    },
    /// The document has more pages than page dimensions were supplied for.
    MissingPageDimensions {
        /// 1-based page number that has no dimensions.
        page_number: usize,
        /// Number of page dimension entries that were supplied.
        available: usize,
    },
    /// A page resolved to a zero width or height.
    InvalidPageSize {
        /// 1-based page number.
        page_number: usize,
        /// Resolved width in pixels.
        width: u32,
        /// Resolved height in pixels.
        height: u32,
    },
    /// The input file is not a PDF or a supported raster image.
    UnsupportedFormat(String),
    /// Error parsing the input document structure.
    ParseError(String),
    /// I/O error reading the input document.
    IoError(String),
    /// A configured resource limit was exceeded.
    ResourceLimitExceeded {
        /// Name of the limit that was exceeded (e.g., "max_input_bytes").
        limit_name: String,
        /// The configured limit value.
        limit_value: usize,
        /// The actual value that exceeded the limit.
        actual_value: usize,
    },
    /// A feature name could not be parsed.
    InvalidFeature(String),
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayError::MissingGeometry {
                box_type,
                page_number,
            } => write!(
                f,
                "need geometry to create {box_type} bounding box on page {page_number}"
            ),
            OverlayError::MissingPageDimensions {
                page_number,
                available,
            } => write!(
                f,
                "no page dimensions for page {page_number} ({available} supplied)"
            ),
            OverlayError::InvalidPageSize {
                page_number,
                width,
                height,
            } => write!(
                f,
                "page {page_number} has an empty size ({width}x{height} pixels)"
            ),
            OverlayError::UnsupportedFormat(msg) => write!(f, "unsupported format: {msg}"),
            OverlayError::ParseError(msg) => write!(f, "parse error: {msg}"),
            OverlayError::IoError(msg) => write!(f, "I/O error: {msg}"),
            OverlayError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
            } => write!(
                f,
                "resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value})"
            ),
            OverlayError::InvalidFeature(name) => write!(f, "unknown feature type: '{name}'"),
        }
    }
}

impl std::error::Error for OverlayError {}

impl From<std::io::Error> for OverlayError {
    fn from(err: std::io::Error) -> Self {
        OverlayError::IoError(err.to_string())
    }
}
