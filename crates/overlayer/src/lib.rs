//! overlayer: Turn normalized document-analysis geometry into pixel boxes.
//!
//! This is the public API facade crate. It re-exports types from
//! overlayer-core and uses overlayer-parse to size pages.
//!
//! # Architecture
//!
//! - **overlayer-core**: Value types, document model trait, box extraction
//! - **overlayer-parse**: Page dimension resolution for PDFs and images
//! - **overlayer** (this crate): Public API that ties everything together
//!
//! # Example
//!
//! ```ignore
//! use overlayer::{FeatureSet, FeatureType, Overlay};
//!
//! let overlay = Overlay::open_file("scan.pdf", None)?;
//! let features = FeatureSet::from([FeatureType::Line, FeatureType::Form]);
//! for b in overlay.bounding_boxes(&document, &features)? {
//!     println!("{b}");
//! }
//! ```

#[cfg(feature = "parallel")]
mod batch;
mod overlay;

pub use overlayer_core;
pub use overlayer_parse;

pub use overlayer_core::{
    Block, BoundingBox, BoxExtractor, BoxType, CELL_TEXT, Document, DocumentModel, Element,
    FeatureSet, FeatureType, NormalizedGeometry, OverlayError, Page, PageDimensions, Query,
    TABLE_TEXT,
};
pub use overlayer_parse::{DocumentFormat, PageBox, ResolveError, ResolveOptions};

#[cfg(feature = "parallel")]
pub use batch::{BatchItem, extract_batch};
pub use overlay::Overlay;

/// Resolve the pixel size of every page of the file at `path`.
///
/// # Errors
///
/// Returns [`OverlayError::IoError`] for unreadable files and
/// [`OverlayError::UnsupportedFormat`] for files that are neither PDFs nor
/// supported images.
pub fn resolve(
    path: impl AsRef<std::path::Path>,
    options: &ResolveOptions,
) -> Result<Vec<PageDimensions>, OverlayError> {
    Ok(overlayer_parse::resolve(path, options)?)
}

/// Extract the requested boxes of `document` scaled to `page_dimensions`.
///
/// Shorthand for [`BoxExtractor::extract`].
///
/// # Errors
///
/// See [`BoxExtractor::extract`].
pub fn extract<D: DocumentModel>(
    document: &D,
    features: &FeatureSet,
    page_dimensions: &[PageDimensions],
) -> Result<Vec<BoundingBox>, OverlayError> {
    BoxExtractor::extract(document, features, page_dimensions)
}
