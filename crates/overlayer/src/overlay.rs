//! Top-level entry point pairing a source document with its page sizes.

use overlayer_core::{
    BoundingBox, BoxExtractor, DocumentModel, FeatureSet, OverlayError, PageDimensions,
};
use overlayer_parse::{ResolveOptions, resolve, resolve_bytes};

/// A source document whose page pixel sizes are known.
///
/// Resolves page dimensions once, then extracts boxes for any number of
/// analysis results of that document.
///
/// # Example
///
/// ```ignore
/// let overlay = Overlay::open_file("invoice.pdf", None)?;
/// let boxes = overlay.bounding_boxes(&document, &"line,form".parse()?)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    page_dimensions: Vec<PageDimensions>,
}

impl Overlay {
    /// Resolve page dimensions of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::IoError`] if the file cannot be read and
    /// [`OverlayError::UnsupportedFormat`] if it is neither a PDF nor a
    /// supported image.
    pub fn open_file(
        path: impl AsRef<std::path::Path>,
        options: Option<ResolveOptions>,
    ) -> Result<Self, OverlayError> {
        let options = options.unwrap_or_default();
        let page_dimensions = resolve(path, &options)?;
        Ok(Self { page_dimensions })
    }

    /// Resolve page dimensions of an in-memory document.
    ///
    /// # Errors
    ///
    /// Same as [`Overlay::open_file`], minus file access.
    pub fn open(bytes: &[u8], options: Option<ResolveOptions>) -> Result<Self, OverlayError> {
        let options = options.unwrap_or_default();
        let page_dimensions = resolve_bytes(bytes, &options)?;
        Ok(Self { page_dimensions })
    }

    /// Use page dimensions obtained elsewhere.
    pub fn from_dimensions(page_dimensions: Vec<PageDimensions>) -> Self {
        Self { page_dimensions }
    }

    pub fn page_count(&self) -> usize {
        self.page_dimensions.len()
    }

    /// Pixel size of each page, in page order.
    pub fn page_dimensions(&self) -> &[PageDimensions] {
        &self.page_dimensions
    }

    /// Extract the requested boxes of `document` scaled to these pages.
    ///
    /// # Errors
    ///
    /// See [`BoxExtractor::extract`].
    pub fn bounding_boxes<D: DocumentModel>(
        &self,
        document: &D,
        features: &FeatureSet,
    ) -> Result<Vec<BoundingBox>, OverlayError> {
        BoxExtractor::extract(document, features, &self.page_dimensions)
    }
}
