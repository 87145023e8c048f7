//! Page dimension source trait.
//!
//! Defines the [`DimensionSource`] trait that abstracts reading page pixel
//! sizes from one family of file formats. Sources are stateless: every call
//! works on the raw bytes of a whole file.

use overlayer_core::PageDimensions;

use crate::error::ResolveError;
use crate::options::ResolveOptions;

/// Trait abstracting page size inspection for one file format family.
///
/// # Usage
///
/// ```ignore
/// if PdfSource::probe(&bytes) {
///     let pages = PdfSource::page_dimensions(&bytes, &ResolveOptions::default())?;
/// }
/// ```
pub trait DimensionSource {
    /// Short human-readable name of the format family.
    const NAME: &'static str;

    /// Whether `bytes` look like a file this source can read.
    fn probe(bytes: &[u8]) -> bool;

    /// Pixel dimensions of every page, in page order.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be parsed or a page has an
    /// empty size.
    fn page_dimensions(
        bytes: &[u8],
        options: &ResolveOptions,
    ) -> Result<Vec<PageDimensions>, ResolveError>;
}
