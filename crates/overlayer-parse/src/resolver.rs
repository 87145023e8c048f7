//! Page dimension resolution for documents on disk or in memory.
//!
//! Sniffs the format from the leading bytes (never from the file extension)
//! and dispatches to the matching [`DimensionSource`].

use std::path::Path;

use overlayer_core::{OverlayError, PageDimensions};

use crate::error::ResolveError;
use crate::options::ResolveOptions;
use crate::pdf_source::PdfSource;
use crate::raster_source::RasterSource;
use crate::source::DimensionSource;

/// Detected family of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Raster(image::ImageFormat),
}

impl DocumentFormat {
    /// Detect the format of `bytes`, or `None` if unsupported.
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        if PdfSource::probe(bytes) {
            Some(DocumentFormat::Pdf)
        } else {
            RasterSource::detect(bytes).map(DocumentFormat::Raster)
        }
    }
}

/// Resolve the pixel dimensions of every page of an in-memory document.
///
/// # Errors
///
/// Returns [`ResolveError::Unsupported`] for bytes that are neither a PDF
/// nor a recognized image, and a parse error for malformed inputs.
pub fn resolve_bytes(
    bytes: &[u8],
    options: &ResolveOptions,
) -> Result<Vec<PageDimensions>, ResolveError> {
    if let Some(max_bytes) = options.max_input_bytes {
        if bytes.len() > max_bytes {
            return Err(OverlayError::ResourceLimitExceeded {
                limit_name: "max_input_bytes".to_string(),
                limit_value: max_bytes,
                actual_value: bytes.len(),
            }
            .into());
        }
    }

    let format = DocumentFormat::detect(bytes).ok_or_else(|| {
        ResolveError::Unsupported("input is neither a PDF nor a supported image".to_string())
    })?;

    match format {
        DocumentFormat::Pdf => read_pages::<PdfSource>(bytes, options),
        DocumentFormat::Raster(_) => read_pages::<RasterSource>(bytes, options),
    }
}

fn read_pages<S: DimensionSource>(
    bytes: &[u8],
    options: &ResolveOptions,
) -> Result<Vec<PageDimensions>, ResolveError> {
    let dimensions = S::page_dimensions(bytes, options)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        source = S::NAME,
        pages = dimensions.len(),
        "resolved page dimensions"
    );

    Ok(dimensions)
}

/// Resolve the pixel dimensions of every page of the file at `path`.
///
/// # Errors
///
/// Returns [`ResolveError::Io`] if the file cannot be read, otherwise the
/// errors of [`resolve_bytes`]. Unsupported files name the path.
pub fn resolve(
    path: impl AsRef<Path>,
    options: &ResolveOptions,
) -> Result<Vec<PageDimensions>, ResolveError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    resolve_bytes(&bytes, options).map_err(|err| match err {
        ResolveError::Unsupported(_) => ResolveError::Unsupported(format!(
            "{} ({})",
            path.display(),
            extension_hint(path)
        )),
        other => other,
    })
}

fn extension_hint(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => match image::ImageFormat::from_extension(ext) {
            Some(fmt) => format!("extension suggests {fmt:?} but the content does not match"),
            None if ext.eq_ignore_ascii_case("pdf") => {
                "extension suggests PDF but no %PDF- header was found".to_string()
            }
            None => format!(".{ext} files are not supported"),
        },
        None => "no recognizable header".to_string(),
    }
}
