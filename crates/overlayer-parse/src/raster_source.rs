//! Raster image sizing from file headers.
//!
//! Implements [`DimensionSource`] with the [image](https://crates.io/crates/image)
//! crate. Only the header is read; pixel data is never decoded. A raster
//! image is always a single page.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};
use overlayer_core::{OverlayError, PageDimensions};

use crate::error::ResolveError;
use crate::options::ResolveOptions;
use crate::source::DimensionSource;

/// The image-crate-backed raster dimension source.
pub struct RasterSource;

impl RasterSource {
    /// Detect the raster format from the leading magic bytes.
    pub fn detect(bytes: &[u8]) -> Option<ImageFormat> {
        image::guess_format(bytes).ok()
    }
}

impl DimensionSource for RasterSource {
    const NAME: &'static str = "raster image";

    fn probe(bytes: &[u8]) -> bool {
        Self::detect(bytes).is_some()
    }

    fn page_dimensions(
        bytes: &[u8],
        _options: &ResolveOptions,
    ) -> Result<Vec<PageDimensions>, ResolveError> {
        let format = Self::detect(bytes)
            .ok_or_else(|| ResolveError::Unsupported("unrecognized image header".to_string()))?;
        let (width, height) = ImageReader::with_format(Cursor::new(bytes), format)
            .into_dimensions()?;

        #[cfg(feature = "tracing")]
        tracing::trace!(?format, width, height, "read raster header");

        if width == 0 || height == 0 {
            return Err(OverlayError::InvalidPageSize {
                page_number: 1,
                width,
                height,
            }
            .into());
        }
        Ok(vec![PageDimensions::new(width, height)])
    }
}


#[cfg(test)]
mod tests {
    use super::test_image::encoded;
    use super::*;

    #[test]
    fn png_header() {
        let bytes = encoded(640, 480, ImageFormat::Png);
        assert!(RasterSource::probe(&bytes));
        let dims = RasterSource::page_dimensions(&bytes, &ResolveOptions::default()).unwrap();
        assert_eq!(dims, vec![PageDimensions::new(640, 480)]);
    }

    #[test]
    fn jpeg_header() {
        let bytes = encoded(100, 50, ImageFormat::Jpeg);
        assert_eq!(RasterSource::detect(&bytes), Some(ImageFormat::Jpeg));
        let dims = RasterSource::page_dimensions(&bytes, &ResolveOptions::default()).unwrap();
        assert_eq!(dims, vec![PageDimensions::new(100, 50)]);
    }

    #[test]
    fn tiff_header() {
        let bytes = encoded(17, 23, ImageFormat::Tiff);
        let dims = RasterSource::page_dimensions(&bytes, &ResolveOptions::default()).unwrap();
        assert_eq!(dims, vec![PageDimensions::new(17, 23)]);
    }

    #[test]
    fn unknown_bytes_are_not_probed() {
        assert!(!RasterSource::probe(b"hello world"));
        let err =
            RasterSource::page_dimensions(b"hello world", &ResolveOptions::default()).unwrap_err();
        assert!(matches!(err, ResolveError::Unsupported(_)));
    }

    #[test]
    fn truncated_png_is_an_image_error() {
        let bytes = encoded(10, 10, ImageFormat::Png);
        let err = RasterSource::page_dimensions(&bytes[..12], &ResolveOptions::default())
            .unwrap_err();
        assert!(matches!(err, ResolveError::Image(_)));
    }
}
