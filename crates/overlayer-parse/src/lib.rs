//! overlayer-parse: page dimension resolution.
//!
//! This crate turns a document file (PDF or raster image) into the pixel
//! size of each of its pages. PDFs are read with lopdf, images with the
//! image crate. It depends on overlayer-core for shared data types.

pub mod error;
pub mod options;
pub mod pdf_source;
pub mod raster_source;
pub mod resolver;
pub mod source;

pub use error::ResolveError;
pub use options::{PageBox, ResolveOptions};
pub use overlayer_core;
pub use pdf_source::PdfSource;
pub use raster_source::RasterSource;
pub use resolver::{DocumentFormat, resolve, resolve_bytes};
pub use source::DimensionSource;
