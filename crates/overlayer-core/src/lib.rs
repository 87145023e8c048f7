//! overlayer-core: Backend-independent data types and box extraction.
//!
//! This crate provides the value types ([`PageDimensions`],
//! [`NormalizedGeometry`], [`BoundingBox`]), feature selection
//! ([`FeatureType`], [`FeatureSet`]), the read-only [`DocumentModel`] trait
//! with an in-memory implementation, and the [`BoxExtractor`] that turns
//! normalized document geometry into pixel-space overlay boxes.
//! It performs no I/O.

pub mod bbox;
pub mod document;
pub mod error;
pub mod extract;
pub mod feature;
pub mod geometry;
pub mod model;

pub use bbox::{BoundingBox, CELL_TEXT, TABLE_TEXT};
pub use document::{DocumentModel, Element};
pub use error::OverlayError;
pub use extract::BoxExtractor;
pub use feature::{BoxType, FeatureSet, FeatureType};
pub use geometry::{NormalizedGeometry, PageDimensions};
pub use model::{Block, Document, Page, Query};
