//! Read-only view of an analyzed document.
//!
//! Defines the [`DocumentModel`] trait the extractor walks. It captures the
//! minimal set of queries needed to enumerate overlay candidates: pages,
//! lines and their words, form keys and their values, tables and their
//! cells, and queries and their answers. Any analysis result (a parsed
//! service response, a database row set, an in-memory fixture) can be
//! overlaid by implementing it.

use crate::geometry::NormalizedGeometry;

/// A detected element that can become a bounding box.
pub trait Element {
    /// Normalized geometry, or `None` if the element was reported without one.
    fn geometry(&self) -> Option<&NormalizedGeometry>;

    /// Detection confidence as reported by the analysis service.
    fn confidence(&self) -> f64;

    /// Recognized text. Empty for elements without text.
    fn text(&self) -> &str;
}

/// Trait abstracting an analyzed document.
///
/// Every enumeration returns elements in document order. The extractor
/// preserves that order in its output.
///
/// # Associated Types
///
/// - `Page`: One page of the document.
/// - `Element`: Any element carrying geometry (line, word, key, value,
///   table, cell, query answer).
/// - `Query`: A query posed against a page. Queries carry no geometry of
///   their own; their answers do.
pub trait DocumentModel {
    type Page;
    type Element: Element;
    type Query;

    /// Pages in document order.
    fn pages(&self) -> impl Iterator<Item = &Self::Page>;

    /// Lines of text on a page.
    fn lines<'a>(&'a self, page: &'a Self::Page) -> impl Iterator<Item = &'a Self::Element>;

    /// Word children of a line.
    fn words<'a>(&'a self, line: &'a Self::Element) -> impl Iterator<Item = &'a Self::Element>;

    /// Form keys on a page.
    fn keys<'a>(&'a self, page: &'a Self::Page) -> impl Iterator<Item = &'a Self::Element>;

    /// Value elements related to a form key, in relationship order.
    fn values<'a>(&'a self, key: &'a Self::Element) -> impl Iterator<Item = &'a Self::Element>;

    /// Tables on a page.
    fn tables<'a>(&'a self, page: &'a Self::Page) -> impl Iterator<Item = &'a Self::Element>;

    /// Cell children of a table.
    fn cells<'a>(&'a self, table: &'a Self::Element) -> impl Iterator<Item = &'a Self::Element>;

    /// Queries posed against a page.
    fn queries<'a>(&'a self, page: &'a Self::Page) -> impl Iterator<Item = &'a Self::Query>;

    /// Answer elements of a query, in answer order.
    fn answers<'a>(&'a self, query: &'a Self::Query)
    -> impl Iterator<Item = &'a Self::Element>;
}
