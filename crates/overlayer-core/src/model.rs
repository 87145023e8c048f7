//! In-memory document model.
//!
//! A plain owned tree implementing [`DocumentModel`]. Used for fixtures,
//! for callers that convert an analysis response themselves, and (with the
//! `serde` feature) as the JSON interchange format read by the CLI.

use crate::document::{DocumentModel, Element};
use crate::geometry::NormalizedGeometry;

/// A detected element with its geometry and related elements.
///
/// - On a line, `children` holds the words.
/// - On a table, `children` holds the cells.
/// - On a form key, `values` holds the related value elements.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    #[cfg_attr(feature = "serde", serde(default))]
    pub geometry: Option<NormalizedGeometry>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub confidence: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub children: Vec<Block>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub values: Vec<Block>,
}

impl Block {
    pub fn new(geometry: NormalizedGeometry, confidence: f64, text: impl Into<String>) -> Self {
        Self {
            geometry: Some(geometry),
            confidence,
            text: text.into(),
            children: Vec::new(),
            values: Vec::new(),
        }
    }

    /// A block reported without geometry.
    pub fn without_geometry(confidence: f64, text: impl Into<String>) -> Self {
        Self {
            geometry: None,
            confidence,
            text: text.into(),
            children: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.children = children;
        self
    }

    pub fn with_values(mut self, values: Vec<Block>) -> Self {
        self.values = values;
        self
    }
}

impl Element for Block {
    fn geometry(&self) -> Option<&NormalizedGeometry> {
        self.geometry.as_ref()
    }

    fn confidence(&self) -> f64 {
        self.confidence
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// A query and the answers found for it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query {
    /// The question that was asked.
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub answers: Vec<Block>,
}

impl Query {
    pub fn new(text: impl Into<String>, answers: Vec<Block>) -> Self {
        Self {
            text: text.into(),
            answers,
        }
    }
}

/// One analyzed page.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    #[cfg_attr(feature = "serde", serde(default))]
    pub lines: Vec<Block>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub keys: Vec<Block>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tables: Vec<Block>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub queries: Vec<Query>,
}

/// An analyzed document: pages in document order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl DocumentModel for Document {
    type Page = Page;
    type Element = Block;
    type Query = Query;

    fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    fn lines<'a>(&'a self, page: &'a Page) -> impl Iterator<Item = &'a Block> {
        page.lines.iter()
    }

    fn words<'a>(&'a self, line: &'a Block) -> impl Iterator<Item = &'a Block> {
        line.children.iter()
    }

    fn keys<'a>(&'a self, page: &'a Page) -> impl Iterator<Item = &'a Block> {
        page.keys.iter()
    }

    fn values<'a>(&'a self, key: &'a Block) -> impl Iterator<Item = &'a Block> {
        key.values.iter()
    }

    fn tables<'a>(&'a self, page: &'a Page) -> impl Iterator<Item = &'a Block> {
        page.tables.iter()
    }

    fn cells<'a>(&'a self, table: &'a Block) -> impl Iterator<Item = &'a Block> {
        table.children.iter()
    }

    fn queries<'a>(&'a self, page: &'a Page) -> impl Iterator<Item = &'a Query> {
        page.queries.iter()
    }

    fn answers<'a>(&'a self, query: &'a Query) -> impl Iterator<Item = &'a Block> {
        query.answers.iter()
    }
}
