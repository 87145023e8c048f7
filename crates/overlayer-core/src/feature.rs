//! Feature selection for box extraction.
//!
//! [`FeatureType`] is what callers ask for, [`BoxType`] is what the
//! extractor emits. The two differ only by `Form`, a selector that expands
//! to `Key` plus `Value` and never appears on a box.

use std::fmt;
use std::str::FromStr;

use crate::error::OverlayError;

/// Category of document element that can be requested for extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum FeatureType {
    Line,
    Word,
    Key,
    Value,
    /// Selects both `Key` and `Value`.
    Form,
    Table,
    Cell,
    Queries,
}

impl FeatureType {
    /// All feature types, in extraction group order.
    pub const ALL: [FeatureType; 8] = [
        FeatureType::Line,
        FeatureType::Word,
        FeatureType::Key,
        FeatureType::Value,
        FeatureType::Form,
        FeatureType::Table,
        FeatureType::Cell,
        FeatureType::Queries,
    ];

    /// Returns the service type name for this feature.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::Line => "LINE",
            FeatureType::Word => "WORD",
            FeatureType::Key => "KEY",
            FeatureType::Value => "VALUE",
            FeatureType::Form => "FORM",
            FeatureType::Table => "TABLE",
            FeatureType::Cell => "CELL",
            FeatureType::Queries => "QUERIES",
        }
    }

    /// Box types this feature selects.
    pub fn box_types(&self) -> &'static [BoxType] {
        match self {
            FeatureType::Line => &[BoxType::Line],
            FeatureType::Word => &[BoxType::Word],
            FeatureType::Key => &[BoxType::Key],
            FeatureType::Value => &[BoxType::Value],
            FeatureType::Form => &[BoxType::Key, BoxType::Value],
            FeatureType::Table => &[BoxType::Table],
            FeatureType::Cell => &[BoxType::Cell],
            FeatureType::Queries => &[BoxType::Queries],
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureType {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        FeatureType::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(name))
            .or_else(|| {
                // Singular alias for the query group.
                name.eq_ignore_ascii_case("query")
                    .then_some(FeatureType::Queries)
            })
            .ok_or_else(|| OverlayError::InvalidFeature(name.to_string()))
    }
}

/// Type of an emitted bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum BoxType {
    Line,
    Word,
    Key,
    Value,
    Table,
    Cell,
    Queries,
}

impl BoxType {
    /// Returns the service type name for this box type.
    pub fn as_str(&self) -> &'static str {
        match self {
            BoxType::Line => "LINE",
            BoxType::Word => "WORD",
            BoxType::Key => "KEY",
            BoxType::Value => "VALUE",
            BoxType::Table => "TABLE",
            BoxType::Cell => "CELL",
            BoxType::Queries => "QUERIES",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for BoxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<BoxType> for FeatureType {
    fn from(box_type: BoxType) -> Self {
        match box_type {
            BoxType::Line => FeatureType::Line,
            BoxType::Word => FeatureType::Word,
            BoxType::Key => FeatureType::Key,
            BoxType::Value => FeatureType::Value,
            BoxType::Table => FeatureType::Table,
            BoxType::Cell => FeatureType::Cell,
            BoxType::Queries => FeatureType::Queries,
        }
    }
}

/// Set of box types requested from the extractor.
///
/// `Form` is expanded to `Key` and `Value` on insertion, so membership
/// tests only ever deal with concrete box types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FeatureSet {
    bits: u8,
}

impl FeatureSet {
    /// An empty set. Extraction with it yields no boxes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every box type.
    pub fn all() -> Self {
        FeatureType::ALL.into_iter().collect()
    }

    /// Add a feature, expanding `Form`.
    pub fn insert(&mut self, feature: FeatureType) {
        for box_type in feature.box_types() {
            self.bits |= box_type.bit();
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, feature: FeatureType) -> Self {
        self.insert(feature);
        self
    }

    pub fn contains(&self, box_type: BoxType) -> bool {
        self.bits & box_type.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Whether any box of the text group (lines and words) is requested.
    pub fn wants_text(&self) -> bool {
        self.contains(BoxType::Line) || self.contains(BoxType::Word)
    }

    /// Whether any box of the form group (keys and values) is requested.
    pub fn wants_form(&self) -> bool {
        self.contains(BoxType::Key) || self.contains(BoxType::Value)
    }

    /// Whether any box of the table group (tables and cells) is requested.
    pub fn wants_tables(&self) -> bool {
        self.contains(BoxType::Table) || self.contains(BoxType::Cell)
    }

    pub fn wants_queries(&self) -> bool {
        self.contains(BoxType::Queries)
    }

    /// Box types in the set, in extraction group order.
    pub fn box_types(&self) -> impl Iterator<Item = BoxType> + '_ {
        [
            BoxType::Line,
            BoxType::Word,
            BoxType::Key,
            BoxType::Value,
            BoxType::Table,
            BoxType::Cell,
            BoxType::Queries,
        ]
        .into_iter()
        .filter(|t| self.contains(*t))
    }
}

impl FromIterator<FeatureType> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = FeatureType>>(iter: I) -> Self {
        let mut set = FeatureSet::empty();
        for feature in iter {
            set.insert(feature);
        }
        set
    }
}

impl Extend<FeatureType> for FeatureSet {
    fn extend<I: IntoIterator<Item = FeatureType>>(&mut self, iter: I) {
        for feature in iter {
            self.insert(feature);
        }
    }
}

impl From<FeatureType> for FeatureSet {
    fn from(feature: FeatureType) -> Self {
        FeatureSet::empty().with(feature)
    }
}

impl<const N: usize> From<[FeatureType; N]> for FeatureSet {
    fn from(features: [FeatureType; N]) -> Self {
        features.into_iter().collect()
    }
}

impl FromStr for FeatureSet {
    type Err = OverlayError;

    /// Parse a comma-separated list such as `"line,word,form"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(FeatureType::from_str)
            .collect()
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.box_types().map(|t| t.as_str()).collect();
        f.write_str(&names.join(","))
    }
}
