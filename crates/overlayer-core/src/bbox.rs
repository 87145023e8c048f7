use std::fmt;
use std::hash::{Hash, Hasher};

use crate::feature::BoxType;
use crate::geometry::{NormalizedGeometry, PageDimensions, scale};

/// Placeholder text carried by every `TABLE` box.
pub const TABLE_TEXT: &str = "table";
/// Placeholder text carried by every `CELL` box.
pub const CELL_TEXT: &str = "cell";

/// A typed bounding box in page pixel space, ready for overlay drawing.
///
/// Coordinates use a top-left origin:
/// - `xmin`, `ymin`: top-left corner
/// - `xmax`, `ymax`: bottom-right corner
///
/// `xmax` and `ymax` are derived as an offset from the already rounded
/// `xmin`/`ymin` (`xmax = xmin + round(width * W)`), not by rounding the
/// right edge independently. Downstream overlays depend on these exact
/// values.
///
/// Two boxes are equal when their type, page and corners match.
/// Confidence and text take no part in equality or hashing.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    box_type: BoxType,
    page_number: usize,
    xmin: u32,
    ymin: u32,
    xmax: u32,
    ymax: u32,
    confidence: f64,
    text: String,
}

impl BoundingBox {
    /// Scale a normalized geometry onto a page of the given pixel size.
    ///
    /// `page_number` is 1-based. `confidence` is rounded to two decimals.
    pub fn from_normalized(
        geometry: &NormalizedGeometry,
        page: &PageDimensions,
        box_type: BoxType,
        page_number: usize,
        confidence: f64,
        text: impl Into<String>,
    ) -> Self {
        let xmin = scale(geometry.left, page.width());
        let ymin = scale(geometry.top, page.height());
        let xmax = xmin.saturating_add(scale(geometry.width, page.width()));
        let ymax = ymin.saturating_add(scale(geometry.height, page.height()));
        Self {
            box_type,
            page_number,
            xmin,
            ymin,
            xmax,
            ymax,
            confidence: round_confidence(confidence),
            text: text.into(),
        }
    }

    pub fn box_type(&self) -> BoxType {
        self.box_type
    }

    /// 1-based page number.
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn xmin(&self) -> u32 {
        self.xmin
    }

    pub fn ymin(&self) -> u32 {
        self.ymin
    }

    pub fn xmax(&self) -> u32 {
        self.xmax
    }

    pub fn ymax(&self) -> u32 {
        self.ymax
    }

    /// Confidence rounded to two decimal places.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.xmax - self.xmin
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.ymax - self.ymin
    }

    fn key(&self) -> (BoxType, usize, u32, u32, u32, u32) {
        (
            self.box_type,
            self.page_number,
            self.xmin,
            self.ymin,
            self.xmax,
            self.ymax,
        )
    }
}

/// Round to two decimals on the exact binary value, not on `confidence * 100`.
fn round_confidence(confidence: f64) -> f64 {
    format!("{confidence:.2}").parse().unwrap_or(confidence)
}

impl PartialEq for BoundingBox {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for BoundingBox {}

impl Hash for BoundingBox {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bounding_box(box_type='{}', page_number={}, xmin={}, ymin={}, xmax={}, ymax={})",
            self.box_type, self.page_number, self.xmin, self.ymin, self.xmax, self.ymax
        )
    }
}
