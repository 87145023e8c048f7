/// Bounding box in normalized page coordinates.
///
/// All values are fractions of the page size with a top-left origin:
/// - `left`: distance of the left edge from the left of the page
/// - `top`: distance of the top edge from the top of the page
/// - `width`, `height`: span of the box
///
/// Well-formed input satisfies `left + width <= 1` and `top + height <= 1`.
/// This is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl NormalizedGeometry {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Pixel size of one rendered page.
///
/// One value per page, in page order. Produced by the dimension resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageDimensions {
    width: u32,
    height: u32,
}

impl PageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Page width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Page height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Round half to even, matching Python's `round(x)` for pixel edges.
pub(crate) fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// Scale a normalized coordinate to whole pixels.
///
/// Negative results saturate to zero.
pub(crate) fn scale(fraction: f64, pixels: u32) -> u32 {
    round_half_even(fraction * f64::from(pixels)) as u32
}
