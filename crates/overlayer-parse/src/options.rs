//! Options controlling how page dimensions are resolved.

/// Which PDF page box defines the rendered page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageBox {
    /// The physical page boundary (`/MediaBox`).
    #[default]
    MediaBox,
    /// The visible region (`/CropBox`), falling back to `/MediaBox` when the
    /// page has none.
    CropBox,
}

/// Configuration for the dimension resolver.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Reject inputs larger than this many bytes. `None` disables the check.
    pub max_input_bytes: Option<usize>,
    /// Page box used to size PDF pages.
    pub page_box: PageBox,
    /// Swap width and height for PDF pages rotated by 90 or 270 degrees.
    pub apply_rotation: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            max_input_bytes: None,
            page_box: PageBox::MediaBox,
            apply_rotation: true,
        }
    }
}
