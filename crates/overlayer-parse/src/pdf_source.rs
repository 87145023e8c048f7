//! lopdf-based PDF page sizing.
//!
//! Implements [`DimensionSource`] using the
//! [lopdf](https://crates.io/crates/lopdf) crate. Page boxes are measured
//! in PDF user space units, which map one-to-one onto pixels of a page
//! rendered at 72 DPI.

use overlayer_core::{OverlayError, PageDimensions};

use crate::error::ResolveError;
use crate::options::{PageBox, ResolveOptions};
use crate::source::DimensionSource;

/// Header every PDF file starts with.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Readers accept the header anywhere within the first kilobyte.
const PDF_HEADER_WINDOW: usize = 1024;

/// The lopdf-backed PDF dimension source.
pub struct PdfSource;

/// A page box as raw PDF coordinates `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Rect {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl Rect {
    fn width(&self) -> f64 {
        (self.x1 - self.x0).abs()
    }

    fn height(&self) -> f64 {
        (self.y1 - self.y0).abs()
    }
}

/// Resolve an indirect reference, returning the referenced object.
///
/// If the object is a `Reference`, resolves it via the document.
/// Otherwise, returns the object as-is.
fn resolve_ref<'a>(doc: &'a lopdf::Document, obj: &'a lopdf::Object) -> &'a lopdf::Object {
    match obj {
        lopdf::Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

/// Convert a lopdf numeric object (Integer or Real) to f64.
fn object_to_f64(doc: &lopdf::Document, obj: &lopdf::Object) -> Result<f64, ResolveError> {
    match resolve_ref(doc, obj) {
        lopdf::Object::Integer(i) => Ok(*i as f64),
        lopdf::Object::Real(f) => Ok(f64::from(*f)),
        other => Err(ResolveError::Pdf(format!("expected number, got {other:?}"))),
    }
}

/// Extract a [`Rect`] from a lopdf array of 4 numbers.
fn rect_from_object(
    doc: &lopdf::Document,
    obj: &lopdf::Object,
    key: &str,
) -> Result<Rect, ResolveError> {
    let array = resolve_ref(doc, obj)
        .as_array()
        .map_err(|e| ResolveError::Pdf(format!("{key} is not an array: {e}")))?;
    if array.len() != 4 {
        return Err(ResolveError::Pdf(format!(
            "expected 4-element array for {key}, got {}",
            array.len()
        )));
    }
    Ok(Rect {
        x0: object_to_f64(doc, &array[0])?,
        y0: object_to_f64(doc, &array[1])?,
        x1: object_to_f64(doc, &array[2])?,
        y1: object_to_f64(doc, &array[3])?,
    })
}

/// Look up a key in the page dictionary, walking up the page tree
/// (via /Parent) if the key is not found on the page itself.
///
/// Returns `None` if the key is not found anywhere in the tree.
fn resolve_inherited<'a>(
    doc: &'a lopdf::Document,
    page_id: lopdf::ObjectId,
    key: &[u8],
) -> Result<Option<&'a lopdf::Object>, ResolveError> {
    let mut current_id = page_id;
    // A malformed tree can loop back on itself; a page tree is never this deep.
    for _ in 0..64 {
        let dict = doc
            .get_object(current_id)
            .and_then(|o| o.as_dict())
            .map_err(|e| ResolveError::Pdf(format!("failed to get page dictionary: {e}")))?;

        if let Ok(value) = dict.get(key) {
            return Ok(Some(value));
        }

        match dict.get(b"Parent") {
            Ok(parent_obj) => {
                current_id = parent_obj
                    .as_reference()
                    .map_err(|e| ResolveError::Pdf(format!("invalid /Parent reference: {e}")))?;
            }
            Err(_) => return Ok(None),
        }
    }
    Err(ResolveError::Pdf("page tree /Parent chain too deep".into()))
}

fn page_rect(
    doc: &lopdf::Document,
    page_id: lopdf::ObjectId,
    page_box: PageBox,
) -> Result<Rect, ResolveError> {
    if page_box == PageBox::CropBox {
        if let Some(obj) = resolve_inherited(doc, page_id, b"CropBox")? {
            return rect_from_object(doc, obj, "CropBox");
        }
    }
    let obj = resolve_inherited(doc, page_id, b"MediaBox")?
        .ok_or_else(|| ResolveError::Pdf("MediaBox not found on page or ancestors".into()))?;
    rect_from_object(doc, obj, "MediaBox")
}

/// Page rotation in degrees, normalized to 0, 90, 180 or 270.
fn page_rotation(doc: &lopdf::Document, page_id: lopdf::ObjectId) -> Result<i64, ResolveError> {
    match resolve_inherited(doc, page_id, b"Rotate")? {
        Some(obj) => {
            let rotation = resolve_ref(doc, obj)
                .as_i64()
                .map_err(|e| ResolveError::Pdf(format!("Rotate is not an integer: {e}")))?;
            Ok(rotation.rem_euclid(360))
        }
        None => Ok(0),
    }
}

fn to_pixels(points: f64) -> u32 {
    points.round_ties_even() as u32
}

impl DimensionSource for PdfSource {
    const NAME: &'static str = "PDF";

    fn probe(bytes: &[u8]) -> bool {
        let window = &bytes[..bytes.len().min(PDF_HEADER_WINDOW)];
        window.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC)
    }

    fn page_dimensions(
        bytes: &[u8],
        options: &ResolveOptions,
    ) -> Result<Vec<PageDimensions>, ResolveError> {
        let doc = lopdf::Document::load_mem(bytes)
            .map_err(|e| ResolveError::Pdf(format!("failed to parse PDF: {e}")))?;
        if doc.is_encrypted() {
            return Err(ResolveError::Encrypted);
        }

        // get_pages returns BTreeMap<u32, ObjectId> keyed by 1-based page number
        let pages = doc.get_pages();
        let mut dimensions = Vec::with_capacity(pages.len());
        for (&page_number, &page_id) in &pages {
            let rect = page_rect(&doc, page_id, options.page_box)?;
            let (mut width, mut height) = (to_pixels(rect.width()), to_pixels(rect.height()));
            if options.apply_rotation && matches!(page_rotation(&doc, page_id)?, 90 | 270) {
                std::mem::swap(&mut width, &mut height);
            }
            if width == 0 || height == 0 {
                return Err(OverlayError::InvalidPageSize {
                    page_number: page_number as usize,
                    width,
                    height,
                }
                .into());
            }
            dimensions.push(PageDimensions::new(width, height));
        }
        Ok(dimensions)
    }
}
