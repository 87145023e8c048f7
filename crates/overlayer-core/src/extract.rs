use crate::bbox::{BoundingBox, CELL_TEXT, TABLE_TEXT};
use crate::document::{DocumentModel, Element};
use crate::error::OverlayError;
use crate::feature::{BoxType, FeatureSet};
use crate::geometry::PageDimensions;

/// Extracts pixel-space bounding boxes from an analyzed document.
pub struct BoxExtractor;

impl BoxExtractor {
    /// Extract the requested boxes from every page of `document`.
    ///
    /// `page_dimensions[i]` is the pixel size of page `i + 1`. Output order
    /// is page-major, then by group (text, form, table, query), then
    /// document order within a group:
    /// - Text: each line's `LINE` box followed by its `WORD` boxes.
    /// - Form: each key's `KEY` box followed by its `VALUE` boxes.
    /// - Table: each table's `TABLE` box followed by its `CELL` boxes.
    /// - Query: one `QUERIES` box per answer of each query.
    ///
    /// Nothing is sorted, merged or deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::MissingPageDimensions`] as soon as a page has
    /// no dimensions entry, whether or not it yields boxes, and
    /// [`OverlayError::MissingGeometry`] for a selected element without
    /// geometry. No partial result is returned.
    pub fn extract<D: DocumentModel>(
        document: &D,
        features: &FeatureSet,
        page_dimensions: &[PageDimensions],
    ) -> Result<Vec<BoundingBox>, OverlayError> {
        let mut boxes = Vec::new();

        for (index, page) in document.pages().enumerate() {
            let page_number = index + 1;
            let dims = page_dimensions.get(index).ok_or(
                OverlayError::MissingPageDimensions {
                    page_number,
                    available: page_dimensions.len(),
                },
            )?;
            let mut emitter = Emitter {
                boxes: &mut boxes,
                dims,
                page_number,
            };

            if features.wants_text() {
                for line in document.lines(page) {
                    if features.contains(BoxType::Line) {
                        emitter.push(line, BoxType::Line, line.text())?;
                    }
                    if features.contains(BoxType::Word) {
                        for word in document.words(line) {
                            emitter.push(word, BoxType::Word, word.text())?;
                        }
                    }
                }
            }

            if features.wants_form() {
                for key in document.keys(page) {
                    if features.contains(BoxType::Key) {
                        emitter.push(key, BoxType::Key, key.text())?;
                    }
                    if features.contains(BoxType::Value) {
                        for value in document.values(key) {
                            emitter.push(value, BoxType::Value, value.text())?;
                        }
                    }
                }
            }

            if features.wants_tables() {
                for table in document.tables(page) {
                    if features.contains(BoxType::Table) {
                        emitter.push(table, BoxType::Table, TABLE_TEXT)?;
                    }
                    if features.contains(BoxType::Cell) {
                        for cell in document.cells(table) {
                            emitter.push(cell, BoxType::Cell, CELL_TEXT)?;
                        }
                    }
                }
            }

            if features.wants_queries() {
                for query in document.queries(page) {
                    for answer in document.answers(query) {
                        emitter.push(answer, BoxType::Queries, answer.text())?;
                    }
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            boxes = boxes.len(),
            pages = page_dimensions.len(),
            features = %features,
            "extracted overlay boxes"
        );

        Ok(boxes)
    }
}

/// Appends boxes for one page.
struct Emitter<'a> {
    boxes: &'a mut Vec<BoundingBox>,
    dims: &'a PageDimensions,
    page_number: usize,
}

impl Emitter<'_> {
    fn push<E: Element>(
        &mut self,
        element: &E,
        box_type: BoxType,
        text: &str,
    ) -> Result<(), OverlayError> {
        let geometry = element
            .geometry()
            .ok_or(OverlayError::MissingGeometry {
                box_type,
                page_number: self.page_number,
            })?;
        self.boxes.push(BoundingBox::from_normalized(
            geometry,
            self.dims,
            box_type,
            self.page_number,
            element.confidence(),
            text,
        ));
        Ok(())
    }
}
