//! Parallel extraction over many documents.

use overlayer_core::{
    BoundingBox, BoxExtractor, DocumentModel, FeatureSet, OverlayError, PageDimensions,
};
use rayon::prelude::*;

/// One document to extract, paired with its page dimensions.
#[derive(Debug, Clone, Copy)]
pub struct BatchItem<'a, D> {
    pub document: &'a D,
    pub page_dimensions: &'a [PageDimensions],
}

/// Extract boxes from many documents concurrently using rayon.
///
/// Each document is extracted independently; a failure in one does not
/// affect the others. The returned Vec is ordered like `items`.
pub fn extract_batch<D>(
    items: &[BatchItem<'_, D>],
    features: &FeatureSet,
) -> Vec<Result<Vec<BoundingBox>, OverlayError>>
where
    D: DocumentModel + Sync,
{
    items
        .par_iter()
        .map(|item| BoxExtractor::extract(item.document, features, item.page_dimensions))
        .collect()
}
