use std::path::Path;

use overlayer::{BoundingBox, ResolveOptions};

use crate::cli::OutputFormat;
use crate::shared::{
    csv_escape, load_document, open_overlay, parse_features, print_json, resolve_pages,
};

pub fn run(
    file: &Path,
    document: &Path,
    features: &str,
    pages: Option<&str>,
    format: OutputFormat,
    options: &ResolveOptions,
) -> Result<(), i32> {
    let features = parse_features(features)?;
    let overlay = open_overlay(file, options)?;
    let page_indices = resolve_pages(pages, overlay.page_count())?;
    let analysis = load_document(document)?;

    let boxes = overlay
        .bounding_boxes(&analysis, &features)
        .map_err(|e| {
            eprintln!("Error: {e}");
            1
        })?;
    let total = boxes.len();
    let boxes: Vec<BoundingBox> = boxes
        .into_iter()
        .filter(|b| page_indices.binary_search(&(b.page_number() - 1)).is_ok())
        .collect();
    tracing::debug!(total, kept = boxes.len(), %features, "filtered boxes by page");

    match format {
        OutputFormat::Text => {
            write_text(&boxes);
            Ok(())
        }
        OutputFormat::Json => print_json(&boxes),
        OutputFormat::Csv => {
            write_csv(&boxes);
            Ok(())
        }
    }
}

fn write_text(boxes: &[BoundingBox]) {
    println!("page\ttype\txmin\tymin\txmax\tymax\tconfidence\ttext");
    for b in boxes {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{:.2}\t{}",
            b.page_number(),
            b.box_type(),
            b.xmin(),
            b.ymin(),
            b.xmax(),
            b.ymax(),
            b.confidence(),
            b.text(),
        );
    }
}

fn write_csv(boxes: &[BoundingBox]) {
    println!("page,type,xmin,ymin,xmax,ymax,confidence,text");
    for b in boxes {
        println!(
            "{},{},{},{},{},{},{:.2},{}",
            b.page_number(),
            b.box_type(),
            b.xmin(),
            b.ymin(),
            b.xmax(),
            b.ymax(),
            b.confidence(),
            csv_escape(b.text()),
        );
    }
}
