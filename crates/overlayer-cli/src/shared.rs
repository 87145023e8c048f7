use std::path::Path;

use overlayer::{Document, FeatureSet, Overlay, PageBox, ResolveOptions};

use crate::page_range::parse_page_range;

/// Build resolver options from the shared `--crop-box` and `--no-rotation` flags.
pub fn resolve_options(crop_box: bool, no_rotation: bool) -> ResolveOptions {
    ResolveOptions {
        page_box: if crop_box {
            PageBox::CropBox
        } else {
            PageBox::MediaBox
        },
        apply_rotation: !no_rotation,
        ..ResolveOptions::default()
    }
}

/// Resolve the page sizes of a PDF or image with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is missing,
/// unreadable or of an unsupported type.
pub fn open_overlay(file: &Path, options: &ResolveOptions) -> Result<Overlay, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    Overlay::open_file(file, Some(options.clone())).map_err(|e| {
        eprintln!("Error: failed to read page sizes: {e}");
        1
    })
}

/// Load an analysis result from a JSON file.
pub fn load_document(path: &Path) -> Result<Document, i32> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        eprintln!("Error: cannot read {}: {e}", path.display());
        1
    })?;
    serde_json::from_str(&json).map_err(|e| {
        eprintln!("Error: invalid analysis JSON in {}: {e}", path.display());
        1
    })
}

pub fn parse_features(features: &str) -> Result<FeatureSet, i32> {
    features.parse().map_err(|e| {
        eprintln!("Error: {e}");
        1
    })
}

/// Resolve an optional page range string into 0-indexed page indices.
///
/// If `pages` is `None`, returns all pages (0..page_count).
pub fn resolve_pages(pages: Option<&str>, page_count: usize) -> Result<Vec<usize>, i32> {
    match pages {
        Some(range) => parse_page_range(range, page_count).map_err(|e| {
            eprintln!("Error: {e}");
            1
        }),
        None => Ok((0..page_count).collect()),
    }
}

/// Serialize `value` as compact JSON and print it on one line.
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), i32> {
    let json = serde_json::to_string(value).map_err(|e| {
        eprintln!("Error: failed to serialize output: {e}");
        1
    })?;
    println!("{json}");
    Ok(())
}

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, or newlines, wraps it in
/// double quotes and escapes any internal double quotes by doubling them.
pub fn csv_escape(text: &str) -> String {
    if text.contains([',', '"', '\n']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
