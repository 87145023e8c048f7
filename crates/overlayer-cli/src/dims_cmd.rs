use std::path::Path;

use overlayer::{PageDimensions, ResolveOptions};

use crate::cli::OutputFormat;
use crate::shared::{open_overlay, print_json};

pub fn run(file: &Path, format: OutputFormat, options: &ResolveOptions) -> Result<(), i32> {
    let overlay = open_overlay(file, options)?;
    let dims = overlay.page_dimensions();

    match format {
        OutputFormat::Text => {
            println!("page\twidth\theight");
            for (i, d) in dims.iter().enumerate() {
                println!("{}\t{}\t{}", i + 1, d.width(), d.height());
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&json_rows(dims)),
        OutputFormat::Csv => {
            println!("page,width,height");
            for (i, d) in dims.iter().enumerate() {
                println!("{},{},{}", i + 1, d.width(), d.height());
            }
            Ok(())
        }
    }
}

fn json_rows(dims: &[PageDimensions]) -> Vec<serde_json::Value> {
    dims.iter()
        .enumerate()
        .map(|(i, d)| {
            serde_json::json!({
                "page": i + 1,
                "width": d.width(),
                "height": d.height(),
            })
        })
        .collect()
}
