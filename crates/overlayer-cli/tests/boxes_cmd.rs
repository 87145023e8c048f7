//! Integration tests for the `boxes` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cmd() -> Command {
    Command::cargo_bin("overlayer").unwrap()
}

/// Create a PDF with `count` US Letter pages.
fn letter_pdf(count: usize) -> Vec<u8> {
    use lopdf::{Object, dictionary};

    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let kids: Vec<Object> = (0..count)
        .map(|_| {
            Object::Reference(doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => Object::Reference(pages_id),
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ],
            }))
        })
        .collect();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(count as i64),
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

fn write_temp(bytes: &[u8], suffix: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    f.write_all(bytes).unwrap();
    f.flush().unwrap();
    f
}

/// Page 1: one line with two words and a key with a value.
/// Page 2: one line and a table with a single cell.
const ANALYSIS: &str = r#"{"pages": [
    {
        "lines": [{
            "geometry": {"left": 0.1, "top": 0.2, "width": 0.5, "height": 0.05},
            "confidence": 0.987,
            "text": "Hello",
            "children": [
                {"geometry": {"left": 0.1, "top": 0.2, "width": 0.2, "height": 0.05}, "confidence": 0.99, "text": "Hel"},
                {"geometry": {"left": 0.3, "top": 0.2, "width": 0.3, "height": 0.05}, "confidence": 0.98, "text": "lo"}
            ]
        }],
        "keys": [{
            "geometry": {"left": 0.0, "top": 0.5, "width": 0.25, "height": 0.25},
            "confidence": 0.9,
            "text": "Name, first",
            "values": [{"geometry": {"left": 0.5, "top": 0.5, "width": 0.25, "height": 0.25}, "confidence": 0.8, "text": "Ada"}]
        }]
    },
    {
        "lines": [{
            "geometry": {"left": 0.5, "top": 0.5, "width": 0.25, "height": 0.25},
            "confidence": 0.5,
            "text": "Second"
        }],
        "tables": [{
            "geometry": {"left": 0.0, "top": 0.0, "width": 1.0, "height": 0.5},
            "confidence": 0.7,
            "children": [{"geometry": {"left": 0.0, "top": 0.0, "width": 0.5, "height": 0.25}, "confidence": 0.6}]
        }]
    }
]}"#;

fn fixtures(pages: usize) -> (tempfile::NamedTempFile, tempfile::NamedTempFile) {
    (
        write_temp(&letter_pdf(pages), ".pdf"),
        write_temp(ANALYSIS.as_bytes(), ".json"),
    )
}

#[test]
fn boxes_default_features_are_lines() {
    let (pdf, json) = fixtures(2);

    cmd()
        .args([
            "boxes",
            pdf.path().to_str().unwrap(),
            "--document",
            json.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(
            "page\ttype\txmin\tymin\txmax\tymax\tconfidence\ttext\n\
             1\tLINE\t61\t158\t367\t198\t0.99\tHello\n\
             2\tLINE\t306\t396\t459\t594\t0.50\tSecond\n",
        );
}

#[test]
fn boxes_text_and_form_in_group_order() {
    let (pdf, json) = fixtures(2);

    let output = cmd()
        .args([
            "boxes",
            pdf.path().to_str().unwrap(),
            "--document",
            json.path().to_str().unwrap(),
            "--features",
            "form,word",
            "--pages",
            "1",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let types: Vec<&str> = stdout
        .lines()
        .skip(1)
        .map(|l| l.split('\t').nth(1).unwrap())
        .collect();
    assert_eq!(types, vec!["WORD", "WORD", "KEY", "VALUE"]);
}

#[test]
fn boxes_pages_filter() {
    let (pdf, json) = fixtures(2);

    cmd()
        .args([
            "boxes",
            pdf.path().to_str().unwrap(),
            "--document",
            json.path().to_str().unwrap(),
            "--features",
            "table,cell",
            "--pages",
            "2",
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(
            "page,type,xmin,ymin,xmax,ymax,confidence,text\n\
             2,TABLE,0,0,612,396,0.70,table\n\
             2,CELL,0,0,306,198,0.60,cell\n",
        );
}

#[test]
fn boxes_table_feature_omits_cells() {
    let (pdf, json) = fixtures(2);

    cmd()
        .args([
            "boxes",
            pdf.path().to_str().unwrap(),
            "--document",
            json.path().to_str().unwrap(),
            "--features",
            "table",
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(
            "page,type,xmin,ymin,xmax,ymax,confidence,text\n\
             2,TABLE,0,0,612,396,0.70,table\n",
        );
}

#[test]
fn boxes_csv_escapes_text() {
    let (pdf, json) = fixtures(2);

    cmd()
        .args([
            "boxes",
            pdf.path().to_str().unwrap(),
            "--document",
            json.path().to_str().unwrap(),
            "--features",
            "key",
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1,KEY,0,396,153,594,0.90,\"Name, first\"",
        ));
}

#[test]
fn boxes_json_format() {
    let (pdf, json) = fixtures(2);

    let output = cmd()
        .args([
            "boxes",
            pdf.path().to_str().unwrap(),
            "--document",
            json.path().to_str().unwrap(),
            "--pages",
            "1",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "box_type": "LINE",
            "page_number": 1,
            "xmin": 61,
            "ymin": 158,
            "xmax": 367,
            "ymax": 198,
            "confidence": 0.99,
            "text": "Hello"
        }])
    );
}

#[test]
fn boxes_more_analyzed_pages_than_file_pages_fails() {
    let (pdf, json) = fixtures(1);

    cmd()
        .args([
            "boxes",
            pdf.path().to_str().unwrap(),
            "--document",
            json.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no page dimensions for page 2"));
}

#[test]
fn boxes_missing_geometry_fails() {
    let pdf = write_temp(&letter_pdf(1), ".pdf");
    let json = write_temp(
        br#"{"pages": [{"lines": [{"confidence": 0.9, "text": "floating"}]}]}"#,
        ".json",
    );

    cmd()
        .args([
            "boxes",
            pdf.path().to_str().unwrap(),
            "--document",
            json.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "need geometry to create LINE bounding box on page 1",
        ));
}

#[test]
fn boxes_unknown_feature_fails() {
    let (pdf, json) = fixtures(2);

    cmd()
        .args([
            "boxes",
            pdf.path().to_str().unwrap(),
            "--document",
            json.path().to_str().unwrap(),
            "--features",
            "line,signature",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown feature type"));
}

#[test]
fn boxes_page_out_of_range_fails() {
    let (pdf, json) = fixtures(2);

    cmd()
        .args([
            "boxes",
            pdf.path().to_str().unwrap(),
            "--document",
            json.path().to_str().unwrap(),
            "--pages",
            "3",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exceeds document page count"));
}

#[test]
fn boxes_invalid_json_fails() {
    let pdf = write_temp(&letter_pdf(1), ".pdf");
    let json = write_temp(b"{not json", ".json");

    cmd()
        .args([
            "boxes",
            pdf.path().to_str().unwrap(),
            "--document",
            json.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid analysis JSON"));
}
