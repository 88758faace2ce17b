//! JEP106-style PDF fixtures built with lopdf
#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::path::Path;

/// One table row: continuation marker, name, hex ID
pub type Row<'a> = (&'a str, &'a str, &'a str);

/// Text lines of one row as they appear on a JEP106 page
fn row_lines(row: &Row) -> Vec<String> {
    let (marker, name, hex) = row;
    let mut lines = vec![format!("{} {}", marker, name)];
    lines.extend((0..8).map(|_| "1 ".to_string()));
    lines.push(hex.to_string());
    lines
}

/// Write a PDF with one page per slice of rows, one text line per PDF line
pub fn write_jep106_pdf(path: &Path, pages: &[&[Row]]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for rows in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 10.into()]),
            Operation::new("Td", vec![72.into(), 780.into()]),
        ];
        for (i, line) in rows.iter().flat_map(row_lines).enumerate() {
            if i > 0 {
                operations.push(Operation::new("Td", vec![0.into(), (-12).into()]));
            }
            operations.push(Operation::new("Tj", vec![Object::string_literal(line)]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

/// Two banks spread over two pages
pub const PAGE_ONE: &[Row] = &[("1", "Acme Corp", "01"), ("2", "Beta Inc", "02")];
pub const PAGE_TWO: &[Row] = &[("1", "Gamma Ltd", "01")];
