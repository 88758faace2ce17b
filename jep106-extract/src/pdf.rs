//! PDF text extraction
//!
//! Wraps the pdf-extract crate. Pages are extracted individually and joined in
//! page order so the scanner sees one continuous text.

use crate::types::{GeneratorError, Result};
use std::path::Path;

/// Extract the text of every page of a PDF, concatenated in page order
pub fn extract_pdf_text(path: &Path) -> Result<String> {
    log::info!("Extracting text from PDF: {:?}", path);

    let bytes = std::fs::read(path).map_err(|source| GeneratorError::PdfRead {
        path: path.to_path_buf(),
        source,
    })?;

    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|e| {
        GeneratorError::PdfExtract {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    log::debug!("Extracted {} pages from {:?}", pages.len(), path);

    Ok(join_pages(&pages))
}

/// Join page texts, inserting a line break where a page does not end in one
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|p| p.as_ref().len() + 1).sum());

    for (index, page) in pages.iter().enumerate() {
        let page = page.as_ref();
        log::trace!("Page {}: {} bytes", index + 1, page.len());

        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(page);
    }

    text
}
