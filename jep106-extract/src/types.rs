//! Core types for the JEP106 extraction library
//!
//! This module defines the records recovered from the PDF text, the bank-grouped
//! manufacturer table built from them, and the library error type.

use serde::Serialize;
use std::path::PathBuf;

/// Result type for extraction and generation operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// One table row as captured from the PDF text, before bank grouping
///
/// Marker and name are already normalized (embedded newlines removed, trimmed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Continuation marker; `"1"` starts a new bank
    pub marker: String,
    /// Manufacturer name
    pub name: String,
    /// Byte ID, parsed from the two hex digits printed in the PDF
    pub id: u8,
}

impl RawRecord {
    /// Create a new record from already-normalized fields
    pub fn new(marker: impl Into<String>, name: impl Into<String>, id: u8) -> Self {
        Self {
            marker: marker.into(),
            name: name.into(),
            id,
        }
    }

    /// True if this row opens a new bank
    pub fn starts_bank(&self) -> bool {
        self.marker == "1"
    }
}

/// A manufacturer ID with the bank it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManufacturerEntry {
    /// Bank number (1-based)
    pub bank: u32,
    /// Byte ID within the bank
    pub id: u8,
    /// Manufacturer name
    pub name: String,
}

/// One JEP106 bank: an ordered mapping from byte ID to manufacturer name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bank {
    /// Bank number (1-based)
    pub number: u32,
    /// Entries in document order
    pub entries: Vec<(u8, String)>,
}

impl Bank {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All banks recovered from one PDF, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManufacturerTable {
    /// Rows seen before the first new-bank marker
    ///
    /// Clean JEP106 input never produces these; they are kept so the rendered
    /// literal still carries every captured row.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub orphans: Vec<(u8, String)>,
    /// Banks in document order
    pub banks: Vec<Bank>,
}

impl ManufacturerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of entries, orphans included
    pub fn entry_count(&self) -> usize {
        self.orphans.len() + self.banks.iter().map(Bank::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Flatten the banked table into entries, in document order
    ///
    /// Orphan rows are not part of any bank and are skipped.
    pub fn entries(&self) -> impl Iterator<Item = ManufacturerEntry> + '_ {
        self.banks.iter().flat_map(|bank| {
            bank.entries.iter().map(move |(id, name)| ManufacturerEntry {
                bank: bank.number,
                id: *id,
                name: name.clone(),
            })
        })
    }
}

/// Errors that can occur while extracting or generating
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Failed to read PDF {path:?}: {source}")]
    PdfRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to extract text from PDF {path:?}: {message}")]
    PdfExtract { path: PathBuf, message: String },

    #[error("Failed to read template {path:?}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template has no data block starting with {0:?}")]
    MissingBlock(String),

    #[error("Data block starting with {start:?} is never closed by a {end:?} line")]
    UnterminatedBlock { start: String, end: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
