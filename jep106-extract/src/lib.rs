//! JEP106 Extraction Library
//!
//! Extracts the JEDEC JEP106 manufacturer-ID tables from the standard's PDF and
//! regenerates the static lookup table embedded in a source file.
//!
//! # Architecture
//!
//! The pipeline is a single linear pass:
//! - Extract the text of every page of the PDF, in page order
//! - Scan the text for table rows (marker, name, hex ID)
//! - Group rows into banks (marker `1` opens the next bank)
//! - Render the banks as a data literal
//! - Splice the literal and a version comment into a template file
//!
//! The library does NOT:
//! - Validate IDs for duplicates or parity
//! - Parse arbitrary PDF tables
//!
//! Argument handling and logging setup live in the application layer (jep106-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use jep106_extract::{Generator, GeneratorConfig};
//! use std::path::Path;
//!
//! let generator = Generator::new(GeneratorConfig::new()).unwrap();
//! let report = generator
//!     .generate(
//!         Path::new("JEP106BL.pdf"),
//!         Path::new("JedecManufacturers.cs"),
//!         Path::new("JedecManufacturers.cs"),
//!     )
//!     .unwrap();
//!
//! for bank in &report.table.banks {
//!     println!("Bank {}: {} manufacturers", bank.number, bank.len());
//! }
//! ```

// Public modules
pub mod config;
pub mod generator;
pub mod pdf;
pub mod render;
pub mod scanner;
pub mod template;
pub mod types;

mod table;

// Re-export main types for convenience
pub use config::{GeneratorConfig, ScanConfig, TemplateConfig};
pub use generator::{write_atomic, GenerationReport, Generator};
pub use table::build_table;
pub use types::{Bank, GeneratorError, ManufacturerEntry, ManufacturerTable, RawRecord, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
