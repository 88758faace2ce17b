//! Main generator API
//!
//! The Generator ties the pipeline together: PDF text extraction, row scanning,
//! bank grouping, literal rendering and template substitution.

use crate::config::GeneratorConfig;
use crate::render::{render_literal, version_line};
use crate::scanner::scan_records;
use crate::table::build_table;
use crate::template;
use crate::types::{GeneratorError, ManufacturerTable, Result};
use std::io::Write;
use std::path::Path;

/// Outcome of one generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Table that was rendered into the output
    pub table: ManufacturerTable,
    /// Full regenerated template text
    pub output: String,
}

/// The main generator struct - entry point for all generation operations
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a new generator with the given configuration
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Extract the manufacturer table from a JEP106 PDF
    ///
    /// # Example
    /// ```no_run
    /// use jep106_extract::{Generator, GeneratorConfig};
    /// use std::path::Path;
    ///
    /// let generator = Generator::new(GeneratorConfig::new()).unwrap();
    /// let table = generator.extract_table(Path::new("JEP106BL.pdf")).unwrap();
    /// println!("{} banks", table.banks.len());
    /// ```
    pub fn extract_table(&self, pdf: &Path) -> Result<ManufacturerTable> {
        let text = crate::pdf::extract_pdf_text(pdf)?;
        Ok(self.table_from_text(&text))
    }

    /// Build the manufacturer table from already-extracted PDF text
    pub fn table_from_text(&self, text: &str) -> ManufacturerTable {
        let records = scan_records(text, &self.config.scan);
        if records.is_empty() {
            log::warn!("No manufacturer rows matched; the generated table will be empty");
        }
        build_table(&records)
    }

    /// Regenerate template text from extracted PDF text
    ///
    /// `pdf_name` is written verbatim into the version line.
    pub fn generate_from_text(
        &self,
        pdf_text: &str,
        pdf_name: &str,
        template_text: &str,
    ) -> Result<GenerationReport> {
        let table = self.table_from_text(pdf_text);
        let output = self.render_into(&table, pdf_name, template_text)?;
        Ok(GenerationReport { table, output })
    }

    /// Render a table into template text, replacing the version line and data block
    pub fn render_into(
        &self,
        table: &ManufacturerTable,
        pdf_name: &str,
        template_text: &str,
    ) -> Result<String> {
        let cfg = &self.config.template;
        let literal = render_literal(table, cfg);
        template::apply(template_text, &version_line(pdf_name, cfg), &literal, cfg)
    }

    /// Run the whole pipeline without touching the output file
    pub fn prepare(&self, pdf: &Path, template_path: &Path) -> Result<GenerationReport> {
        log::info!("Reading template: {:?}", template_path);
        let template_text =
            std::fs::read_to_string(template_path).map_err(|source| GeneratorError::TemplateRead {
                path: template_path.to_path_buf(),
                source,
            })?;

        let table = self.extract_table(pdf)?;
        let output = self.render_into(&table, &pdf.display().to_string(), &template_text)?;
        Ok(GenerationReport { table, output })
    }

    /// Run the whole pipeline and write the regenerated template to `output`
    ///
    /// Nothing is written if any step fails.
    pub fn generate(&self, pdf: &Path, template_path: &Path, output: &Path) -> Result<GenerationReport> {
        let report = self.prepare(pdf, template_path)?;

        log::info!("Writing {} bytes to {:?}", report.output.len(), output);
        write_atomic(output, &report.output)?;

        Ok(report)
    }
}

/// Write `contents` to `path` through a temporary file in the same directory
///
/// The target is replaced only once the full contents are on disk.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| GeneratorError::Io(e.error))?;

    log::debug!("Persisted {:?}", path);
    Ok(())
}
