//! Generator configuration types
//!
//! The defaults describe the JEP106 table layout and the template format the
//! generated lookup table is embedded in. Everything can be overridden, which
//! keeps the scanner usable when a new revision of the PDF shifts its layout.

use crate::types::{GeneratorError, Result};
use serde::{Deserialize, Serialize};

/// Full configuration for one generator run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// How table rows are recognised in the PDF text
    #[serde(default)]
    pub scan: ScanConfig,

    /// How the generated literal is rendered and spliced into the template
    #[serde(default)]
    pub template: TemplateConfig,
}

/// Layout of one JEP106 table row in extracted text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Number of bit-column lines between the name and the hex ID (default: 8)
    #[serde(default = "default_skip_lines")]
    pub skip_lines: usize,

    /// Maximum number of lines a manufacturer name may span (default: 2)
    #[serde(default = "default_max_name_lines")]
    pub max_name_lines: usize,
}

fn default_skip_lines() -> usize {
    8
}

fn default_max_name_lines() -> usize {
    2
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            skip_lines: default_skip_lines(),
            max_name_lines: default_max_name_lines(),
        }
    }
}

/// Markers of the template file the table is embedded in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Opening line of the data literal (default: `_manufacturers = [`)
    #[serde(default = "default_block_start")]
    pub block_start: String,

    /// Line closing the data literal (default: `]`)
    #[serde(default = "default_block_end")]
    pub block_end: String,

    /// Prefix identifying the version comment line (default: `# Version`)
    #[serde(default = "default_version_prefix")]
    pub version_prefix: String,

    /// Label written before the PDF name in the version line (default: `JEDEC`)
    #[serde(default = "default_version_label")]
    pub version_label: String,
}

fn default_block_start() -> String {
    "_manufacturers = [".to_string()
}

fn default_block_end() -> String {
    "]".to_string()
}

fn default_version_prefix() -> String {
    "# Version".to_string()
}

fn default_version_label() -> String {
    "JEDEC".to_string()
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            block_start: default_block_start(),
            block_end: default_block_end(),
            version_prefix: default_version_prefix(),
            version_label: default_version_label(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with the JEP106 defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the number of bit-column lines per row
    pub fn with_skip_lines(mut self, lines: usize) -> Self {
        self.scan.skip_lines = lines;
        self
    }

    /// Builder method: set the maximum number of name lines
    pub fn with_max_name_lines(mut self, lines: usize) -> Self {
        self.scan.max_name_lines = lines;
        self
    }

    /// Builder method: set the opening line of the data literal
    pub fn with_block_start(mut self, start: impl Into<String>) -> Self {
        self.template.block_start = start.into();
        self
    }

    /// Builder method: set the closing line of the data literal
    pub fn with_block_end(mut self, end: impl Into<String>) -> Self {
        self.template.block_end = end.into();
        self
    }

    /// Builder method: set the version line prefix
    pub fn with_version_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.template.version_prefix = prefix.into();
        self
    }

    /// Check the values a run cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.scan.max_name_lines == 0 {
            return Err(GeneratorError::Config(
                "max_name_lines must be at least 1".to_string(),
            ));
        }
        if self.template.block_start.trim().is_empty() {
            return Err(GeneratorError::Config("block_start must not be empty".to_string()));
        }
        if self.template.block_end.trim().is_empty() {
            return Err(GeneratorError::Config("block_end must not be empty".to_string()));
        }
        if self.template.block_start.contains('\n') || self.template.block_end.contains('\n') {
            return Err(GeneratorError::Config(
                "block markers must be single lines".to_string(),
            ));
        }
        Ok(())
    }
}
