//! Configuration loading and parsing

use anyhow::{Context, Result};
use jep106_extract::{GeneratorConfig, ScanConfig, TemplateConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Default file locations, overridden by command-line arguments
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Template to read when `--template` is not given
    pub template: Option<PathBuf>,
    /// Where to dump the table as JSON when `--json` is not given
    pub json: Option<PathBuf>,
}

impl AppConfig {
    /// Generator settings of this configuration
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            scan: self.scan.clone(),
            template: self.template.clone(),
        }
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    config
        .generator_config()
        .validate()
        .with_context(|| format!("Invalid config file: {:?}", path))?;

    Ok(config)
}
