//! Importer configuration from environment variables.

use crate::output::OutputFormat;
use anyhow::{anyhow, Result};
use simpletester_core::DEFAULT_ENCODING;

pub const ENCODING_VAR: &str = "SIMPLETESTER_ENCODING";
pub const FORMAT_VAR: &str = "SIMPLETESTER_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub encoding: String,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
            format: OutputFormat::Plain,
        }
    }
}

impl Config {
    /// Load from the process environment. Call `dotenvy::dotenv()` first to
    /// pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(encoding) = lookup(ENCODING_VAR).filter(|v| !v.trim().is_empty()) {
            config.encoding = encoding.trim().to_string();
        }

        if let Some(format) = lookup(FORMAT_VAR).filter(|v| !v.trim().is_empty()) {
            config.format = <OutputFormat as clap::ValueEnum>::from_str(format.trim(), true)
                .map_err(|_| anyhow!("invalid {}: {}", FORMAT_VAR, format))?;
        }

        Ok(config)
    }

    /// Apply command line overrides.
    pub fn with_overrides(mut self, encoding: Option<String>, format: Option<OutputFormat>) -> Self {
        if let Some(encoding) = encoding {
            self.encoding = encoding;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
