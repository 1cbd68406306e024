//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use salario_domain::Tagger;
use salario_extractor::{ExchangeRates, ExtractorConfig};
use salario_tagger::remote::{DEFAULT_ENDPOINT, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use salario_tagger::{LexiconTagger, RemoteTagger, TaggerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// A tagger chosen at runtime from configuration.
pub type DynTagger = Box<dyn Tagger<Error = TaggerError>>;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Candidate extraction and classification settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Which tagger to run
    #[serde(default)]
    pub tagger: TaggerSettings,

    /// Exchange rates used by `stats`
    #[serde(default)]
    pub rates: ExchangeRates,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Tagger selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggerSettings {
    /// Tagger implementation
    #[serde(default)]
    pub kind: TaggerKind,

    /// Service endpoint for the remote tagger
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout for the remote tagger
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Attempts per request for the remote tagger
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

/// Tagger implementations selectable from the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaggerKind {
    /// Offline word-table tagger
    #[default]
    Lexicon,
    /// External part-of-speech service
    Remote,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".salario").join("config.toml"))
    }

    /// Resolve the configuration file path, honoring an explicit override.
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration from file, or defaults when the file is missing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at '{}', using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check every section for out-of-range values.
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate().map_err(CliError::Config)?;
        self.rates.validate().map_err(CliError::Config)?;
        if self.tagger.kind == TaggerKind::Remote && self.tagger.endpoint.trim().is_empty() {
            return Err(CliError::Config("tagger.endpoint must be set for the remote tagger".into()));
        }
        Ok(())
    }

    /// Build the configured tagger.
    pub fn build_tagger(&self) -> Result<DynTagger> {
        match self.tagger.kind {
            TaggerKind::Lexicon => Ok(Box::new(LexiconTagger::new())),
            TaggerKind::Remote => {
                let tagger = RemoteTagger::with_timeout(
                    self.tagger.endpoint.as_str(),
                    Duration::from_secs(self.tagger.timeout_secs),
                )?
                .with_max_retries(self.tagger.max_retries);
                Ok(Box::new(tagger))
            }
        }
    }
}

impl Default for TaggerSettings {
    fn default() -> Self {
        Self {
            kind: TaggerKind::default(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
