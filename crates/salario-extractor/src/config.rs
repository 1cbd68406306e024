//! Configuration for the Extractor

use crate::error::ExtractorError;
use salario_domain::Currency;
use serde::{Deserialize, Serialize};

/// Configuration for candidate extraction and classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Phrase that introduces a salary mention (matched case-insensitively)
    pub trigger_phrase: String,

    /// Character that stands in for line breaks in post text
    pub line_separator: char,

    /// Scanning stops once the position counter reaches this value
    pub max_positions: usize,

    /// Strip tabs, carriage returns and `*` and fold newlines before matching
    pub sanitize_text: bool,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.trigger_phrase.trim().is_empty() {
            return Err("trigger_phrase must not be empty".to_string());
        }
        if self.line_separator.is_alphanumeric() || self.line_separator.is_whitespace() {
            return Err(format!(
                "line_separator {:?} must be a punctuation or symbol character",
                self.line_separator
            ));
        }
        if self.max_positions < 2 {
            return Err("max_positions must be at least 2".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate().map_err(ExtractorError::Config)?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            trigger_phrase: "salario mensual".to_string(),
            line_separator: '|',
            max_positions: 6,
            sanitize_text: true,
        }
    }
}

/// Exchange rates used to express foreign amounts in the local currency
///
/// Rates are supplied by the user; nothing here fetches them. A missing rate
/// leaves amounts in that currency out of converted statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    /// Pesos per US dollar
    pub usd: Option<f64>,

    /// Pesos per euro
    pub eur: Option<f64>,
}

impl ExchangeRates {
    /// Create rates for both foreign currencies
    pub fn new(usd: f64, eur: f64) -> Self {
        Self {
            usd: Some(usd),
            eur: Some(eur),
        }
    }

    /// Pesos per unit of `currency`, if known
    pub fn rate(&self, currency: Currency) -> Option<f64> {
        match currency {
            Currency::Ars => Some(1.0),
            Currency::Usd => self.usd,
            Currency::Eur => self.eur,
        }
    }

    /// Convert an amount to pesos
    pub fn to_local(&self, amount: f64, currency: Currency) -> Option<f64> {
        self.rate(currency).map(|rate| amount * rate)
    }

    /// Validate that every configured rate is positive
    pub fn validate(&self) -> Result<(), String> {
        for (name, rate) in [("usd", self.usd), ("eur", self.eur)] {
            if let Some(rate) = rate {
                if !(rate.is_finite() && rate > 0.0) {
                    return Err(format!("{} rate must be a positive number, got {}", name, rate));
                }
            }
        }
        Ok(())
    }
}
