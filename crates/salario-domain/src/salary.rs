//! Salary module - the classification result and its canonical enums

use serde::{Deserialize, Serialize};
use std::fmt;

/// Salary type: before or after deductions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SalaryType {
    /// Before deductions ("bruto")
    Gross,
    /// After deductions ("neto", "en mano")
    Net,
}

impl SalaryType {
    /// Get the canonical name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryType::Gross => "GROSS",
            SalaryType::Net => "NET",
        }
    }

    /// Parse a canonical name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "GROSS" => Some(SalaryType::Gross),
            "NET" => Some(SalaryType::Net),
            _ => None,
        }
    }
}

impl fmt::Display for SalaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SalaryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid salary type: {}", s))
    }
}

/// Canonical currency code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Argentine peso, the local currency
    Ars,
    /// US dollar
    Usd,
    /// Euro
    Eur,
}

impl Currency {
    /// All canonical currencies
    pub const ALL: [Currency; 3] = [Currency::Ars, Currency::Usd, Currency::Eur];

    /// The currency assumed when a salary names none
    pub const LOCAL: Currency = Currency::Ars;

    /// Get the ISO code as a string
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Ars => "ARS",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Parse an exact canonical code (already upper-case)
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(&s.trim().to_uppercase())
            .ok_or_else(|| format!("Invalid currency: {}", s))
    }
}

/// The (type, currency, amount) result of classifying one snippet
///
/// Every component may be missing; [`SalaryTriple::finalize`] applies the
/// defaulting rules once scanning is over.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalaryTriple {
    /// Gross or net
    pub salary_type: Option<SalaryType>,

    /// Canonical currency
    pub currency: Option<Currency>,

    /// Normalized amount, never negative
    pub amount: Option<f64>,
}

impl SalaryTriple {
    /// Create a triple from its parts
    pub fn new(
        salary_type: Option<SalaryType>,
        currency: Option<Currency>,
        amount: Option<f64>,
    ) -> Self {
        Self {
            salary_type,
            currency,
            amount,
        }
    }

    /// Whether all three components are known
    pub fn is_complete(&self) -> bool {
        self.salary_type.is_some() && self.currency.is_some() && self.amount.is_some()
    }

    /// Whether no component is known
    pub fn is_empty(&self) -> bool {
        self.salary_type.is_none() && self.currency.is_none() && self.amount.is_none()
    }

    /// Apply the post-scan defaults
    ///
    /// - amount and currency without a type: the salary is taken as gross
    /// - type and amount without a currency: the local currency is assumed
    ///
    /// A triple without an amount is returned unchanged.
    pub fn finalize(mut self) -> Self {
        if self.amount.is_some() && self.currency.is_some() && self.salary_type.is_none() {
            self.salary_type = Some(SalaryType::Gross);
        }
        if self.salary_type.is_some() && self.amount.is_some() && self.currency.is_none() {
            self.currency = Some(Currency::LOCAL);
        }
        self
    }
}
