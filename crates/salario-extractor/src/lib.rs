//! Salario Extractor
//!
//! Reads salary mentions out of short, free-form forum posts.
//!
//! # Overview
//!
//! Posts in a "how much do you earn" thread usually contain a line such as
//! `Salario mensual bruto: 150 mil pesos`. The extractor isolates that line,
//! has it tagged by an injected part-of-speech tagger, and runs a positional
//! rule table over the tagged tokens to decide the salary type (gross or net),
//! the currency and the amount. Missing pieces are defaulted conservatively.
//!
//! # Architecture
//!
//! ```text
//! Post → CandidateExtractor → snippet → Tagger → tokens → Classifier → triple → SalaryRecord
//! ```
//!
//! # Key Features
//!
//! - **Candidate extraction**: anchored pattern match on the trigger phrase
//! - **Amount normalization**: locale separators and multiplier words ("mil", "K")
//! - **Vocabulary tables**: currency synonyms and type words as data
//! - **Total classification**: never fails, unresolved fields stay `None`
//! - **Run summary and statistics**: counts, share of posts with salaries, means
//!
//! # Example Usage
//!
//! ```
//! use salario_extractor::{ExtractorConfig, RecordAssembler};
//! use salario_domain::{Currency, RawPost, SalaryType};
//! use salario_tagger::LexiconTagger;
//!
//! let assembler = RecordAssembler::new(LexiconTagger::new(), ExtractorConfig::default()).unwrap();
//!
//! let post = RawPost {
//!     post_number: 1,
//!     username: "ana".to_string(),
//!     timestamp_unix: 1_644_506_400,
//!     text: "Puesto: Dev|Salario mensual bruto: 150 mil pesos|Empresa: X".to_string(),
//! };
//!
//! let record = assembler.assemble(&post);
//! assert_eq!(record.salary_type, Some(SalaryType::Gross));
//! assert_eq!(record.currency, Some(Currency::Ars));
//! assert_eq!(record.amount, Some(150_000.0));
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod candidate;
mod canonical;
mod amount;
mod classifier;
mod assembler;
mod summary;
mod stats;
mod io;

#[cfg(test)]
mod tests;

pub use error::ExtractorError;
pub use config::{ExchangeRates, ExtractorConfig};
pub use candidate::{sanitize_post_text, CandidateExtractor};
pub use canonical::{canonicalize_type, is_type_word, resolve_currency};
pub use amount::normalize_amount;
pub use classifier::{scan_tokens, Classifier};
pub use assembler::{RecordAssembler, RunContext};
pub use summary::RunSummary;
pub use stats::SalaryStats;
pub use io::{load_posts, load_records, load_summary_or_default, save_records, save_summary};
