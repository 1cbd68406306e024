//! Salario Domain Layer
//!
//! This crate contains the value types and fixed vocabulary shared by every
//! other layer of Salario. It has no behaviour beyond small conversions and
//! the defaulting rules that keep a [`SalaryRecord`] consistent.
//!
//! ## Key Concepts
//!
//! - **Token**: one tagged word produced by an external part-of-speech tagger
//! - **Salary triple**: the (type, currency, amount) result of classification
//! - **Salary record**: the triple plus the snippet it was read from
//! - **Vocabulary**: data tables (type words, currency synonyms, discard tags)
//!   consulted by the resolvers instead of hard-coded branches
//!
//! ## Architecture
//!
//! - Pure value types, no I/O
//! - Trait definition ([`traits::Tagger`]) for the tagging collaborator
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod post;
pub mod salary;
pub mod token;
pub mod traits;
pub mod vocabulary;

// Re-exports for convenience
pub use post::{AnnotatedPost, RawPost, SalaryRecord};
pub use salary::{Currency, SalaryTriple, SalaryType};
pub use token::{PartOfSpeech, Token};
pub use traits::Tagger;
