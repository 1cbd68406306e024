//! Salario Tagger Layer
//!
//! Pluggable part-of-speech tagger implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `Tagger` trait from `salario-domain`.
//! Classification only ever sees the tokens a tagger returns, never its internals.
//!
//! # Taggers
//!
//! - `MockTagger`: Hardcoded tag sequences for testing
//! - `LexiconTagger`: Deterministic offline tokenizer backed by word tables
//! - `RemoteTagger`: HTTP client for an external tagging service
//!
//! # Examples
//!
//! ```
//! use salario_tagger::MockTagger;
//! use salario_domain::{PartOfSpeech, Tagger, Token};
//!
//! let tagger = MockTagger::new(vec![Token::plain("NETO", PartOfSpeech::Propn)]);
//! let tokens = tagger.tag("anything").unwrap();
//! assert_eq!(tokens[0].surface_text, "NETO");
//! ```

#![warn(missing_docs)]

pub mod lexicon;
pub mod remote;

use salario_domain::{PartOfSpeech, Tagger, Token};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

pub use lexicon::LexiconTagger;
pub use remote::RemoteTagger;

/// Errors that can occur during tagging
#[derive(Error, Debug)]
pub enum TaggerError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the tagging service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Tag outside the supported tagset
    #[error("Unknown part of speech: {0}")]
    UnknownTag(String),

    /// Generic error
    #[error("Tagger error: {0}")]
    Other(String),
}

/// Mock tagger for deterministic testing
///
/// Returns pre-configured token sequences without looking at the text.
///
/// # Examples
///
/// ```
/// use salario_tagger::MockTagger;
/// use salario_domain::{PartOfSpeech, Tagger};
///
/// let mut tagger = MockTagger::default();
/// tagger.add_response("BRUTO 150", &[("BRUTO", PartOfSpeech::Propn), ("150", PartOfSpeech::Num)]);
///
/// assert_eq!(tagger.tag("BRUTO 150").unwrap().len(), 2);
/// assert!(tagger.tag("unknown").unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTagger {
    default_tokens: Vec<Token>,
    responses: Arc<Mutex<HashMap<String, Vec<Token>>>>,
    errors: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockTagger {
    /// Create a new MockTagger returning the same tokens for all texts
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            default_tokens: tokens,
            ..Self::default()
        }
    }

    /// Create a MockTagger from `(surface, tag)` pairs; lemmas equal the surface
    pub fn from_pairs(pairs: &[(&str, PartOfSpeech)]) -> Self {
        Self::new(tokens_from_pairs(pairs))
    }

    /// Add a specific token sequence for a given text
    pub fn add_response(&mut self, text: impl Into<String>, pairs: &[(&str, PartOfSpeech)]) {
        self.add_tokens(text, tokens_from_pairs(pairs));
    }

    /// Add a specific token sequence, with explicit lemmas, for a given text
    pub fn add_tokens(&mut self, text: impl Into<String>, tokens: Vec<Token>) {
        lock(&self.responses).insert(text.into(), tokens);
    }

    /// Configure to return an error for a specific text
    pub fn add_error(&mut self, text: impl Into<String>) {
        lock(&self.errors).push(text.into());
    }

    /// Get the number of times tag was called
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *lock(&self.call_count) = 0;
    }
}

impl Tagger for MockTagger {
    type Error = TaggerError;

    fn tag(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        *lock(&self.call_count) += 1;

        if lock(&self.errors).iter().any(|t| t == text) {
            return Err(TaggerError::Other("Mock error".to_string()));
        }

        if let Some(tokens) = lock(&self.responses).get(text) {
            return Ok(tokens.clone());
        }

        Ok(self.default_tokens.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Build plain tokens from `(surface, tag)` pairs
pub fn tokens_from_pairs(pairs: &[(&str, PartOfSpeech)]) -> Vec<Token> {
    pairs
        .iter()
        .map(|(text, pos)| Token::plain(*text, *pos))
        .collect()
}

// A poisoned mock only means another test thread panicked; the data is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_tagger_default() {
        let tagger = MockTagger::from_pairs(&[("80000", PartOfSpeech::Num)]);
        let tokens = tagger.tag("any text").unwrap();
        assert_eq!(tokens, vec![Token::plain("80000", PartOfSpeech::Num)]);
    }

    #[test]
    fn test_mock_tagger_specific_responses() {
        let mut tagger = MockTagger::default();
        tagger.add_response("NETO", &[("NETO", PartOfSpeech::Propn)]);
        tagger.add_tokens("$", vec![Token::new("$", "$", PartOfSpeech::Sym)]);

        assert_eq!(tagger.tag("NETO").unwrap()[0].part_of_speech, PartOfSpeech::Propn);
        assert_eq!(tagger.tag("$").unwrap()[0].lemma, "$");
        assert!(tagger.tag("other").unwrap().is_empty());
    }

    #[test]
    fn test_mock_tagger_call_count() {
        let tagger = MockTagger::default();
        assert_eq!(tagger.call_count(), 0);

        tagger.tag("one").unwrap();
        tagger.tag("two").unwrap();
        assert_eq!(tagger.call_count(), 2);

        tagger.reset_call_count();
        assert_eq!(tagger.call_count(), 0);
    }

    #[test]
    fn test_mock_tagger_error() {
        let mut tagger = MockTagger::default();
        tagger.add_error("bad text");

        let result = tagger.tag("bad text");
        assert!(matches!(result, Err(TaggerError::Other(_))));
    }

    #[test]
    fn test_mock_tagger_clone_shares_state() {
        let tagger1 = MockTagger::default();
        let tagger2 = tagger1.clone();

        tagger1.tag("x").unwrap();

        assert_eq!(tagger1.call_count(), 1);
        assert_eq!(tagger2.call_count(), 1);
        assert_eq!(tagger2.name(), "mock");
    }
}
