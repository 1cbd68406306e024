//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::token::Token;

/// Trait for part-of-speech tagging
///
/// Implemented by the infrastructure layer (salario-tagger). Implementations
/// must be deterministic for a given input so classification is reproducible.
pub trait Tagger {
    /// Error type for tagging operations
    type Error;

    /// Split `text` into an ordered sequence of tagged tokens
    fn tag(&self, text: &str) -> Result<Vec<Token>, Self::Error>;

    /// Name reported in logs and run summaries
    fn name(&self) -> &str {
        "tagger"
    }
}

impl<T: Tagger + ?Sized> Tagger for &T {
    type Error = T::Error;

    fn tag(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        (**self).tag(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Tagger + ?Sized> Tagger for Box<T> {
    type Error = T::Error;

    fn tag(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        (**self).tag(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
