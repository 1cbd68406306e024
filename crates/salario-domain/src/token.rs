//! Token module - the tagged words handed over by the tagging collaborator

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::vocabulary::DISCARDED_TAGS;

/// Coarse part-of-speech tag
///
/// The tagset is fixed: any tagger adapter must map its own labels onto these
/// twelve values (anything else is reported as an error by the adapter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    /// Numeral
    Num,
    /// Proper noun
    Propn,
    /// Common noun
    Noun,
    /// Pronoun
    Pron,
    /// Adjective
    Adj,
    /// Symbol (`$`, `€`, ...)
    Sym,
    /// Punctuation
    Punct,
    /// Determiner
    Det,
    /// Adposition
    Adp,
    /// Adverb
    Adv,
    /// Auxiliary verb
    Aux,
    /// Coordinating conjunction
    Cconj,
}

impl PartOfSpeech {
    /// All tags, in tagset order
    pub const ALL: [PartOfSpeech; 12] = [
        PartOfSpeech::Num,
        PartOfSpeech::Propn,
        PartOfSpeech::Noun,
        PartOfSpeech::Pron,
        PartOfSpeech::Adj,
        PartOfSpeech::Sym,
        PartOfSpeech::Punct,
        PartOfSpeech::Det,
        PartOfSpeech::Adp,
        PartOfSpeech::Adv,
        PartOfSpeech::Aux,
        PartOfSpeech::Cconj,
    ];

    /// Get the tag label as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
        }
    }

    /// Parse a tag label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let upper = s.trim().to_uppercase();
        Self::ALL.into_iter().find(|tag| tag.as_str() == upper)
    }

    /// Whether tokens with this tag are skipped without occupying a position
    pub fn is_discarded(&self) -> bool {
        DISCARDED_TAGS.contains(self)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PartOfSpeech {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid part of speech: {}", s))
    }
}

/// A single tagged token
///
/// Tokens are immutable once produced by a tagger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Text exactly as it appeared in the snippet
    #[serde(rename = "text")]
    pub surface_text: String,

    /// Dictionary form reported by the tagger
    pub lemma: String,

    /// Coarse part-of-speech tag
    #[serde(rename = "pos")]
    pub part_of_speech: PartOfSpeech,
}

impl Token {
    /// Create a token with an explicit lemma
    pub fn new(
        surface_text: impl Into<String>,
        lemma: impl Into<String>,
        part_of_speech: PartOfSpeech,
    ) -> Self {
        Self {
            surface_text: surface_text.into(),
            lemma: lemma.into(),
            part_of_speech,
        }
    }

    /// Create a token whose lemma equals its surface text
    pub fn plain(surface_text: impl Into<String>, part_of_speech: PartOfSpeech) -> Self {
        let surface_text = surface_text.into();
        Self {
            lemma: surface_text.clone(),
            surface_text,
            part_of_speech,
        }
    }

    /// Surface text upper-cased, the form every resolver works on
    pub fn upper_text(&self) -> String {
        self.surface_text.to_uppercase()
    }

    /// Whether the surface text begins with a decimal digit
    pub fn starts_with_digit(&self) -> bool {
        self.surface_text
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
    }

    /// Whether this token is skipped by classification
    pub fn is_discarded(&self) -> bool {
        self.part_of_speech.is_discarded()
    }
}
