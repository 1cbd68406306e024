//! Lexicon Tagger Implementation
//!
//! A deterministic, offline tagger for short Spanish salary phrases. It splits
//! on whitespace, peels punctuation and currency symbols off each chunk, and
//! tags every piece from a handful of closed-class word tables. Open-class
//! words default to `NOUN`.
//!
//! It is not a general part-of-speech tagger; it exists so the pipeline can
//! run without an external tagging service.

use crate::TaggerError;
use salario_domain::{PartOfSpeech, Tagger, Token};

/// Punctuation split off the edges of a chunk
const PUNCTUATION: &[char] = &[
    ':', ';', ',', '.', '!', '?', '¿', '¡', '(', ')', '[', ']', '"', '\'', '-', '/', '=', '~',
];

/// Symbols split off a chunk when they stand next to digits
const SYMBOLS: &[char] = &['$', '€'];

const DETERMINERS: &[&str] = &[
    "EL", "LA", "LOS", "LAS", "UN", "UNA", "UNOS", "UNAS", "MI", "MIS", "SU", "SUS", "ESTE",
];
const ADPOSITIONS: &[&str] = &[
    "A", "AL", "DE", "DEL", "EN", "POR", "PARA", "CON", "SIN", "SOBRE", "ENTRE", "HASTA",
    "DESDE",
];
const CONJUNCTIONS: &[&str] = &["Y", "E", "O", "U", "NI", "PERO"];
const AUXILIARIES: &[&str] = &["ES", "SON", "ERA", "FUE", "SER", "SOY", "ESTOY", "HAY"];
const PRONOUNS: &[&str] = &["ME", "TE", "SE", "LO", "LE", "NOS", "QUE", "YO"];
const ADVERBS: &[&str] = &[
    "MAS", "MÁS", "MENOS", "CASI", "APROX", "APROXIMADAMENTE", "NO", "MUY",
];

/// Offline tagger backed by closed-class word tables
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    /// Create a new LexiconTagger
    pub fn new() -> Self {
        Self
    }

    /// Split text into surface pieces without tagging them
    pub fn split(&self, text: &str) -> Vec<String> {
        text.split_whitespace().flat_map(split_chunk).collect()
    }

    /// Tag a single surface piece
    pub fn tag_piece(&self, piece: &str) -> Token {
        let pos = classify_piece(piece);
        Token::new(piece, piece.to_lowercase(), pos)
    }
}

impl Tagger for LexiconTagger {
    type Error = TaggerError;

    fn tag(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        Ok(self
            .split(text)
            .iter()
            .map(|piece| self.tag_piece(piece))
            .collect())
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

fn split_chunk(chunk: &str) -> Vec<String> {
    let chars: Vec<char> = chunk.chars().collect();
    let mut start = 0;
    let mut end = chars.len();
    let mut leading = Vec::new();
    let mut trailing = Vec::new();

    while start < end {
        let c = chars[start];
        let rest_starts_with_digit = chars
            .get(start + 1)
            .is_some_and(|n| n.is_ascii_digit());
        let is_lone = start + 1 == end;
        if PUNCTUATION.contains(&c) || (SYMBOLS.contains(&c) && (rest_starts_with_digit || is_lone)) {
            leading.push(c.to_string());
            start += 1;
        } else {
            break;
        }
    }

    while end > start {
        let c = chars[end - 1];
        let follows_digit = end >= 2 && chars[end - 2].is_ascii_digit();
        if PUNCTUATION.contains(&c) || (SYMBOLS.contains(&c) && follows_digit) {
            trailing.push(c.to_string());
            end -= 1;
        } else {
            break;
        }
    }

    let mut pieces = leading;
    if start < end {
        let word = &chars[start..end];
        let suffix = glued_suffix_len(word);
        let split = word.len() - suffix;
        pieces.push(word[..split].iter().collect());
        if suffix > 0 {
            pieces.push(word[split..].iter().collect());
        }
    }
    pieces.extend(trailing.into_iter().rev());
    pieces
}

/// Length of a letter run glued to the end of a number, as in "150K" or
/// "1,5MILLONES"; zero unless the word starts with a digit and the run
/// directly follows one
fn glued_suffix_len(word: &[char]) -> usize {
    if !word.first().is_some_and(|c| c.is_ascii_digit()) {
        return 0;
    }
    let letters = word.iter().rev().take_while(|c| c.is_alphabetic()).count();
    let before = word.len() - letters;
    if letters > 0 && before > 0 && word[before - 1].is_ascii_digit() {
        letters
    } else {
        0
    }
}

fn classify_piece(piece: &str) -> PartOfSpeech {
    let mut chars = piece.chars();
    let first = chars.next();
    let single = first.is_some() && chars.next().is_none();

    if let Some(c) = first {
        if single && PUNCTUATION.contains(&c) {
            return PartOfSpeech::Punct;
        }
        if single && SYMBOLS.contains(&c) {
            return PartOfSpeech::Sym;
        }
        if c.is_ascii_digit() {
            return PartOfSpeech::Num;
        }
    }

    let upper = piece.to_uppercase();
    let word = upper.as_str();
    let tables: [(&[&str], PartOfSpeech); 6] = [
        (DETERMINERS, PartOfSpeech::Det),
        (ADPOSITIONS, PartOfSpeech::Adp),
        (CONJUNCTIONS, PartOfSpeech::Cconj),
        (AUXILIARIES, PartOfSpeech::Aux),
        (PRONOUNS, PartOfSpeech::Pron),
        (ADVERBS, PartOfSpeech::Adv),
    ];
    for (table, pos) in tables {
        if table.contains(&word) {
            return pos;
        }
    }

    if piece.chars().all(char::is_alphabetic) {
        PartOfSpeech::Noun
    } else {
        PartOfSpeech::Propn
    }
}
