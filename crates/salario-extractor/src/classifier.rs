//! Classification engine
//!
//! Walks the tagged tokens of a snippet and fills in the salary type, currency
//! and amount according to where each meaningful token sits. Discarded tags
//! (punctuation, determiners, adpositions, auxiliaries, conjunctions) are
//! skipped without taking a position, so "neto de $ 80000" lines up the same
//! way as "neto $ 80000".
//!
//! Rules per position, first match wins within a position and a field is never
//! overwritten:
//!
//! | position | rules                                                                    |
//! |----------|--------------------------------------------------------------------------|
//! | 1        | type word → type; else noun → currency                                   |
//! | 2        | type word → type; else noun → currency; else 1-char symbol → currency; else number → amount |
//! | 3+       | number → amount, else noun after an amount → multiplier; and independently noun → currency |

use crate::amount::normalize_amount;
use crate::canonical::{canonicalize_type, is_type_word, resolve_currency};
use crate::config::ExtractorConfig;
use salario_domain::vocabulary::{tag_in, AMOUNT_TAGS, CURRENCY_TAGS, SUFFIX_TAGS, SYMBOL_TAGS};
use salario_domain::{SalaryTriple, Tagger, Token};
use tracing::{debug, warn};

/// The classification engine
///
/// Holds the injected tagger; classification of a token sequence is a pure
/// function and never fails.
pub struct Classifier<T: Tagger> {
    tagger: T,
    max_positions: usize,
}

impl<T> Classifier<T>
where
    T: Tagger,
    T::Error: std::fmt::Display,
{
    /// Create a new Classifier
    pub fn new(tagger: T, config: &ExtractorConfig) -> Self {
        Self {
            tagger,
            max_positions: config.max_positions,
        }
    }

    /// The injected tagger
    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    /// Tag a snippet and classify it
    ///
    /// A tagger failure is logged and classified as an empty token sequence.
    pub fn classify_text(&self, snippet: &str) -> SalaryTriple {
        if snippet.is_empty() {
            return SalaryTriple::default();
        }
        match self.tagger.tag(snippet) {
            Ok(tokens) => self.classify(&tokens),
            Err(e) => {
                warn!("Tagger '{}' failed on '{}': {}", self.tagger.name(), snippet, e);
                SalaryTriple::default()
            }
        }
    }

    /// Classify tokens and apply the post-scan defaults
    pub fn classify(&self, tokens: &[Token]) -> SalaryTriple {
        self.scan(tokens).finalize()
    }

    /// Classify tokens without applying defaults
    pub fn scan(&self, tokens: &[Token]) -> SalaryTriple {
        scan_tokens(tokens, self.max_positions)
    }
}

/// Positional scan over the meaningful tokens
///
/// The position counter starts at 1 and advances after each meaningful token;
/// scanning stops once it reaches `max_positions` or the triple is complete.
pub fn scan_tokens(tokens: &[Token], max_positions: usize) -> SalaryTriple {
    let mut state = SalaryTriple::default();
    let mut position = 1;

    for token in tokens.iter().filter(|t| !t.is_discarded()) {
        let text = token.upper_text();
        debug!("{} {} ({})", text, token.part_of_speech, position);

        match position {
            1 => first_position(&mut state, token, &text),
            2 => second_position(&mut state, token, &text),
            _ => later_position(&mut state, token, &text),
        }

        position += 1;
        if position >= max_positions || state.is_complete() {
            break;
        }
    }

    state
}

/// The first word usually names the type, occasionally the currency
fn first_position(state: &mut SalaryTriple, token: &Token, text: &str) {
    let pos = token.part_of_speech;
    if is_type_word(text) {
        state.salary_type = canonicalize_type(text);
    } else if tag_in(CURRENCY_TAGS, pos) && state.currency.is_none() {
        state.currency = resolve_currency(text);
    }
}

fn second_position(state: &mut SalaryTriple, token: &Token, text: &str) {
    let pos = token.part_of_speech;
    if is_type_word(text) && state.salary_type.is_none() {
        state.salary_type = canonicalize_type(text);
    } else if tag_in(CURRENCY_TAGS, pos) && state.currency.is_none() {
        state.currency = resolve_currency(text);
    } else if tag_in(SYMBOL_TAGS, pos)
        && token.lemma.chars().count() == 1
        && state.currency.is_none()
    {
        state.currency = resolve_currency(text);
    } else if tag_in(AMOUNT_TAGS, pos) && token.starts_with_digit() && state.amount.is_none() {
        state.amount = normalize_amount(text);
    }
}

fn later_position(state: &mut SalaryTriple, token: &Token, text: &str) {
    let pos = token.part_of_speech;
    if tag_in(AMOUNT_TAGS, pos) && token.starts_with_digit() && state.amount.is_none() {
        state.amount = normalize_amount(text);
    } else if tag_in(SUFFIX_TAGS, pos) {
        if let (Some(amount), Some(multiplier)) = (state.amount, normalize_amount(text)) {
            state.amount = Some(amount * multiplier);
        }
    }

    if tag_in(CURRENCY_TAGS, pos) && state.currency.is_none() {
        state.currency = resolve_currency(text);
    }
}
