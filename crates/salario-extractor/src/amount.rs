//! Amount normalization
//!
//! Turns a numeric-looking token ("80.000", "1.234,56", "150K", "MIL") into a
//! float. Used both for the amount itself and for multiplier suffixes.
//!
//! Non-digit input goes through a fixed sequence of rewrites:
//!
//! 1. drop everything but letters, ASCII digits, `_`, `.` and `,`
//! 2. elide a thousands separator (digit, separator, exactly three digits)
//! 3. turn a decimal separator (digit, separator, one or two digits) into `.`
//! 4. million words become `1000000`
//! 5. thousand words become `1000`
//! 6. drop remaining ASCII letters
//!
//! The order matters: step 3 would misread `1.234` as a decimal if step 2 had
//! not already removed the separator.

use salario_domain::vocabulary::{MILLION_WORDS, THOUSAND_WORDS};
use tracing::warn;

const SEPARATORS: &[char] = &['.', ','];

/// Normalize a token into a non-negative amount
///
/// Returns `None` when nothing numeric is left or the cleaned text does not
/// parse; parse failures are logged, never returned as errors.
pub fn normalize_amount(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }

    let cleaned = if text.chars().all(|c| c.is_ascii_digit()) {
        text.to_string()
    } else {
        rewrite(text)
    };

    if cleaned.is_empty() {
        return None;
    }

    match cleaned.parse::<f64>() {
        Ok(amount) => Some(amount),
        Err(e) => {
            warn!("Could not convert '{}' (from '{}') to a number: {}", cleaned, text, e);
            None
        }
    }
}

/// Apply the rewrite passes in order
fn rewrite(text: &str) -> String {
    let kept = keep_numeric_chars(&text.to_uppercase());
    let elided = elide_thousands_separators(&kept);
    let decimal = convert_decimal_separators(&elided);
    let millions = replace_words(&decimal, MILLION_WORDS, "1000000");
    let thousands = replace_words(&millions, THOUSAND_WORDS, "1000");
    strip_letters(&thousands)
}

// Only ASCII digits count as digits everywhere below, so other numerals go here
fn keep_numeric_chars(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphabetic() || c.is_ascii_digit() || *c == '_' || SEPARATORS.contains(c))
        .collect()
}

/// Length of the run of ASCII digits starting at `start`
fn digit_run(chars: &[char], start: usize) -> usize {
    chars
        .iter()
        .skip(start)
        .take_while(|c| c.is_ascii_digit())
        .count()
}

/// Rewrite separators that sit after a digit and before a digit run whose
/// length satisfies `accept`
fn rewrite_separators(
    text: &str,
    accept: impl Fn(usize) -> bool,
    replacement: Option<char>,
) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        let after_digit = i > 0 && chars[i - 1].is_ascii_digit();
        if SEPARATORS.contains(&c) && after_digit && accept(digit_run(&chars, i + 1)) {
            if let Some(r) = replacement {
                out.push(r);
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn elide_thousands_separators(text: &str) -> String {
    rewrite_separators(text, |run| run == 3, None)
}

fn convert_decimal_separators(text: &str) -> String {
    rewrite_separators(text, |run| (1..=2).contains(&run), Some('.'))
}

fn replace_words(text: &str, words: &[&str], replacement: &str) -> String {
    words
        .iter()
        .fold(text.to_string(), |acc, word| acc.replace(word, replacement))
}

// Letter runs go whether or not they touch a digit; leftovers like "PESOS"
// then become empty instead of a parse failure.
fn strip_letters(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_alphabetic()).collect()
}
