//! Vocabulary tables
//!
//! Every word list the classification rules consult lives here as data, so the
//! rules themselves never branch on literal words. All entries are upper-case;
//! callers upper-case their input before looking anything up.

use crate::salary::Currency;
use crate::token::PartOfSpeech;

/// Tags skipped entirely: they neither occupy a position nor advance the counter
pub const DISCARDED_TAGS: &[PartOfSpeech] = &[
    PartOfSpeech::Punct,
    PartOfSpeech::Det,
    PartOfSpeech::Adp,
    PartOfSpeech::Aux,
    PartOfSpeech::Cconj,
];

/// Tags that may carry a currency name
pub const CURRENCY_TAGS: &[PartOfSpeech] = &[PartOfSpeech::Propn, PartOfSpeech::Noun];

/// Tags that may carry a currency symbol
pub const SYMBOL_TAGS: &[PartOfSpeech] = &[PartOfSpeech::Sym];

/// Tags that may carry the salary amount
pub const AMOUNT_TAGS: &[PartOfSpeech] = &[PartOfSpeech::Num, PartOfSpeech::Propn];

/// Tags that may carry a multiplier suffix ("MIL", "K")
pub const SUFFIX_TAGS: &[PartOfSpeech] = &[PartOfSpeech::Noun, PartOfSpeech::Propn];

/// Surface words that announce a salary type
pub const TYPE_WORDS: &[&str] = &["BRUTO", "NETO", "MANO"];

/// Substrings that mark a gross salary ("BRUTO", "BRUTOS", ...)
pub const GROSS_MARKERS: &[&str] = &["BRUTO", "GROSS"];

/// Exact surface forms that mean a net salary ("en mano" = in hand)
pub const NET_FORMS: &[&str] = &["NETO", "MANO", "NET"];

/// Synonyms per canonical currency, canonical code excluded
pub const CURRENCY_SYNONYMS: &[(Currency, &[&str])] = &[
    (Currency::Ars, &["AR", "$", "PESO", "PESOS"]),
    (
        Currency::Usd,
        &["U$D", "US$", "U$S", "DOLAR", "DOLARES", "DÓLAR", "DÓLARES"],
    ),
    (Currency::Eur, &["€", "EU", "EURO", "EUROS"]),
];

/// Words rewritten to `1000000` by the amount normalizer, longest first
pub const MILLION_WORDS: &[&str] = &["MILLONES", "MILLÓN", "MILLON"];

/// Words rewritten to `1000` by the amount normalizer, longest first
pub const THOUSAND_WORDS: &[&str] = &["MILES", "MIL", "K"];

/// Whether a tag is in one of the tables above
pub fn tag_in(tags: &[PartOfSpeech], tag: PartOfSpeech) -> bool {
    tags.contains(&tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_upper_case() {
        let words = TYPE_WORDS
            .iter()
            .chain(GROSS_MARKERS)
            .chain(NET_FORMS)
            .chain(MILLION_WORDS)
            .chain(THOUSAND_WORDS)
            .chain(CURRENCY_SYNONYMS.iter().flat_map(|(_, s)| s.iter()));
        for word in words {
            assert_eq!(word.to_uppercase(), *word);
        }
    }

    #[test]
    fn test_synonyms_do_not_overlap() {
        for (i, (_, a)) in CURRENCY_SYNONYMS.iter().enumerate() {
            for (_, b) in CURRENCY_SYNONYMS.iter().skip(i + 1) {
                assert!(a.iter().all(|w| !b.contains(w)));
            }
        }
    }

    #[test]
    fn test_multiplier_words_longest_first() {
        // "MILLONES" must be rewritten before "MIL" can match inside it
        assert!(MILLION_WORDS.iter().all(|w| w.contains("MIL")));
        assert_eq!(THOUSAND_WORDS[0], "MILES");
    }
}
