//! Salary-type canonicalization and currency resolution
//!
//! Both resolvers are table lookups over [`salario_domain::vocabulary`]. They
//! expect upper-cased input and never fail: an unknown word resolves to `None`.

use salario_domain::vocabulary::{CURRENCY_SYNONYMS, GROSS_MARKERS, NET_FORMS, TYPE_WORDS};
use salario_domain::{Currency, SalaryType};

/// Whether `text` is one of the words that announce a salary type
pub fn is_type_word(text: &str) -> bool {
    TYPE_WORDS.contains(&text)
}

/// Map a surface word to its salary type
///
/// Anything containing a gross marker is gross; an exact net form is net.
/// Other text is not a salary type.
pub fn canonicalize_type(text: &str) -> Option<SalaryType> {
    if GROSS_MARKERS.iter().any(|marker| text.contains(marker)) {
        Some(SalaryType::Gross)
    } else if NET_FORMS.contains(&text) {
        Some(SalaryType::Net)
    } else {
        None
    }
}

/// Map a code, symbol or currency name to its canonical currency
pub fn resolve_currency(text: &str) -> Option<Currency> {
    Currency::from_code(text).or_else(|| {
        CURRENCY_SYNONYMS
            .iter()
            .find(|(_, synonyms)| synonyms.contains(&text))
            .map(|(currency, _)| *currency)
    })
}
