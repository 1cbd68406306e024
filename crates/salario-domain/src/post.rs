//! Post module - forum posts in, annotated records out

use serde::{Deserialize, Serialize};

use crate::salary::{Currency, SalaryTriple, SalaryType};

/// A forum post as delivered by the scraping collaborator
///
/// Line breaks in `text` have already been replaced by a single separator
/// character. Read-only for this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPost {
    /// Position of the post in the thread
    pub post_number: u64,

    /// Author
    pub username: String,

    /// Publication time (seconds since Unix epoch)
    #[serde(rename = "timestamp")]
    pub timestamp_unix: i64,

    /// Post body
    #[serde(rename = "post")]
    pub text: String,
}

/// Salary information derived from one post
///
/// Written once per post and never mutated afterwards. When no snippet was
/// selected every field is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// The snippet the triple was read from
    pub selected_text: Option<String>,

    /// Gross or net
    #[serde(rename = "type")]
    pub salary_type: Option<SalaryType>,

    /// Canonical currency
    pub currency: Option<Currency>,

    /// Normalized amount
    pub amount: Option<f64>,
}

impl SalaryRecord {
    /// A record for a post without a salary mention
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a record from a snippet and its finalized triple
    ///
    /// An empty snippet yields [`SalaryRecord::empty`] whatever the triple
    /// says, so nothing is inferred from an absent mention.
    pub fn from_snippet(snippet: impl Into<String>, triple: SalaryTriple) -> Self {
        let snippet = snippet.into();
        if snippet.is_empty() {
            return Self::empty();
        }
        Self {
            selected_text: Some(snippet),
            salary_type: triple.salary_type,
            currency: triple.currency,
            amount: triple.amount,
        }
    }

    /// Whether a snippet was selected for this post
    pub fn has_mention(&self) -> bool {
        self.selected_text.is_some()
    }

    /// The classification part of the record
    pub fn triple(&self) -> SalaryTriple {
        SalaryTriple::new(self.salary_type, self.currency, self.amount)
    }
}

/// A post together with its salary record, as persisted in the results document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedPost {
    /// The input post
    #[serde(flatten)]
    pub post: RawPost,

    /// What was extracted from it
    #[serde(flatten)]
    pub record: SalaryRecord,
}

impl AnnotatedPost {
    /// Attach a record to a post
    pub fn new(post: RawPost, record: SalaryRecord) -> Self {
        Self { post, record }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> RawPost {
        RawPost {
            post_number: 12,
            username: "juan".to_string(),
            timestamp_unix: 1_644_506_400,
            text: "Puesto: dev|Salario mensual bruto: 150 mil".to_string(),
        }
    }

    #[test]
    fn test_empty_snippet_clears_everything() {
        let triple = SalaryTriple::new(Some(SalaryType::Net), Some(Currency::Usd), Some(1.0));
        let record = SalaryRecord::from_snippet("", triple);
        assert_eq!(record, SalaryRecord::empty());
        assert!(!record.has_mention());
    }

    #[test]
    fn test_record_keeps_snippet_and_triple() {
        let triple = SalaryTriple::new(Some(SalaryType::Gross), Some(Currency::Ars), Some(150_000.0));
        let record = SalaryRecord::from_snippet("BRUTO: 150 MIL", triple);
        assert_eq!(record.selected_text.as_deref(), Some("BRUTO: 150 MIL"));
        assert_eq!(record.triple(), triple);
    }

    #[test]
    fn test_annotated_post_json_fields() {
        let record = SalaryRecord::from_snippet(
            "NETO $ 80000",
            SalaryTriple::new(Some(SalaryType::Net), Some(Currency::Ars), Some(80_000.0)),
        );
        let value = serde_json::to_value(AnnotatedPost::new(post(), record)).unwrap();

        assert_eq!(value["post_number"], 12);
        assert_eq!(value["timestamp"], 1_644_506_400i64);
        assert_eq!(value["post"], "Puesto: dev|Salario mensual bruto: 150 mil");
        assert_eq!(value["selected_text"], "NETO $ 80000");
        assert_eq!(value["type"], "NET");
        assert_eq!(value["currency"], "ARS");
        assert_eq!(value["amount"], 80_000.0);
    }

    #[test]
    fn test_annotated_post_nulls() {
        let annotated = AnnotatedPost::new(post(), SalaryRecord::empty());
        let json = serde_json::to_string(&annotated).unwrap();
        assert!(json.contains(r#""selected_text":null"#));
        assert!(json.contains(r#""type":null"#));

        let back: AnnotatedPost = serde_json::from_str(&json).unwrap();
        assert_eq!(back, annotated);
    }
}
