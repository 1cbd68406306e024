//! Candidate extraction: isolate the salary mention inside a post

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use regex::Regex;

/// Characters that break matching when left in scraped text
const PROBLEMATIC_CHARS: &[char] = &['\t', '\r', '*'];

/// Finds the snippet that follows the trigger phrase
///
/// The snippet runs from just after "salario mensual " (including an optional
/// "bruto"/"neto" and colon) up to the next line separator. Only the first
/// occurrence in a post is used.
#[derive(Debug, Clone)]
pub struct CandidateExtractor {
    pattern: Regex,
    line_separator: char,
    sanitize: bool,
}

impl CandidateExtractor {
    /// Build an extractor for the configured trigger phrase and separator
    pub fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let separator = regex::escape(&config.line_separator.to_string());
        let pattern = format!(
            r"(?i){} ((?:bruto|neto)?\s?:?\s?[^{}]*)",
            regex::escape(config.trigger_phrase.trim()),
            separator
        );
        Ok(Self {
            pattern: Regex::new(&pattern)?,
            line_separator: config.line_separator,
            sanitize: config.sanitize_text,
        })
    }

    /// Return the upper-cased, trimmed snippet, or an empty string when the
    /// post has no salary mention
    pub fn extract(&self, text: &str) -> String {
        let text = if self.sanitize {
            sanitize_post_text(text, self.line_separator)
        } else {
            text.to_string()
        };

        self.pattern
            .captures(&text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_uppercase())
            .unwrap_or_default()
    }
}

/// Remove characters that break matching and fold line breaks into `separator`
///
/// Idempotent: sanitizing already-sanitized text changes nothing.
pub fn sanitize_post_text(text: &str, separator: char) -> String {
    text.chars()
        .filter(|c| !PROBLEMATIC_CHARS.contains(c))
        .map(|c| if c == '\n' { separator } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}
