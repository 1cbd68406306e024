//! Remote Tagger Implementation
//!
//! Client for an external part-of-speech tagging service (for example a small
//! HTTP wrapper around a spaCy pipeline).
//!
//! # Protocol
//!
//! `POST {endpoint}/tag` with body `{"text": "..."}`; the service answers with a
//! JSON array of `{"text", "lemma", "pos"}` objects in input order. `pos` must
//! already be one of the twelve coarse tags; whitespace tokens (`SPACE`) are
//! dropped.
//!
//! # Features
//!
//! - Async HTTP communication with a blocking [`Tagger`] wrapper
//! - Retry logic with exponential backoff
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use salario_tagger::RemoteTagger;
//! use salario_domain::Tagger;
//!
//! let tagger = RemoteTagger::new("http://localhost:8088").unwrap();
//! let tokens = tagger.tag("NETO $ 80000 ARS").unwrap();
//! ```

use crate::TaggerError;
use salario_domain::{PartOfSpeech, Tagger, Token};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default tagging service endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8088";

/// Default timeout for tagging requests (5 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Tag emitted by services for whitespace tokens
const SPACE_TAG: &str = "SPACE";

/// HTTP client for a remote tagging service
///
/// Owns a single-threaded runtime to drive the async client from the blocking
/// [`Tagger::tag`]; do not call `tag` from inside another Tokio runtime.
pub struct RemoteTagger {
    endpoint: String,
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    max_retries: u32,
}

/// Request body for the tag endpoint
#[derive(Serialize)]
struct TagRequest<'a> {
    text: &'a str,
}

/// One token in the tag endpoint response
#[derive(Debug, Deserialize)]
struct RemoteToken {
    text: String,
    lemma: String,
    pos: String,
}

impl RemoteTagger {
    /// Create a new remote tagger with the default timeout
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client or its runtime cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, TaggerError> {
        Self::with_timeout(endpoint, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new remote tagger with an explicit request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TaggerError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TaggerError::Other(format!("Failed to build HTTP client: {}", e)))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| TaggerError::Other(format!("Failed to build runtime: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            client,
            runtime,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Set the maximum number of attempts per request
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// The service endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Tag text using the remote service
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The service is not reachable after all retries
    /// - The response is not a token array
    /// - A token carries a tag outside the supported tagset
    pub async fn tag_async(&self, text: &str) -> Result<Vec<Token>, TaggerError> {
        let url = format!("{}/tag", self.endpoint);
        let body = TagRequest { text };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(&body).send().await {
                Ok(response) if response.status().is_success() => {
                    let tokens = response
                        .json::<Vec<RemoteToken>>()
                        .await
                        .map_err(|e| {
                            TaggerError::InvalidResponse(format!("Failed to parse response: {}", e))
                        })?;
                    debug!("Tagged {} tokens from '{}'", tokens.len(), text);
                    return convert_tokens(tokens);
                }
                Ok(response) => {
                    let status = response.status();
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    last_error = Some(TaggerError::Communication(format!(
                        "HTTP {}: {}",
                        status, error_text
                    )));
                }
                Err(e) => {
                    last_error = Some(TaggerError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                warn!("Tagging request failed, retrying in {:?}", delay);
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| TaggerError::Communication("Max retries exceeded".to_string())))
    }
}

impl Tagger for RemoteTagger {
    type Error = TaggerError;

    fn tag(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        self.runtime.block_on(self.tag_async(text))
    }

    fn name(&self) -> &str {
        "remote"
    }
}

fn convert_tokens(tokens: Vec<RemoteToken>) -> Result<Vec<Token>, TaggerError> {
    tokens
        .into_iter()
        .filter(|t| !t.pos.eq_ignore_ascii_case(SPACE_TAG))
        .map(|t| {
            let pos = PartOfSpeech::parse(&t.pos).ok_or(TaggerError::UnknownTag(t.pos))?;
            Ok(Token::new(t.text, t.lemma, pos))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_tagger_creation() {
        let tagger = RemoteTagger::new("http://localhost:8088/").unwrap();
        assert_eq!(tagger.endpoint(), "http://localhost:8088");
        assert_eq!(tagger.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(tagger.name(), "remote");
    }

    #[test]
    fn test_remote_tagger_with_max_retries() {
        let tagger = RemoteTagger::new(DEFAULT_ENDPOINT).unwrap().with_max_retries(5);
        assert_eq!(tagger.max_retries, 5);

        let tagger = RemoteTagger::new(DEFAULT_ENDPOINT).unwrap().with_max_retries(0);
        assert_eq!(tagger.max_retries, 1);
    }

    #[test]
    fn test_convert_tokens() {
        let raw: Vec<RemoteToken> = serde_json::from_str(
            r#"[
                {"text": "NETO", "lemma": "neto", "pos": "PROPN"},
                {"text": " ", "lemma": " ", "pos": "SPACE"},
                {"text": "$", "lemma": "$", "pos": "SYM"},
                {"text": "80000", "lemma": "80000", "pos": "NUM"}
            ]"#,
        )
        .unwrap();

        let tokens = convert_tokens(raw).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].lemma, "neto");
        assert_eq!(tokens[1].part_of_speech, PartOfSpeech::Sym);
    }

    #[test]
    fn test_convert_tokens_unknown_tag() {
        let raw = vec![RemoteToken {
            text: "cobro".to_string(),
            lemma: "cobrar".to_string(),
            pos: "VERB".to_string(),
        }];
        assert!(matches!(convert_tokens(raw), Err(TaggerError::UnknownTag(tag)) if tag == "VERB"));
    }

    #[test]
    fn test_remote_tagger_error_handling() {
        // Invalid port makes every attempt fail before reaching the network
        let tagger = RemoteTagger::new("http://localhost:99999")
            .unwrap()
            .with_max_retries(1);

        let result = tagger.tag("NETO 1000");
        assert!(matches!(result, Err(TaggerError::Communication(_))));
    }
}
