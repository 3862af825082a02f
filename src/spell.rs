//! Spell-correction middleware.
//!
//! Every inbound message can be run through an external spellcheck service
//! before recognition. Correction is strictly best-effort: any failure is
//! logged and the original text is used unchanged, and a circuit breaker
//! skips the service entirely while it keeps failing.

use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::circuit_breaker::{BreakerConfig, CircuitBreaker};
use crate::config::SpellConfig;

#[derive(Debug, Deserialize)]
struct SpellCheckResponse {
    #[serde(rename = "flaggedTokens", default)]
    flagged_tokens: Vec<FlaggedToken>,
}

/// One misspelled token reported by the service, with byte offset into the
/// submitted text.
#[derive(Debug, Clone, Deserialize)]
pub struct FlaggedToken {
    pub offset: usize,
    pub token: String,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Suggestion {
    pub suggestion: String,
}

pub struct SpellClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    breaker: CircuitBreaker,
}

impl SpellClient {
    pub fn new(config: &SpellConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            breaker: CircuitBreaker::new(BreakerConfig::default()),
        }
    }

    /// Returns the corrected text, or the original unchanged when the
    /// service is unreachable, answers badly, or the breaker is open.
    pub async fn correct(&self, text: &str) -> String {
        if self.breaker.is_open() {
            warn!("spellcheck circuit open, skipping correction");
            return text.to_string();
        }

        match self.fetch_corrections(text).await {
            Ok(tokens) => {
                self.breaker.record_success();
                let corrected = apply_corrections(text, &tokens);
                if corrected != text {
                    debug!(original = text, corrected = %corrected, "spellcheck rewrote message");
                }
                corrected
            }
            Err(e) => {
                self.breaker.record_failure();
                error!(error = %e, "spellcheck failed, using original text");
                text.to_string()
            }
        }
    }

    async fn fetch_corrections(&self, text: &str) -> Result<Vec<FlaggedToken>> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .form(&[("mode", "proof"), ("mkt", "en-US"), ("text", text)])
            .send()
            .await?
            .error_for_status()?;
        let body: SpellCheckResponse = response.json().await?;
        Ok(body.flagged_tokens)
    }
}

/// Splices each flagged token's top suggestion into the text. Corrections
/// are applied right to left so earlier offsets stay valid; tokens with no
/// suggestion or an offset that does not line up are skipped.
pub fn apply_corrections(text: &str, tokens: &[FlaggedToken]) -> String {
    let mut corrected = text.to_string();
    let mut ordered: Vec<&FlaggedToken> = tokens.iter().collect();
    ordered.sort_by(|a, b| b.offset.cmp(&a.offset));

    for token in ordered {
        let Some(first) = token.suggestions.first() else {
            continue;
        };
        let start = token.offset;
        let end = start + token.token.len();
        let aligned = end <= corrected.len()
            && corrected.is_char_boundary(start)
            && corrected.is_char_boundary(end)
            && &corrected[start..end] == token.token.as_str();
        if aligned {
            corrected.replace_range(start..end, &first.suggestion);
        } else {
            warn!(offset = start, token = %token.token, "flagged token does not align, skipping");
        }
    }

    corrected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flagged(offset: usize, token: &str, suggestion: &str) -> FlaggedToken {
        FlaggedToken {
            offset,
            token: token.to_string(),
            suggestions: vec![Suggestion {
                suggestion: suggestion.to_string(),
            }],
        }
    }

    #[test]
    fn test_apply_single_correction() {
        let result = apply_corrections("serach hotels", &[flagged(0, "serach", "search")]);
        assert_eq!(result, "search hotels");
    }

    #[test]
    fn test_apply_multiple_corrections_keeps_offsets() {
        let tokens = vec![
            flagged(0, "serach", "search"),
            flagged(7, "hotles", "hotels"),
        ];
        let result = apply_corrections("serach hotles in Paris", &tokens);
        assert_eq!(result, "search hotels in Paris");
    }

    #[test]
    fn test_token_without_suggestion_is_skipped() {
        let token = FlaggedToken {
            offset: 0,
            token: "serach".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(apply_corrections("serach hotels", &[token]), "serach hotels");
    }

    #[test]
    fn test_misaligned_token_is_skipped() {
        let result = apply_corrections("short", &[flagged(3, "toolongtoken", "x")]);
        assert_eq!(result, "short");
    }
}
