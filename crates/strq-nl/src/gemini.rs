use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{NlError, NlResult};
use crate::prompt;
use crate::translator::NlTranslator;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model; matches the original service configuration.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Retry attempts after the first failure.
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff between retries.
const RETRY_BASE: Duration = Duration::from_millis(500);

/// Per-request transport timeout. The HTTP caller enforces its own
/// overall deadline on top of this.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini-backed [`NlTranslator`].
///
/// Calls the `generateContent` REST endpoint with the five-field
/// instruction prompt. Transport failures and 429/5xx responses are
/// retried up to a small fixed bound with exponential backoff; anything
/// unretried surfaces as [`NlError::Translation`].
pub struct GeminiTranslator {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiTranslator {
    /// Create a translator for the default model.
    pub fn new(api_key: impl Into<String>) -> NlResult<Self> {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Create a translator for a specific model name.
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> NlResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NlError::Translation(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// The model this translator targets.
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn request(&self, body: &Value) -> Result<String, Failure> {
        let url = format!("{API_BASE}/models/{}:generateContent", self.model);
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|e| Failure::retryable(format!("transport error: {e}")))?;

        let status = response.status();
        if status.as_u16() == 429 || status.is_server_error() {
            return Err(Failure::retryable(format!("upstream status {status}")));
        }
        if !status.is_success() {
            return Err(Failure::terminal(format!("upstream status {status}")));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| Failure::terminal(format!("unreadable upstream body: {e}")))?;
        extract_reply(&payload)
            .ok_or_else(|| Failure::terminal("upstream reply has no candidate text".into()))
    }
}

#[async_trait]
impl NlTranslator for GeminiTranslator {
    async fn translate(&self, query: &str) -> NlResult<String> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt::render(query) }] }],
            "generationConfig": { "temperature": 0.5 },
        });

        let mut attempt = 0u32;
        loop {
            match self.request(&body).await {
                Ok(text) => return Ok(text),
                Err(failure) if failure.retryable && attempt < MAX_RETRIES => {
                    attempt += 1;
                    let delay = backoff_delay(attempt);
                    tracing::warn!(attempt, ?delay, reason = %failure.message, "retrying translation");
                    tokio::time::sleep(delay).await;
                }
                Err(failure) => return Err(NlError::Translation(failure.message)),
            }
        }
    }
}

/// Exponential backoff: base * 2^(attempt-1), capped well below the
/// request timeout.
fn backoff_delay(attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(8);
    RETRY_BASE * 2u32.pow(exponent)
}

/// First candidate text from a `generateContent` response payload.
fn extract_reply(payload: &Value) -> Option<String> {
    payload["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::to_string)
}

struct Failure {
    retryable: bool,
    message: String,
}

impl Failure {
    fn retryable(message: String) -> Self {
        Self {
            retryable: true,
            message,
        }
    }

    fn terminal(message: String) -> Self {
        Self {
            retryable: false,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_candidate_text() {
        let payload = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"is_palindrome\": true}" }] }
            }]
        });
        assert_eq!(
            extract_reply(&payload).as_deref(),
            Some("{\"is_palindrome\": true}")
        );
    }

    #[test]
    fn missing_candidates_yield_none() {
        assert!(extract_reply(&json!({})).is_none());
        assert!(extract_reply(&json!({ "candidates": [] })).is_none());
    }

    #[test]
    fn backoff_grows_exponentially() {
        assert_eq!(backoff_delay(1), Duration::from_millis(500));
        assert_eq!(backoff_delay(2), Duration::from_millis(1000));
        assert_eq!(backoff_delay(3), Duration::from_millis(2000));
    }

    #[test]
    fn constructor_records_model() {
        let translator = GeminiTranslator::with_model("key", "gemini-test").unwrap();
        assert_eq!(translator.model(), "gemini-test");
        let default = GeminiTranslator::new("key").unwrap();
        assert_eq!(default.model(), DEFAULT_MODEL);
    }
}
