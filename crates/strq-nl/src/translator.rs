use async_trait::async_trait;

use crate::error::NlResult;

/// The injected natural-language collaborator.
///
/// One method: given the user's query text, return the model's raw text
/// reply. Implementations own their prompt, transport, and retry policy.
/// The adapter never sees transport details, only the reply or an
/// [`NlError::Translation`](crate::NlError::Translation).
#[async_trait]
pub trait NlTranslator: Send + Sync {
    async fn translate(&self, query: &str) -> NlResult<String>;
}

/// Deterministic translator that always returns a fixed reply.
///
/// The test double for everything downstream of the model: adapter
/// parsing, marker handling, and the server's NL endpoint.
pub struct FixedReplyTranslator {
    reply: String,
}

impl FixedReplyTranslator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self { reply: reply.into() }
    }
}

#[async_trait]
impl NlTranslator for FixedReplyTranslator {
    async fn translate(&self, _query: &str) -> NlResult<String> {
        Ok(self.reply.clone())
    }
}
