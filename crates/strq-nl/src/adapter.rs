use std::sync::Arc;

use serde_json::Value;

use strq_filter::RawFilter;

use crate::error::{NlError, NlResult};
use crate::prompt::OUT_OF_DOMAIN_MARKER;
use crate::translator::NlTranslator;

/// Converts a natural-language query into the untyped filter shape.
///
/// The adapter enforces the collaborator's output contract and hands the
/// result straight to the filter engine's coercion step. It never
/// validates field types itself; coercion failures reach the caller with
/// the same vocabulary the structured query path uses.
pub struct NlFilterAdapter {
    translator: Arc<dyn NlTranslator>,
}

impl NlFilterAdapter {
    pub fn new(translator: Arc<dyn NlTranslator>) -> Self {
        Self { translator }
    }

    /// Translate `query` into an untyped filter.
    ///
    /// Fails with [`NlError::SemanticMismatch`] when the model answers
    /// with the out-of-domain marker, and [`NlError::Translation`] when
    /// the reply cannot be parsed as a JSON object.
    pub async fn translate(&self, query: &str) -> NlResult<RawFilter> {
        let reply = self.translator.translate(query).await?;
        let reply = reply.trim();

        if reply == OUT_OF_DOMAIN_MARKER {
            tracing::debug!(%query, "query out of filterable domain");
            return Err(NlError::SemanticMismatch);
        }

        let stripped = strip_code_fence(reply);
        let parsed: Value = serde_json::from_str(stripped)
            .map_err(|e| NlError::Translation(format!("model reply is not valid JSON: {e}")))?;

        let Value::Object(object) = parsed else {
            return Err(NlError::Translation("model reply is not a JSON object".into()));
        };

        // The model sometimes emits the string "null" instead of null.
        let cleaned = object
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(s) if s == "null" => (key, Value::Null),
                other => (key, other),
            })
            .collect();

        Ok(RawFilter::from_json_object(cleaned))
    }
}

/// Strip optional Markdown code-fence wrapping, with or without a `json`
/// language tag.
fn strip_code_fence(reply: &str) -> &str {
    let Some(rest) = reply.strip_prefix("```") else {
        return reply;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
