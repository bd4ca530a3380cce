use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};

use strq_filter::{apply, coerce, FilterError, FilterResult, RawFilter};
use strq_nl::NlError;
use strq_types::StringRecord;

use crate::error::ServerError;
use crate::state::AppState;

/// Greeting at the root, title-cased like the original service.
pub async fn home() -> &'static str {
    "Welcome To My String Analyzer Service"
}

/// Health check.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `POST /strings` — ingest a string and return the analyzed record.
pub async fn create_string(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<StringRecord>), ServerError> {
    let Json(body) = body.map_err(|_| ServerError::InvalidBody)?;
    let object = body.as_object().ok_or(ServerError::InvalidBody)?;

    // A missing `value` falls back to the empty string; a present
    // non-string is unprocessable. Both mirror the original contract.
    let raw_text = match object.get("value") {
        None => "",
        Some(Value::String(s)) => s.as_str(),
        Some(_) => return Err(ServerError::InvalidInput),
    };

    let record = state.builder.build(raw_text)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /strings` — filter the collection by query parameters.
pub async fn list_strings(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<FilterResult>, ServerError> {
    let raw = RawFilter::from_query_pairs(params);
    let spec = coerce(&raw)?;
    Ok(Json(apply(state.store.all(), &spec)))
}

/// `GET /strings/{value}` — fetch one record by its normalized value.
pub async fn get_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<Json<StringRecord>, ServerError> {
    state
        .store
        .find_by_value(&value)
        .map(Json)
        .ok_or(ServerError::NotFound)
}

/// `DELETE /strings/{value}` — remove one record wholesale.
pub async fn delete_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<StatusCode, ServerError> {
    if state.store.remove_by_value(&value) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServerError::NotFound)
    }
}

/// `GET /strings/filter-by-natural-language?query=...` — translate a
/// free-form question into a filter and evaluate it.
///
/// The translated structure goes through the exact same coercion and
/// engine as the structured path, so both entry points share one
/// filtering-error vocabulary.
pub async fn filter_by_natural_language(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<FilterResult>, ServerError> {
    let mut query: Option<&str> = None;
    for (key, value) in &params {
        if key == "query" {
            query.get_or_insert(value.as_str());
        } else {
            return Err(FilterError::UnknownParameter(key.clone()).into());
        }
    }
    let query = query.ok_or(ServerError::MissingQuery)?;

    let raw = tokio::time::timeout(state.nl_timeout, state.adapter.translate(query))
        .await
        .map_err(|_| NlError::Translation("translation timed out".into()))??;

    let spec = coerce(&raw)?;
    Ok(Json(apply(state.store.all(), &spec)))
}
