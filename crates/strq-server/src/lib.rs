//! HTTP server for StrQ.
//!
//! Exposes the string-analyzer operations over axum: ingest, structured
//! filtering, lookup/delete by value, and natural-language filtering.
//! The framework layer stays thin — every decision beyond routing and
//! status mapping lives in the core crates.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::StrqServer;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use strq_nl::FixedReplyTranslator;

    fn app_with_reply(reply: &str) -> Router {
        let translator = Arc::new(FixedReplyTranslator::new(reply));
        build_router(AppState::new(translator, Duration::from_secs(1)))
    }

    fn app() -> Router {
        app_with_reply("{}")
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    fn post_string(value: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/strings")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "value": value }).to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn home_greets() {
        let app = app();
        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (status, body) = send(&app(), get("/v1/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn create_returns_analyzed_record() {
        let (status, body) = send(&app(), post_string(json!("Racecar"))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["value"], "racecar");
        assert_eq!(body["properties"]["length"], 7);
        assert_eq!(body["properties"]["is_palindrome"], true);
        assert_eq!(body["properties"]["word_count"], 1);
        assert_eq!(body["properties"]["unique_characters"], 4);
        assert_eq!(body["id"], body["properties"]["sha256_hash"]);

        // created_at wire format: YYYY-MM-DDTHH:MM:SSZ
        let created_at = body["created_at"].as_str().unwrap();
        assert_eq!(created_at.len(), 20);
        assert!(created_at.ends_with('Z'));
    }

    #[tokio::test]
    async fn duplicate_create_conflicts_once() {
        let app = app();
        let (first, _) = send(&app, post_string(json!("hello"))).await;
        assert_eq!(first, StatusCode::CREATED);

        // Same value after normalization.
        let (second, body) = send(&app, post_string(json!("  HELLO "))).await;
        assert_eq!(second, StatusCode::CONFLICT);
        assert!(body["error"].as_str().unwrap().contains("already exists"));

        let (_, listing) = send(&app, get("/strings")).await;
        assert_eq!(listing["count"], 1);
    }

    #[tokio::test]
    async fn non_string_value_is_unprocessable() {
        let (status, body) = send(&app(), post_string(json!(42))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("must be a string"));
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/strings")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("not json"))
            .unwrap();
        let (status, _) = send(&app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_after_create_returns_the_record() {
        let app = app();
        let (_, created) = send(&app, post_string(json!("Hello World"))).await;
        let (status, fetched) = send(&app, get("/strings/hello%20world")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let (status, body) = send(&app(), get("/strings/absent")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("does not exist"));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let app = app();
        send(&app, post_string(json!("ephemeral"))).await;

        let (status, _) = send(&app, delete("/strings/ephemeral")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, get("/strings/ephemeral")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, delete("/strings/ephemeral")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn structured_filter_scenario() {
        let app = app();
        send(&app, post_string(json!("racecar"))).await;
        send(&app, post_string(json!("hello"))).await;

        let (status, body) =
            send(&app, get("/strings?min_length=5&is_palindrome=true")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["value"], "racecar");
        assert_eq!(body["filters_applied"]["min_length"], 5);
        assert_eq!(body["filters_applied"]["is_palindrome"], true);
        assert!(body["filters_applied"]["word_count"].is_null());
    }

    #[tokio::test]
    async fn unknown_filter_parameter_fails_fast() {
        let (status, body) = send(&app(), get("/strings?foo=1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "unknown query parameter 'foo'");
    }

    #[tokio::test]
    async fn invalid_filter_value_is_bad_request() {
        let (status, body) = send(&app(), get("/strings?min_length=five")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "min_length must be an integer");
    }

    #[tokio::test]
    async fn nl_query_filters_through_the_same_engine() {
        let app = app_with_reply(
            r#"{
                "is_palindrome": true,
                "min_length": null,
                "max_length": null,
                "word_count": null,
                "contains_character": null
            }"#,
        );
        send(&app, post_string(json!("racecar"))).await;
        send(&app, post_string(json!("hello"))).await;

        let (status, body) = send(
            &app,
            get("/strings/filter-by-natural-language?query=all%20palindromes"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["value"], "racecar");
    }

    #[tokio::test]
    async fn out_of_domain_nl_query_is_unprocessable() {
        let app = app_with_reply("422");
        let (status, _) = send(
            &app,
            get("/strings/filter-by-natural-language?query=what%27s%20the%20weather"),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn unparseable_nl_reply_is_bad_request_without_detail() {
        let app = app_with_reply("sorry, can't do that");
        let (status, body) = send(
            &app,
            get("/strings/filter-by-natural-language?query=anything"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad Request");
    }

    #[tokio::test]
    async fn nl_endpoint_rejects_extra_parameters() {
        let (status, body) = send(
            &app(),
            get("/strings/filter-by-natural-language?query=x&foo=1"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "unknown query parameter 'foo'");
    }

    #[tokio::test]
    async fn nl_endpoint_requires_query() {
        let (status, body) = send(&app(), get("/strings/filter-by-natural-language")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("query"));
    }

    #[tokio::test]
    async fn nl_filter_errors_match_structured_path() {
        // The model answers with a bogus field value; the error is the
        // filter engine's, word for word.
        let app = app_with_reply(r#"{ "min_length": "lots" }"#);
        let (status, body) = send(
            &app,
            get("/strings/filter-by-natural-language?query=long%20strings"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "min_length must be an integer");
    }
}
