use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{ServerError, ServerResult};

/// Environment variable holding the Gemini API key. Required: the server
/// refuses to start without it.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Optional bind address override.
pub const BIND_VAR: &str = "STRQ_BIND";

/// Optional model name override.
pub const MODEL_VAR: &str = "STRQ_GEMINI_MODEL";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub gemini_api_key: String,
    pub gemini_model: String,
    /// Overall deadline the NL endpoint enforces around translation,
    /// retries included.
    pub nl_timeout: Duration,
}

impl ServerConfig {
    /// Config with defaults for everything but the API key.
    pub fn new(gemini_api_key: impl Into<String>) -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".parse().expect("static addr"),
            gemini_api_key: gemini_api_key.into(),
            gemini_model: strq_nl::gemini::DEFAULT_MODEL.to_string(),
            nl_timeout: Duration::from_secs(60),
        }
    }

    /// Build from the environment.
    ///
    /// A missing API key is startup-fatal by design: the NL endpoint must
    /// never discover the absence per-request.
    pub fn from_env() -> ServerResult<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| ServerError::Config(format!("{API_KEY_VAR} is not set")))?;

        let mut config = Self::new(api_key);
        if let Ok(bind) = std::env::var(BIND_VAR) {
            config.bind_addr = bind
                .parse()
                .map_err(|_| ServerError::Config(format!("{BIND_VAR} is not a socket address: {bind}")))?;
        }
        if let Ok(model) = std::env::var(MODEL_VAR) {
            config.gemini_model = model;
        }
        Ok(config)
    }
}
