use std::sync::Arc;

use tokio::net::TcpListener;

use strq_nl::GeminiTranslator;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// The StrQ HTTP server.
pub struct StrqServer {
    config: ServerConfig,
}

impl StrqServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the production state: empty store plus the Gemini-backed
    /// translator configured from [`ServerConfig`].
    fn state(&self) -> ServerResult<AppState> {
        let translator =
            GeminiTranslator::with_model(&self.config.gemini_api_key, &self.config.gemini_model)
                .map_err(|e| ServerError::Config(e.to_string()))?;
        Ok(AppState::new(Arc::new(translator), self.config.nl_timeout))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = build_router(self.state()?);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("StrQ server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = StrqServer::new(ServerConfig::new("key"));
        assert_eq!(server.config().bind_addr, "127.0.0.1:5000".parse().unwrap());
    }

    #[test]
    fn state_builds_with_configured_model() {
        let mut config = ServerConfig::new("key");
        config.gemini_model = "gemini-test".into();
        let server = StrqServer::new(config);
        let _state = server.state().unwrap();
    }
}
