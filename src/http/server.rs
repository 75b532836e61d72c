//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with a catch-all proxy route
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind the server to a listener and serve until shutdown
//!
//! # Design Decisions
//! - All paths and methods dispatch to the one proxy handler; there is no
//!   routing table
//! - The proxy is built at server construction, so an invalid backend URL
//!   fails startup instead of surfacing per-request

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ProxyConfig;
use crate::http::request::RequestIdLayer;
use crate::proxy::{ProxyError, ReverseProxy};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<ReverseProxy>,
}

/// HTTP server hosting the reverse proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails when the backend settings cannot produce a usable proxy.
    pub fn new(config: &ProxyConfig) -> Result<Self, ProxyError> {
        let proxy = Arc::new(ReverseProxy::new(&config.backend)?);
        let state = AppState { proxy };

        let router = Self::build_router(config, state);
        Ok(Self { router })
    }

    /// Build the axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Catch-all handler: hand the request to the proxy and return whatever it
/// produced, relayed backend response or synthesized error alike.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response<Body> {
    state.proxy.handle(request).await
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
