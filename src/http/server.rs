//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (CORS, request ID, tracing, timeout, limits, metrics)
//! - Bind server to listener
//! - Serve until the shutdown signal, draining in-flight requests

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::SuiteConfig;
use crate::http::cors::build_cors_layer;
use crate::http::handlers;
use crate::http::middleware::track_metrics;
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::shutdown::wait_for_shutdown;
use crate::security::{apply_body_limit, apply_security_headers};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SuiteConfig>,
}

/// HTTP server for the calculator API.
pub struct HttpServer {
    router: Router,
    config: Arc<SuiteConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SuiteConfig) -> Self {
        let config = Arc::new(config);
        let router = build_router(config.clone());
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            api_prefix = %self.config.api.prefix,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                wait_for_shutdown(shutdown).await;
                tracing::info!("Draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Calculator routes, relative to the API prefix.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/box-calculator", post(handlers::calculate_box))
        .route("/material-cost", post(handlers::material_cost))
        .route("/materials", get(handlers::materials))
        .route("/calculator-info", get(handlers::calculator_info))
        .route("/health", get(handlers::health))
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: Arc<SuiteConfig>) -> Router {
    let state = AppState {
        config: config.clone(),
    };

    let base = Router::new().route("/", get(handlers::root));

    // Without a prefix the API's own /health serves the root one.
    let routes = if config.api.prefix.is_empty() {
        base.merge(api_routes())
    } else {
        base.route("/health", get(handlers::health))
            .nest(&config.api.prefix, api_routes())
    };

    let mut router = routes
        .with_state(state)
        .layer(middleware::from_fn(track_metrics));

    router = apply_body_limit(router, config.security.max_body_size);
    if config.security.enable_headers {
        router = apply_security_headers(router);
    }

    router
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(propagate_request_id_layer())
        .layer(set_request_id_layer())
        .layer(build_cors_layer(&config.cors))
}
