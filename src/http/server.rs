//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (request ID, tracing, body limit, timeout)
//! - Bind the server to a listener
//! - Serve until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, put};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::admin;
use crate::config::ServiceConfig;
use crate::http::handlers::{complete_todo, create_todo, delete_todo, list_todos};
use crate::http::request::UuidRequestId;
use crate::lifecycle;
use crate::store::MemoryStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
}

/// HTTP server for the todo API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and store.
    pub fn new(config: ServiceConfig, store: Arc<MemoryStore>) -> Self {
        let state = AppState { store };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layer order is inside-out: the timeout sits closest to the
    /// handlers, request-id assignment outermost so every log line and
    /// response carries the id.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let api = Router::new()
            .route("/api/todos", get(list_todos).post(create_todo))
            .route("/api/todos/{id}", put(complete_todo).delete(delete_todo))
            .with_state(state.clone());

        api.merge(admin::setup_admin_router(state))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Serves until Ctrl+C or a shutdown broadcast is received, then
    /// finishes in-flight requests before returning.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(lifecycle::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a clone of the underlying router, for driving requests in
    /// process without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
