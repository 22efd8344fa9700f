//! In-memory HTTP todo service.
//!
//! # Architecture Overview
//!
//! ```text
//!                              ┌──────────────────────────────────────────────┐
//!                              │                 TODO SERVICE                  │
//!                              │                                               │
//!     Client Request           │  ┌──────────────────────────────────────┐    │
//!     ─────────────────────────┼─▶│ http server (axum)                   │    │
//!                              │  │   request id → trace → limit →       │    │
//!                              │  │   timeout → handler                  │    │
//!                              │  └──────────────────┬───────────────────┘    │
//!                              │                     │                         │
//!                              │                     ▼                         │
//!                              │  ┌──────────────────────────────────────┐    │
//!     Client Response          │  │ store (single mutex over Vec<Todo>)  │    │
//!     ◀────────────────────────┼──│   list / create / complete / delete  │    │
//!                              │  └──────────────────────────────────────┘    │
//!                              │                                               │
//!                              │  Cross-cutting: config, lifecycle, admin      │
//!                              └──────────────────────────────────────────────┘
//! ```

use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_server::config::{load_config, ServiceConfig};
use todo_server::http::HttpServer;
use todo_server::lifecycle::Shutdown;
use todo_server::store::MemoryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("todo-server v{} starting", env!("CARGO_PKG_VERSION"));

    // Load configuration; built-in defaults unless a config file is given.
    // A config file that cannot be loaded is fatal.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => ServiceConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server over a fresh, empty store
    let store = Arc::new(MemoryStore::new());
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
