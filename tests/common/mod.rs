//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use todo_server::config::ServiceConfig;
use todo_server::http::HttpServer;
use todo_server::lifecycle::Shutdown;
use todo_server::store::MemoryStore;

/// Start a server on an ephemeral port, returning its address and a
/// shutdown handle that stops it when triggered.
///
/// The listener is bound before the server task is spawned, so requests
/// can be issued immediately.
pub async fn start_server() -> (SocketAddr, Shutdown) {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let store = Arc::new(MemoryStore::new());
    let server = HttpServer::new(config, store);
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}
