//! In-Memory Todo Service Library

// Core subsystems
pub mod config;
pub mod http;
pub mod store;

// Operational surface
pub mod admin;

// Cross-cutting concerns
pub mod lifecycle;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::MemoryStore;
