//! Rust client SDK for the todo service HTTP API.

pub mod client;

pub use client::{SystemStatus, Todo, TodoClient};
