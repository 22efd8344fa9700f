//! Process lifecycle subsystem.
//!
//! # Responsibilities
//! - Coordinate graceful shutdown across tasks
//! - Translate OS signals into the shutdown broadcast

pub mod shutdown;

pub use shutdown::{wait, Shutdown};
