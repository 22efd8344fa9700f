//! Todo storage subsystem.
//!
//! # Data Flow
//! ```text
//! handler (http)
//!     → MemoryStore operation (lock, mutate, clone out)
//!     → Todo / StoreError back to the handler
//! ```
//!
//! # Design Decisions
//! - The store is an owned value injected into the router state; there is
//!   no process-wide singleton
//! - One coarse lock serializes all operations, reads included

pub mod memory;
pub mod todo;

pub use memory::{MemoryStore, StoreError, StoreStats};
pub use todo::{CreateTodo, Todo, TodoId};
