//! The todo entity and its wire payloads.

use serde::{Deserialize, Serialize};

/// Identifier assigned to a todo at creation.
pub type TodoId = u64;

/// A single task tracked by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Identifier assigned at creation.
    pub id: TodoId,
    /// Whether the task has been marked complete.
    pub completed: bool,
    /// Task description. Non-empty; immutable after creation.
    pub body: String,
}

/// Payload accepted by the create operation.
///
/// Only `body` is read. Unknown fields are ignored, and a missing `body`
/// deserializes as empty so the store rejects it the same way as `""`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub body: String,
}
