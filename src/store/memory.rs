//! Mutex-guarded in-memory todo collection.
//!
//! # Responsibilities
//! - Own the authoritative in-process collection
//! - Assign ids and enforce create-time constraints
//! - Serialize all access behind a single coarse lock
//!
//! # Design Decisions
//! - One std mutex over the whole Vec; critical sections are short and
//!   never span an await point
//! - Ids are assigned as collection length + 1, so an id freed by a
//!   delete can be handed out again once the length coincides

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;

use crate::store::todo::{Todo, TodoId};

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Create was called with an empty body.
    #[error("Todo body is required")]
    EmptyBody,
    /// No todo with the given id exists.
    #[error("todo {0} not found")]
    NotFound(TodoId),
}

/// Counters reported by the admin surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// In-memory todo store guarded by a single exclusive lock.
pub struct MemoryStore {
    todos: Mutex<Vec<Todo>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            todos: Mutex::new(Vec::new()),
        }
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Todo>> {
        self.todos.lock().expect("todo store mutex poisoned")
    }

    /// Snapshot of all todos in insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.guard().clone()
    }

    /// Append a new todo with the next id and `completed = false`.
    pub fn create(&self, body: impl Into<String>) -> Result<Todo, StoreError> {
        let body = body.into();
        if body.is_empty() {
            return Err(StoreError::EmptyBody);
        }

        let mut todos = self.guard();
        let todo = Todo {
            id: todos.len() as TodoId + 1,
            completed: false,
            body,
        };
        todos.push(todo.clone());
        Ok(todo)
    }

    /// Mark the todo with the given id complete and return the updated record.
    ///
    /// Idempotent: a second call on the same id leaves it complete.
    pub fn complete(&self, id: TodoId) -> Result<Todo, StoreError> {
        let mut todos = self.guard();
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        todo.completed = true;
        Ok(todo.clone())
    }

    /// Remove the todo with the given id, preserving the order of the rest,
    /// and return the removed record.
    pub fn delete(&self, id: TodoId) -> Result<Todo, StoreError> {
        let mut todos = self.guard();
        let index = todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(todos.remove(index))
    }

    /// Completion counters, taken under one lock acquisition.
    pub fn stats(&self) -> StoreStats {
        let todos = self.guard();
        let completed = todos.iter().filter(|t| t.completed).count();
        StoreStats {
            total: todos.len(),
            completed,
            pending: todos.len() - completed,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
