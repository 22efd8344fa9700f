//! CRUD handlers for the todo API.
//!
//! Each handler performs exactly one store call and writes exactly one
//! response; validation failures never reach the store.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::store::{CreateTodo, Todo, TodoId};

/// GET /api/todos
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.store.list())
}

/// POST /api/todos
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = payload.map_err(|_| ApiError::InvalidInput)?;
    let todo = state.store.create(input.body)?;

    tracing::debug!(id = todo.id, "Todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /api/todos/{id}
pub async fn complete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    let todo = state.store.complete(id)?;

    tracing::debug!(id = todo.id, "Todo completed");
    Ok(Json(todo))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    let todo = state.store.delete(id)?;

    tracing::debug!(id = todo.id, "Todo deleted");
    Ok(Json(todo))
}

/// Parse a path id segment as a decimal todo id.
fn parse_id(segment: &str) -> Result<TodoId, ApiError> {
    segment.parse().map_err(|_| ApiError::InvalidId)
}
