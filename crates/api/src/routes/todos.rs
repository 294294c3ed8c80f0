//! Todo list and detail endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use domain::{TodoId, TodoItem, TodoList};
use entity_store::EntityStore;
use serde::{Deserialize, Serialize};

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

// -- Request types --

#[derive(Debug, Deserialize)]
pub struct TodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl TodoRequest {
    fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

// -- Response types --

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub formatted_created_at: String,
}

impl From<TodoItem> for TodoResponse {
    fn from(item: TodoItem) -> Self {
        Self {
            formatted_created_at: item.formatted_created_at(),
            id: item.id.as_i64(),
            title: item.title,
            description: item.description,
            completed: item.completed,
            created_at: item.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListResponse {
    pub total_count: usize,
    pub completed_count: usize,
    pub pending_count: usize,
    pub items: Vec<TodoResponse>,
}

impl From<TodoList> for TodoListResponse {
    fn from(list: TodoList) -> Self {
        Self {
            total_count: list.total_count,
            completed_count: list.completed_count,
            pending_count: list.pending_count,
            items: list.items.into_iter().map(TodoResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub id: i64,
    pub completed: bool,
}

fn todo_not_found(id: TodoId) -> ApiError {
    ApiError::NotFound(format!("Todo not found: {id}"))
}

// -- Handlers --

/// GET /todo/list — all items with completion counts.
#[tracing::instrument(skip(state))]
pub async fn list<S: EntityStore<TodoId, TodoItem> + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<TodoListResponse> {
    Json(state.todos.list().into())
}

/// POST /todo/list — create an item.
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: EntityStore<TodoId, TodoItem> + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError> {
    let Json(req) = payload?;
    let item = state.todos.add(req.title(), req.description.as_deref())?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

/// DELETE /todo/list/{id} — delete an item.
#[tracing::instrument(skip(state))]
pub async fn delete<S: EntityStore<TodoId, TodoItem> + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    if state.todos.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(todo_not_found(id))
    }
}

/// PATCH /todo/list/{id}/toggle — flip the completion flag.
#[tracing::instrument(skip(state))]
pub async fn toggle<S: EntityStore<TodoId, TodoItem> + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<ToggleResponse>, ApiError> {
    let id = parse_id(&id)?;
    let item = state.todos.toggle(id).ok_or_else(|| todo_not_found(id))?;
    Ok(Json(ToggleResponse {
        id: item.id.as_i64(),
        completed: item.completed,
    }))
}

/// GET /todo/detail/{id} — load one item.
#[tracing::instrument(skip(state))]
pub async fn detail<S: EntityStore<TodoId, TodoItem> + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, ApiError> {
    let id = parse_id(&id)?;
    let item = state.todos.get_detail(id).ok_or_else(|| todo_not_found(id))?;
    Ok(Json(item.into()))
}

/// PUT /todo/detail/{id} — replace title and description.
#[tracing::instrument(skip(state, payload))]
pub async fn update<S: EntityStore<TodoId, TodoItem> + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<Json<TodoResponse>, ApiError> {
    let id = parse_id(&id)?;
    let Json(req) = payload?;
    let item = state
        .todos
        .update(id, req.title(), req.description.as_deref())?
        .ok_or_else(|| todo_not_found(id))?;
    Ok(Json(item.into()))
}
