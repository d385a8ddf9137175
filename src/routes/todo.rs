use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::entities::Todo,
    error::AppError,
    services::{ServiceContext, TodoService},
    state::AppState,
};

/// Request body for create and update. A client-supplied `id` is ignored:
/// create lets storage assign one and update takes it from the path.
#[derive(Debug, Deserialize)]
pub struct TodoPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoPayload {
    fn into_todo(self, id: i64) -> Todo {
        Todo {
            id,
            title: self.title,
            completed: self.completed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(state)
}

async fn list_todos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TodoResponse>>, AppError> {
    let todos = todo_service_from_state(&state).find_all().await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

async fn get_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = todo_service_from_state(&state).find_by_id(id).await?;
    Ok(Json(todo.into()))
}

async fn create_todo(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TodoPayload>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let todo = todo_service_from_state(&state)
        .save(body.into_todo(0))
        .await?;
    tracing::info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo.into())))
}

async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<TodoPayload>,
) -> Result<Json<TodoResponse>, AppError> {
    if id <= 0 {
        return Err(AppError::bad_request("Todo id must be a positive integer"));
    }
    let todo = todo_service_from_state(&state)
        .save(body.into_todo(id))
        .await?;
    tracing::info!(id = todo.id, "updated todo");
    Ok(Json(todo.into()))
}

async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    todo_service_from_state(&state).delete_by_id(id).await?;
    tracing::info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

impl From<Todo> for TodoResponse {
    fn from(model: Todo) -> Self {
        Self {
            id: model.id,
            title: model.title,
            completed: model.completed,
        }
    }
}

fn todo_service_from_state(state: &AppState) -> TodoService {
    ServiceContext::from_state(state).todo()
}
