//! In-memory todo store served over HTTP.
//!
//! Items are kept in a `Vec` whose order is the list order. `PUT
//! /todos/reorder` moves the listed ids to the front in the given order;
//! unlisted items follow in their previous relative order.

use std::{collections::HashSet, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use uuid::Uuid;

pub const MAX_TITLE_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Deserialize)]
pub struct ReorderTodos {
    pub ids: Vec<Uuid>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("todo not found")]
    NotFound,

    #[error("validation failed: {0}")]
    Validation(String),
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            StoreError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": "Todo not found" }))).into_response()
            }
            StoreError::Validation(detail) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Validation failed", "details": [detail] })),
            )
                .into_response(),
        }
    }
}

pub type Db = Arc<RwLock<Vec<Todo>>>;

pub fn app() -> Router {
    router(Db::default())
}

/// Router over an existing store, so tests can inspect or seed it.
pub fn router(db: Db) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/reorder", put(reorder_todos))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(db)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn validate_title(title: &str) -> Result<String, StoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(StoreError::Validation("title must not be blank".to_string()));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(StoreError::Validation(format!(
            "title must be at most {MAX_TITLE_CHARS} characters"
        )));
    }
    Ok(title.to_string())
}

/// Listed ids first, in order, then everything else as it was.
fn apply_order(todos: &mut Vec<Todo>, ids: &[Uuid]) -> Result<(), StoreError> {
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(*id) {
            return Err(StoreError::Validation(format!("duplicate id {id}")));
        }
        if !todos.iter().any(|t| t.id == *id) {
            return Err(StoreError::NotFound);
        }
    }

    let (mut listed, rest): (Vec<Todo>, Vec<Todo>) = std::mem::take(todos)
        .into_iter()
        .partition(|t| seen.contains(&t.id));
    listed.sort_by_key(|t| ids.iter().position(|id| *id == t.id));
    listed.extend(rest);
    *todos = listed;
    Ok(())
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), StoreError> {
    let title = validate_title(&input.title).inspect_err(|e| warn!(error = %e, "create rejected"))?;
    let todo = Todo {
        id: Uuid::new_v4(),
        title,
        completed: input.completed,
    };
    db.write().await.push(todo.clone());
    info!(id = %todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<Todo>, StoreError> {
    let todos = db.read().await;
    todos
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(StoreError::NotFound)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StoreError> {
    let title = input.title.as_deref().map(validate_title).transpose()?;
    let mut todos = db.write().await;
    let todo = todos.iter_mut().find(|t| t.id == id).ok_or(StoreError::NotFound)?;
    if let Some(title) = title {
        todo.title = title;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    info!(%id, "todo updated");
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<StatusCode, StoreError> {
    let mut todos = db.write().await;
    let index = todos.iter().position(|t| t.id == id).ok_or(StoreError::NotFound)?;
    todos.remove(index);
    info!(%id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn reorder_todos(
    State(db): State<Db>,
    Json(input): Json<ReorderTodos>,
) -> Result<StatusCode, StoreError> {
    let mut todos = db.write().await;
    apply_order(&mut todos, &input.ids).inspect_err(|e| warn!(error = %e, "reorder rejected"))?;
    info!(count = input.ids.len(), "todos reordered");
    Ok(StatusCode::OK)
}
