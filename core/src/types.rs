//! Wire DTOs for the remote todo store.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the client never depends on Axum internals. Integration tests catch any
//! schema drift between the two crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item as held by the remote store.
///
/// The item's position is not a field: it is the index within whatever
/// ordered sequence the item belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl CreateTodo {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
        }
    }
}

/// Partial update payload. Omitted fields are left unchanged by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    pub fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }
}

/// Full desired ordering of the list, first id first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReorderTodos {
    pub ids: Vec<Uuid>,
}
