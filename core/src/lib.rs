//! Client core for an ordered todo list with optimistic reordering.
//!
//! # Overview
//! The list is fetched from a remote todo store, shown in order, and can be
//! reordered by dragging. A drag is applied locally at once and then sent to
//! the store; if the store rejects it, the previous order comes back.
//!
//! # Design
//! - `TodoClient` is sans-IO: `build_*` produces an `HttpRequest`, `parse_*`
//!   consumes an `HttpResponse`.
//! - A `Transport` runs the round-trip (`UreqTransport` for real use).
//! - `TodoActions` turns intents into single requests with uniform
//!   `ActionError` results.
//! - `TodoList` owns the working sequence and the snapshot/apply/rollback
//!   cycle; it only ever sees `DragEnd` reports from the `DragLayer`.
//! - `TodoPage` is the page-level container tying these together.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod actions;
pub mod client;
pub mod config;
pub mod drag;
pub mod error;
pub mod http;
pub mod list;
pub mod messages;
pub mod page;
pub mod render;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use actions::{ActionResult, TodoActions};
pub use client::TodoClient;
pub use config::ClientConfig;
pub use drag::{DragEnd, DragLayer, DraggableItem, Step};
pub use error::{ActionError, ApiError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use list::{move_item, DragOutcome, ReorderOutcome, ReorderTicket, TodoList};
pub use messages::{Locale, Messages};
pub use page::{Notifier, TodoPage};
pub use render::{ItemIntent, ItemView, ListView};
pub use transport::{Transport, UreqTransport};
pub use types::{CreateTodo, ReorderTodos, Todo, UpdateTodo};
