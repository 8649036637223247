//! Action layer: one user intent, one request, one uniform result.
//!
//! # Design
//! Every operation builds its request with `TodoClient`, runs it through the
//! `Transport`, parses the response, and folds every failure into
//! `ActionError::Failed` with a generic localized message. The underlying
//! `ApiError` is logged here and goes no further. Blank titles are rejected
//! before anything is sent.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::client::TodoClient;
use crate::config::ClientConfig;
use crate::error::{ActionError, ApiError};
use crate::http::{HttpRequest, HttpResponse};
use crate::messages::Messages;
use crate::render::ItemIntent;
use crate::transport::Transport;
use crate::types::{CreateTodo, Todo, UpdateTodo};

pub type ActionResult<T = ()> = Result<T, ActionError>;

pub struct TodoActions<T> {
    client: TodoClient,
    transport: T,
    messages: &'static Messages,
}

impl<T: Transport> TodoActions<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self {
            client: TodoClient::new(&config.base_url),
            transport,
            messages: config.locale.messages(),
        }
    }

    pub fn messages(&self) -> &'static Messages {
        self.messages
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the authoritative ordered list.
    pub fn list(&self) -> ActionResult<Vec<Todo>> {
        let request = Ok(self.client.build_list_todos());
        self.round_trip(request, TodoClient::parse_list_todos, self.messages.load_failed)
    }

    /// Creates a todo from `title` with surrounding whitespace removed.
    pub fn create(&self, title: &str) -> ActionResult<Todo> {
        let title = title.trim();
        if title.is_empty() {
            debug!("rejecting blank title");
            return Err(ActionError::Validation(self.messages.title_required.to_string()));
        }
        let request = self.client.build_create_todo(&CreateTodo::titled(title));
        let todo = self.round_trip(request, TodoClient::parse_create_todo, self.messages.create_failed)?;
        info!(id = %todo.id, "todo created");
        Ok(todo)
    }

    pub fn toggle(&self, id: Uuid, completed: bool) -> ActionResult<Todo> {
        let request = self.client.build_update_todo(id, &UpdateTodo::completed(completed));
        let todo = self.round_trip(request, TodoClient::parse_update_todo, self.messages.toggle_failed)?;
        info!(%id, completed, "todo toggled");
        Ok(todo)
    }

    pub fn delete(&self, id: Uuid) -> ActionResult {
        let request = Ok(self.client.build_delete_todo(id));
        self.round_trip(request, TodoClient::parse_delete_todo, self.messages.delete_failed)?;
        info!(%id, "todo deleted");
        Ok(())
    }

    /// Submits the full ordering in a single request.
    pub fn reorder(&self, ids: &[Uuid]) -> ActionResult {
        let request = self.client.build_reorder_todos(ids);
        self.round_trip(request, TodoClient::parse_reorder_todos, self.messages.reorder_failed)?;
        info!(count = ids.len(), "order saved");
        Ok(())
    }

    /// Runs the request an item intent stands for.
    pub fn dispatch(&self, intent: ItemIntent) -> ActionResult {
        match intent {
            ItemIntent::Toggle { id, completed } => self.toggle(id, completed).map(|_| ()),
            ItemIntent::Delete { id } => self.delete(id),
        }
    }

    fn round_trip<R>(
        &self,
        request: Result<HttpRequest, ApiError>,
        parse: impl FnOnce(&TodoClient, HttpResponse) -> Result<R, ApiError>,
        failure: &'static str,
    ) -> ActionResult<R> {
        request
            .and_then(|req| self.transport.execute(req))
            .and_then(|resp| parse(&self.client, resp))
            .map_err(|e| {
                warn!(error = %e, "{failure}");
                ActionError::Failed(failure.to_string())
            })
    }
}
