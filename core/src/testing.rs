//! Shared fixtures for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::Todo;

/// Replays queued outcomes in order and records every request it was given.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    outcomes: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.outcomes
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub(crate) fn unreachable(self) -> Self {
        self.outcomes
            .borrow_mut()
            .push_back(Err(ApiError::Transport("connection refused".to_string())));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.outcomes.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request: {request:?}"))
    }
}

pub(crate) fn todo(n: u128, title: &str) -> Todo {
    Todo {
        id: Uuid::from_u128(n),
        title: title.to_string(),
        completed: false,
    }
}

pub(crate) fn json(todos: &[Todo]) -> String {
    serde_json::to_string(todos).unwrap()
}
