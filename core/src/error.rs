//! Error types for the todo store client.
//!
//! # Design
//! `ApiError` is what the sans-IO client and the transports report. It never
//! leaves `crate::actions`: the action layer logs it and converts it into an
//! `ActionError` carrying a user-facing message.

use thiserror::Error;

/// Errors returned by `TodoClient` and `Transport` implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Outcome of a user-facing action that did not succeed.
///
/// Both variants carry a localized message ready to show to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Rejected locally before any request was made.
    #[error("{0}")]
    Validation(String),

    /// The request failed or the store rejected it.
    #[error("{0}")]
    Failed(String),
}

impl ActionError {
    pub fn message(&self) -> &str {
        match self {
            ActionError::Validation(msg) | ActionError::Failed(msg) => msg,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ActionError::Validation(_))
    }
}
