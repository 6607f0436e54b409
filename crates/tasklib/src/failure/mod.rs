//! Structured-failure contract shared by the dispatcher and task logic.
//!
//! Every classified failure — whether raised deliberately by a task body or
//! produced by the shim itself — is a [`Failure`] triple of namespaced kind,
//! human-readable message, and optional JSON details. The triple serialises
//! deterministically as `{"kind":...,"msg":...,"details":...}` with no extra
//! fields.

use serde::Serialize;
use thiserror::Error;

use crate::params::Value;

/// Failure kinds raised by the shim itself.
///
/// Task authors choose their own namespaced kinds (`domain/reason`); these
/// constants cover the dispatcher's fixed taxonomy.
pub mod kinds {
    /// The task author never provided a `task` body.
    pub const NOT_IMPLEMENTED: &str = "tasklib/not-implemented";
    /// Malformed, empty, or non-object input on stdin.
    pub const PARSE_ERROR: &str = "tasklib/parse-error";
    /// Target descriptor extraction or transport registry failure.
    pub const TRANSPORT_ERROR: &str = "tasklib/transport-error";
    /// The transport was accessed but no target descriptor was supplied.
    pub const NO_TRANSPORT: &str = "tasklib/no-transport";
}

/// Fixed message accompanying [`kinds::NOT_IMPLEMENTED`].
const NOT_IMPLEMENTED_MSG: &str =
    "The task author must implement the `task` method in the task";

/// A classified failure.
///
/// Construction never fails and `details` defaults to an empty mapping, not
/// null. Field order in the serialised envelope is `kind`, `msg`, `details`.
///
/// # Example
///
/// ```
/// use tasklib::{Failure, Value};
///
/// let failure = Failure::new("task/error-kind", "task error message")
///     .with_details(Value::from("Additional details"));
/// assert_eq!(
///     serde_json::to_string(&failure).expect("serialise"),
///     r#"{"kind":"task/error-kind","msg":"task error message","details":"Additional details"}"#,
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{kind}: {msg}")]
pub struct Failure {
    kind: String,
    msg: String,
    details: Value,
}

impl Failure {
    /// Creates a failure with empty details.
    #[must_use]
    pub fn new(kind: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            msg: msg.into(),
            details: Value::empty_map(),
        }
    }

    /// Attaches a details payload.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<Value>) -> Self {
        self.details = details.into();
        self
    }

    /// The fixed failure reported when no task body was provided.
    #[must_use]
    pub fn not_implemented() -> Self {
        Self::new(kinds::NOT_IMPLEMENTED, NOT_IMPLEMENTED_MSG)
    }

    /// Returns the namespaced kind identifier.
    #[must_use]
    pub const fn kind(&self) -> &str {
        self.kind.as_str()
    }

    /// Returns the human-readable message.
    #[must_use]
    pub const fn msg(&self) -> &str {
        self.msg.as_str()
    }

    /// Returns the details payload.
    #[must_use]
    pub const fn details(&self) -> &Value {
        &self.details
    }
}
