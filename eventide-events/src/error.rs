//! Error types for the event controller.

use std::fmt;

use serde::Serialize;

use crate::args::HandlerSignature;

/// Controller operation that rejected a listener shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Register,
    Unregister,
    Trigger,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register => write!(f, "register"),
            Self::Unregister => write!(f, "unregister"),
            Self::Trigger => write!(f, "trigger"),
        }
    }
}

/// Errors surfaced to the caller of a controller operation.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// The argument shape does not match the one fixed for the key.
    #[error("{operation} failed for event {key}: expected {expected}, got {found}")]
    SignatureMismatch {
        operation: Operation,
        key: String,
        expected: HandlerSignature,
        found: HandlerSignature,
    },
}

impl EventError {
    pub(crate) fn mismatch(
        operation: Operation,
        key: &dyn fmt::Debug,
        expected: HandlerSignature,
        found: HandlerSignature,
    ) -> Self {
        Self::SignatureMismatch {
            operation,
            key: format!("{:?}", key),
            expected,
            found,
        }
    }
}

/// Failure raised from inside a listener body.
///
/// Never returned from `trigger`; handed to the diagnostics sink instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "type", content = "message", rename_all = "snake_case")]
pub enum HandlerError {
    #[error("Handler failed: {0}")]
    Failed(String),

    #[error("Handler panicked: {0}")]
    Panicked(String),
}

impl HandlerError {
    /// Build a [`HandlerError::Panicked`] from a `catch_unwind` payload.
    pub(crate) fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self::Panicked(message)
    }
}

pub type Result<T> = std::result::Result<T, EventError>;
