//! Diagnostics reported during dispatch.
//!
//! The controller never propagates listener failures to the caller of
//! `trigger`. Instead it hands a [`Diagnostic`] to the configured
//! [`DiagnosticsSink`]. Two sinks ship with the crate:
//!
//! - [`TracingSink`] (default) logs through `tracing`
//! - [`RecordingSink`] keeps every diagnostic in memory

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{error, warn};

use crate::error::HandlerError;
use crate::listener::ListenerId;

/// What happened to a listener during dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The listener's owner was gone; it was pruned without being invoked.
    StaleSubscriber,
    /// The listener returned an error or panicked.
    HandlerFailed(HandlerError),
}

/// A single dispatch diagnostic.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Debug rendering of the event key.
    pub key: String,
    pub listener: ListenerId,
    pub listener_name: String,
    pub kind: DiagnosticKind,
    pub timestamp: DateTime<Utc>,
}

impl Diagnostic {
    pub(crate) fn new(
        key: &dyn std::fmt::Debug,
        listener: ListenerId,
        listener_name: &str,
        kind: DiagnosticKind,
    ) -> Self {
        Self {
            key: format!("{:?}", key),
            listener,
            listener_name: listener_name.to_string(),
            kind,
            timestamp: Utc::now(),
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self.kind, DiagnosticKind::StaleSubscriber)
    }

    pub fn error(&self) -> Option<&HandlerError> {
        match &self.kind {
            DiagnosticKind::HandlerFailed(err) => Some(err),
            DiagnosticKind::StaleSubscriber => None,
        }
    }
}

/// Receiver of dispatch diagnostics.
///
/// Implementations must not panic: they run inside the dispatch loop.
pub trait DiagnosticsSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Logs diagnostics with `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match &diagnostic.kind {
            DiagnosticKind::StaleSubscriber => warn!(
                key = %diagnostic.key,
                listener = %diagnostic.listener,
                name = %diagnostic.listener_name,
                "Listener owner destroyed without unregistering; pruned"
            ),
            DiagnosticKind::HandlerFailed(err) => error!(
                key = %diagnostic.key,
                listener = %diagnostic.listener,
                name = %diagnostic.listener_name,
                "Handler failed: {}",
                err
            ),
        }
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn stale_count(&self) -> usize {
        self.records.lock().iter().filter(|d| d.is_stale()).count()
    }

    pub fn failures(&self) -> Vec<HandlerError> {
        self.records
            .lock()
            .iter()
            .filter_map(|d| d.error().cloned())
            .collect()
    }

    /// Drain and return everything recorded so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.records.lock())
    }
}

impl DiagnosticsSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.records.lock().push(diagnostic);
    }
}

impl<S: DiagnosticsSink + ?Sized> DiagnosticsSink for std::sync::Arc<S> {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}
