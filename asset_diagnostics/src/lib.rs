//! # Diagnostic Events
//!
//! This crate implements structured diagnostics for view construction.
//!
//! ## Philosophy
//!
//! Failures that are absorbed rather than returned are reported as structured
//! events to an injected sink, not written to a global logger. Callers that
//! care about them read the sink; callers that do not pass a null sink.

use std::sync::{Mutex, MutexGuard};

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

/// A structured diagnostic event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    /// Severity
    pub level: DiagnosticLevel,
    /// Event message
    pub message: String,
    /// Structured fields
    pub fields: Vec<(String, String)>,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Creates a warning event
    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warn, message)
    }

    /// Adds a field to the event
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Returns the value of the first field with the given key
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Consumer of diagnostic events.
///
/// Sinks are shared across a construction pass and may be shared across
/// threads afterwards, so recording takes `&self`.
pub trait DiagnosticSink: Send + Sync {
    /// Records one event
    fn record(&self, event: DiagnosticEvent);
}

/// Sink that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _event: DiagnosticEvent) {}
}

/// Sink that keeps every event in memory, in arrival order
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl RecordingSink {
    /// Creates an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all recorded events
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.guard().clone()
    }

    /// Returns the number of recorded events
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// Returns true if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<DiagnosticEvent>> {
        match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, event: DiagnosticEvent) {
        self.guard().push(event);
    }
}
