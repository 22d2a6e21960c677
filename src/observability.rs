//! Diagnostic emission
//!
//! The core never prints; it hands diagnostics to an observability scope
//! supplied by the surrounding workspace. Two implementations ship here:
//! `TracingScope` forwards to the `tracing` ecosystem and is what
//! production wiring uses, `CollectingScope` buffers diagnostics so tests
//! can assert on them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex};

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One emitted diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Rendered underlying error, when the diagnostic wraps one
    pub underlying: Option<String>,
}

impl Diagnostic {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            underlying: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            underlying: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            underlying: None,
        }
    }

    /// Attaches the rendered form of an underlying error
    pub fn with_underlying(mut self, underlying: &dyn std::error::Error) -> Self {
        self.underlying = Some(underlying.to_string());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.underlying {
            Some(underlying) => write!(f, "{} ({})", self.message, underlying),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Sink for diagnostics emitted during a load.
///
/// Implementations must be safe to share across the lookup tasks a single
/// load fans out.
pub trait ObservabilityScope: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Shared scope handle threaded through loads and their child tasks
pub type ObservabilityHandle = Arc<dyn ObservabilityScope>;

/// Scope that forwards diagnostics to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingScope;

impl ObservabilityScope for TracingScope {
    fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Info => tracing::info!(target: "regalign", "{}", diagnostic),
            Severity::Warning => tracing::warn!(target: "regalign", "{}", diagnostic),
            Severity::Error => tracing::error!(target: "regalign", "{}", diagnostic),
        }
    }
}

/// Scope that buffers diagnostics for later inspection.
///
/// Clones share one buffer, so a test can keep a handle while passing
/// another into the loader.
#[derive(Debug, Default, Clone)]
pub struct CollectingScope {
    buffer: Arc<Mutex<Vec<Diagnostic>>>,
}

impl CollectingScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.buffer.lock().unwrap().clone()
    }

    /// Messages at the given severity, in emission order
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.buffer
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.severity == severity)
            .map(|d| d.message.clone())
            .collect()
    }
}

impl ObservabilityScope for CollectingScope {
    fn emit(&self, diagnostic: Diagnostic) {
        self.buffer.lock().unwrap().push(diagnostic);
    }
}
