//! Diagnostics for degraded input.
//!
//! The compiler never rejects malformed caller input; it degrades to a
//! best-effort block and reports what happened through a fire-and-forget
//! sink. Emission must never block or fail the transformation.

use std::sync::Mutex;

/// One degradation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A content item carried a kind tag the dispatch table does not know.
    UnknownItemKind { kind: String },
    /// A content item was neither a string nor a usable tagged record.
    InvalidItem { preview: String },
    /// The top-level content payload was not a sequence.
    NonSequenceContent,
}

/// Receiver for degradation events.
pub trait DiagnosticSink {
    /// Receives one event. Must not block.
    fn emit(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `tracing` stack at warn level.
#[derive(Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::UnknownItemKind { kind } => {
                tracing::warn!(kind = %kind, "unrecognized content item kind, degraded to paragraph");
            }
            Diagnostic::InvalidItem { preview } => {
                tracing::warn!(preview = %preview, "unusable content item skipped");
            }
            Diagnostic::NonSequenceContent => {
                tracing::warn!("content payload is not a sequence, degraded to one paragraph");
            }
        }
    }
}

/// Buffers diagnostics so a caller can inspect what degraded.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .expect("diagnostic buffer poisoned")
            .clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.events
            .lock()
            .expect("diagnostic buffer poisoned")
            .push(diagnostic);
    }
}
