//! Injected reporting for conditions the parser recovers from.
//!
//! The parser never aborts on a malformed number or a dangling face
//! reference. It substitutes a fallback value and hands a [`Diagnostic`] to
//! its [`DiagnosticSink`], so callers decide where the report goes.

use thiserror::Error;

/// A non-fatal condition encountered while parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    /// A numeric field did not parse; the value defaulted to zero.
    #[error("line {line}: failed to convert {token:?}, using 0")]
    MalformedNumber { line: usize, token: String },

    /// A face referenced a vertex that does not exist (yet).
    #[error("line {line}: vertex reference {reference} is out of range ({vertex_count} vertices defined)")]
    ReferenceOutOfRange {
        line: usize,
        reference: i64,
        vertex_count: usize,
    },

    /// A face was dropped because one of its references was out of range.
    #[error("line {line}: face skipped")]
    FaceSkipped { line: usize },
}

impl Diagnostic {
    /// 1-based line the diagnostic refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedNumber { line, .. }
            | Self::ReferenceOutOfRange { line, .. }
            | Self::FaceSkipped { line } => *line,
        }
    }
}

/// Receives diagnostics from the parser.
pub trait DiagnosticSink {
    fn record(&mut self, diagnostic: Diagnostic);
}

/// Forwards every diagnostic to `tracing` at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(line = diagnostic.line(), "{diagnostic}");
    }
}

/// Collects diagnostics in order.
impl DiagnosticSink for Vec<Diagnostic> {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn record(&mut self, diagnostic: Diagnostic) {
        (**self).record(diagnostic);
    }
}
