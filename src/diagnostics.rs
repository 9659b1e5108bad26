//! Diagnostic sink: the parser's only channel back to the embedding host.
//!
//! The original MPSolve parser reported errors through the `mps_context`
//! passed into every function. This crate keeps that shape without the
//! singleton: a `&mut dyn DiagnosticSink` borrowed for the duration of a
//! single [`crate::parse_polynomial`] call.

/// Receives one line per parse error.
///
/// Implementations are expected to be cheap; the parser calls `report` at
/// most once per parse (it never attempts recovery).
pub trait DiagnosticSink {
    fn report(&mut self, message: &str);
}

/// Writes every diagnostic to stderr, prefixed the way the original
/// `mps_error` calls were logged.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, message: &str) {
        eprintln!("mps-polyparse: {message}");
    }
}

/// Discards every diagnostic. Useful when the caller only cares about the
/// `Result` and has no sink of its own to wire up.
#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _message: &str) {}
}

/// Collects diagnostics in memory, for tests and for hosts that want to
/// batch-display errors rather than stream them.
#[derive(Debug, Default)]
pub struct VecSink {
    pub messages: Vec<String>,
}

impl DiagnosticSink for VecSink {
    fn report(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
