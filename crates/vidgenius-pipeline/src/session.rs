//! Caller-owned session state.
//!
//! Holds the single active result (or its absence) plus the last failure
//! message. The pipeline never writes here directly; the triggering surface
//! stores outcomes and resets explicitly.

use chrono::{DateTime, Utc};
use vidgenius_models::AnalysisResult;

/// The single active analysis result for one session.
///
/// A result is either fully present and fully validated, or absent; it is
/// replaced wholesale on the next success, never merged field-by-field.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    result: Option<AnalysisResult>,
    error: Option<String>,
    held_since: Option<DateTime<Utc>>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a successful result, replacing any prior one wholesale and
    /// clearing any held error.
    pub fn store(&mut self, result: AnalysisResult) {
        self.result = Some(result);
        self.error = None;
        self.held_since = Some(Utc::now());
    }

    /// Record a failure. No partial result is ever shown: any prior result
    /// stays cleared and only the user-facing message is held.
    pub fn store_failure(&mut self, message: impl Into<String>) {
        self.result = None;
        self.error = Some(message.into());
        self.held_since = None;
    }

    /// Clear the held result and error. No side effects on the external
    /// service.
    pub fn reset(&mut self) {
        self.result = None;
        self.error = None;
        self.held_since = None;
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// When the current result was stored, if one is held.
    pub fn held_since(&self) -> Option<DateTime<Utc>> {
        self.held_since
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_none() && self.error.is_none()
    }
}
