//! Structured, log-friendly pretty-print helpers.
//!
//! Gated behind the `serde` feature so consumers that only display messages don't pull in
//! serialization.

#![cfg(feature = "serde")]

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{DbError, ErrorKind, Severity};

/// Provide a structured view of an error for logging/UI.
///
/// Implementors expose a lightweight set of serializable fields; callers can
/// choose between the raw fields, a `serde_json::Value`, or a pretty JSON
/// string for human consumption.
pub trait PrettyDebug {
    type Fields<'a>: Serialize + 'a
    where
        Self: 'a;

    /// Return the structured fields, if available.
    fn fields(&self) -> Option<Self::Fields<'_>>;

    /// Convert fields to a JSON value without pretty whitespace.
    fn to_value(&self) -> Option<serde_json::Value> {
        self.fields().and_then(|f| serde_json::to_value(&f).ok())
    }

    /// Convert fields to a pretty JSON string (for logs or UI).
    fn pretty_json(&self) -> Option<String> {
        self.fields()
            .and_then(|f| serde_json::to_string_pretty(&f).ok())
    }

    /// Emit a tracing event with both the Display string and structured fields when available.
    #[cfg(feature = "tracing")]
    fn emit_tracing(&self, level: tracing::Level, message: &str)
    where
        Self: std::fmt::Display,
    {
        let fields = self.pretty_json().unwrap_or_default();
        match level {
            tracing::Level::ERROR => {
                tracing::event!(tracing::Level::ERROR, error = %self, %fields, "{message}")
            }
            tracing::Level::WARN => {
                tracing::event!(tracing::Level::WARN, error = %self, %fields, "{message}")
            }
            tracing::Level::INFO => {
                tracing::event!(tracing::Level::INFO, error = %self, %fields, "{message}")
            }
            tracing::Level::DEBUG => {
                tracing::event!(tracing::Level::DEBUG, error = %self, %fields, "{message}")
            }
            _ => {
                tracing::event!(tracing::Level::TRACE, error = %self, %fields, "{message}")
            }
        }
    }
}

/// Serializable snapshot of a [`DbError`].
#[derive(Debug, Serialize)]
pub struct DbErrorFields {
    pub kind: ErrorKind,
    pub severity: Severity,
    pub fields: BTreeMap<&'static str, String>,
}

impl PrettyDebug for DbError {
    type Fields<'a> = DbErrorFields;

    fn fields(&self) -> Option<Self::Fields<'_>> {
        Some(DbErrorFields {
            kind: self.kind(),
            severity: self.severity(),
            fields: self.field_values().into_iter().collect(),
        })
    }
}
