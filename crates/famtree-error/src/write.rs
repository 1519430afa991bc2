//! Message-carrying kinds. Their text is supplied by the raising code and is never translated.

use thiserror::Error;

use crate::template::Render;
use crate::translate::Translator;

/// A generic database failure carrying a ready-made message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DbException {
    message: String,
}

impl DbException {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A write to the database failed.
///
/// `secondary` elaborates on `primary` and may be empty. Only `primary` is part of the
/// rendered text; UIs that show a title and a body read both through [`WriteFailure::messages`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{primary}")]
pub struct WriteFailure {
    primary: String,
    secondary: String,
}

impl WriteFailure {
    pub fn new(primary: impl Into<String>) -> Self {
        Self::with_detail(primary, String::new())
    }

    pub fn with_detail(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    pub fn messages(&self) -> (&str, &str) {
        (&self.primary, &self.secondary)
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn secondary(&self) -> &str {
        &self.secondary
    }
}

/// The user asked to abort a transaction in progress, e.g. a lengthy batch edit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransactionCancel {
    message: String,
}

impl TransactionCancel {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Render for DbException {
    fn render(&self, _translator: &dyn Translator) -> String {
        self.message.clone()
    }
}

impl Render for WriteFailure {
    fn render(&self, _translator: &dyn Translator) -> String {
        self.primary.clone()
    }
}

impl Render for TransactionCancel {
    fn render(&self, _translator: &dyn Translator) -> String {
        self.message.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_failure_keeps_both_parts() {
        let err = WriteFailure::with_detail("Could not save person", "Disk full");
        assert_eq!(err.messages(), ("Could not save person", "Disk full"));
        assert_eq!(err.to_string(), "Could not save person");
        assert_eq!(err.render_default(), "Could not save person");
    }

    #[test]
    fn write_failure_secondary_defaults_to_empty() {
        let err = WriteFailure::new("Could not save");
        assert_eq!(err.messages(), ("Could not save", ""));
        assert_eq!(err.to_string(), "Could not save");
    }

    #[test]
    fn simple_kinds_ignore_translator() {
        let shout = |key: &str| Some(key.to_uppercase());
        assert_eq!(TransactionCancel::new("aborted").render(&shout), "aborted");
        assert_eq!(DbException::new("boom").render(&shout), "boom");
    }
}
