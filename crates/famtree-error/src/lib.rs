//! Errors raised by the Family Tree database layer.
//!
//! Every failure the database layer reports is one variant of the closed [`DbError`] enum. Each
//! variant wraps an immutable value carrying the data needed to explain the failure to the user;
//! the explanation is produced by [`Render::render`] through an injected [`Translator`], and
//! `Display` renders the built-in English text.
//!
//! The crate does not detect version skew, open databases, or log. Callers construct errors
//! with values they have already computed and hand them to an [`ErrorPolicy`] (or their own UI)
//! for presentation.

pub mod context;
pub mod diagnostic;
pub mod engine;
pub mod interpreter;
pub mod kind;
pub mod policy;
pub mod pretty;
pub mod result_ext;
pub mod schema;
pub mod severity;
pub mod template;
pub mod translate;
pub mod write;

// public exports
pub use context::{ContextualError, ErrorContext};
pub use engine::{
    EngineDowngrade, EngineDowngradeRequired, EngineUpgradeRequired, EnvironmentError,
};
pub use interpreter::{InterpreterDowngrade, InterpreterUpgradeRequired};
pub use kind::ErrorKind;
pub use policy::{CombinedPolicy, ErrorPolicy, NoopPolicy};
#[cfg(feature = "serde")]
pub use pretty::PrettyDebug;
pub use result_ext::{IterResultExt, ResultExt};
pub use schema::{SchemaUpgradeRequired, VersionError};
pub use severity::Severity;
pub use template::{Render, Template, Templated};
pub use translate::{Catalog, CatalogError, Translator, Untranslated};
pub use write::{DbException, TransactionCancel, WriteFailure};

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Exception(#[from] DbException),
    #[error(transparent)]
    WriteFailure(#[from] WriteFailure),
    #[error(transparent)]
    TransactionCancel(#[from] TransactionCancel),
    #[error(transparent)]
    Version(#[from] VersionError),
    #[error(transparent)]
    EngineDowngrade(#[from] EngineDowngrade),
    #[error(transparent)]
    EngineDowngradeRequired(#[from] EngineDowngradeRequired),
    #[error(transparent)]
    EngineUpgradeRequired(#[from] EngineUpgradeRequired),
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
    #[error(transparent)]
    SchemaUpgradeRequired(#[from] SchemaUpgradeRequired),
    #[error(transparent)]
    InterpreterDowngrade(#[from] InterpreterDowngrade),
    #[error(transparent)]
    InterpreterUpgradeRequired(#[from] InterpreterUpgradeRequired),
}

impl DbError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DbError::Exception(_) => ErrorKind::Exception,
            DbError::WriteFailure(_) => ErrorKind::WriteFailure,
            DbError::TransactionCancel(_) => ErrorKind::TransactionCancel,
            DbError::Version(_) => ErrorKind::Version,
            DbError::EngineDowngrade(_) => ErrorKind::EngineDowngrade,
            DbError::EngineDowngradeRequired(_) => ErrorKind::EngineDowngradeRequired,
            DbError::EngineUpgradeRequired(_) => ErrorKind::EngineUpgradeRequired,
            DbError::Environment(_) => ErrorKind::Environment,
            DbError::SchemaUpgradeRequired(_) => ErrorKind::SchemaUpgradeRequired,
            DbError::InterpreterDowngrade(_) => ErrorKind::InterpreterDowngrade,
            DbError::InterpreterUpgradeRequired(_) => ErrorKind::InterpreterUpgradeRequired,
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind().severity()
    }

    /// The `(primary, secondary)` pair of a write failure.
    pub fn messages(&self) -> Option<(&str, &str)> {
        match self {
            DbError::WriteFailure(e) => Some(e.messages()),
            _ => None,
        }
    }

    pub fn is_cancellation(&self) -> bool {
        matches!(self, DbError::TransactionCancel(_))
    }

    /// Schema, storage engine or interpreter version skew.
    pub fn is_version_mismatch(&self) -> bool {
        self.kind().is_version_mismatch()
    }

    /// The tree can be opened only after the user upgrades it.
    pub fn requires_upgrade(&self) -> bool {
        matches!(
            self,
            DbError::EngineUpgradeRequired(_)
                | DbError::SchemaUpgradeRequired(_)
                | DbError::InterpreterUpgradeRequired(_)
        )
    }

    /// Stored field values by name, as used for structured logging.
    pub fn field_values(&self) -> Vec<(&'static str, String)> {
        match self {
            DbError::Exception(e) => vec![("message", e.message().to_string())],
            DbError::WriteFailure(e) => vec![
                ("primary", e.primary().to_string()),
                ("secondary", e.secondary().to_string()),
            ],
            DbError::TransactionCancel(e) => vec![("message", e.message().to_string())],
            DbError::Version(e) => e.args(),
            DbError::EngineDowngrade(e) => e.args(),
            DbError::EngineDowngradeRequired(e) => e.args(),
            DbError::EngineUpgradeRequired(e) => e.args(),
            DbError::Environment(e) => vec![("message", e.message().to_string())],
            DbError::SchemaUpgradeRequired(e) => e.args(),
            DbError::InterpreterDowngrade(e) => e.args(),
            DbError::InterpreterUpgradeRequired(e) => e.args(),
        }
    }

    /// Attach the location of the Family Tree the error was raised for.
    pub fn with_context(self, tree_path: impl Into<PathBuf>) -> ContextualError {
        ContextualError::WithContext {
            source: Box::new(self),
            context: ErrorContext::new(tree_path.into()),
        }
    }
}

impl Render for DbError {
    fn render(&self, translator: &dyn Translator) -> String {
        match self {
            DbError::Exception(e) => e.render(translator),
            DbError::WriteFailure(e) => e.render(translator),
            DbError::TransactionCancel(e) => e.render(translator),
            DbError::Version(e) => e.render(translator),
            DbError::EngineDowngrade(e) => e.render(translator),
            DbError::EngineDowngradeRequired(e) => e.render(translator),
            DbError::EngineUpgradeRequired(e) => e.render(translator),
            DbError::Environment(e) => e.render(translator),
            DbError::SchemaUpgradeRequired(e) => e.render(translator),
            DbError::InterpreterDowngrade(e) => e.render(translator),
            DbError::InterpreterUpgradeRequired(e) => e.render(translator),
        }
    }
}
