use std::backtrace::Backtrace;
use std::fmt;
use std::path::{Path, PathBuf};

use super::*;

/// Where a database error was raised: the Family Tree on disk and, optionally, the operation.
#[derive(Debug)]
pub struct ErrorContext {
    pub tree_path: PathBuf,
    pub operation: Option<String>,
    pub backtrace: Option<Backtrace>,
}

#[derive(Debug, thiserror::Error)]
pub enum ContextualError {
    #[error("{source}{}", .context.trailer())]
    WithContext {
        #[source]
        source: Box<DbError>,
        context: ErrorContext,
    },
}

impl ErrorContext {
    pub fn new(tree_path: PathBuf) -> Self {
        Self {
            tree_path,
            operation: None,
            backtrace: Some(Backtrace::capture()),
        }
    }

    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// The line appended to the error text, empty when there is nothing to show.
    fn trailer(&self) -> String {
        match (self.tree_path.as_os_str().is_empty(), &self.operation) {
            (false, _) => format!("\n{self}"),
            (true, Some(operation)) => format!("\n(while {operation})"),
            (true, None) => String::new(),
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Family Tree: {}", self.tree_path.display())?;
        if let Some(operation) = &self.operation {
            write!(f, " (while {operation})")?;
        }
        Ok(())
    }
}

impl ContextualError {
    pub fn error(&self) -> &DbError {
        match self {
            ContextualError::WithContext { source, .. } => source.as_ref(),
        }
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            ContextualError::WithContext { context, .. } => context,
        }
    }

    pub fn tree_path(&self) -> &Path {
        &self.context().tree_path
    }

    /// Name the operation that failed.
    pub fn during(self, operation: impl Into<String>) -> Self {
        match self {
            ContextualError::WithContext { source, context } => ContextualError::WithContext {
                source,
                context: context.with_operation(operation),
            },
        }
    }

    pub fn into_inner(self) -> DbError {
        match self {
            ContextualError::WithContext { source, .. } => *source,
        }
    }
}

impl<T: Into<DbError>> From<T> for ContextualError {
    fn from(err: T) -> Self {
        ContextualError::WithContext {
            source: Box::new(err.into()),
            context: ErrorContext::new(PathBuf::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_appended_to_rendering() {
        let err = DbError::from(EngineUpgradeRequired::new(2, 5))
            .with_context("/home/ada/trees/smith")
            .during("opening");
        let text = err.to_string();
        assert!(text.contains("Bsddb version 2 format"));
        assert!(text.ends_with("Family Tree: /home/ada/trees/smith (while opening)"));
        assert_eq!(err.tree_path(), Path::new("/home/ada/trees/smith"));
    }

    #[test]
    fn source_is_the_db_error() {
        let err: ContextualError = TransactionCancel::new("stop").into();
        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "stop");
        assert!(err.error().is_cancellation());
        assert!(err.into_inner().is_cancellation());
    }

    #[test]
    fn converted_error_without_path_has_no_context_line() {
        let err: ContextualError = TransactionCancel::new("stop").into();
        assert_eq!(err.to_string(), "stop");
        assert_eq!(err.during("committing").to_string(), "stop\n(while committing)");
    }
}
