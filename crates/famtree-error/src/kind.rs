use crate::Severity;

/// Fieldless mirror of [`crate::DbError`] for matching, metrics labels and diagnostic codes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Exception,
    WriteFailure,
    TransactionCancel,
    Version,
    EngineDowngrade,
    EngineDowngradeRequired,
    EngineUpgradeRequired,
    Environment,
    SchemaUpgradeRequired,
    InterpreterDowngrade,
    InterpreterUpgradeRequired,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 11] = [
        ErrorKind::Exception,
        ErrorKind::WriteFailure,
        ErrorKind::TransactionCancel,
        ErrorKind::Version,
        ErrorKind::EngineDowngrade,
        ErrorKind::EngineDowngradeRequired,
        ErrorKind::EngineUpgradeRequired,
        ErrorKind::Environment,
        ErrorKind::SchemaUpgradeRequired,
        ErrorKind::InterpreterDowngrade,
        ErrorKind::InterpreterUpgradeRequired,
    ];

    /// Stable snake_case identifier.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Exception => "exception",
            ErrorKind::WriteFailure => "write_failure",
            ErrorKind::TransactionCancel => "transaction_cancel",
            ErrorKind::Version => "version",
            ErrorKind::EngineDowngrade => "engine_downgrade",
            ErrorKind::EngineDowngradeRequired => "engine_downgrade_required",
            ErrorKind::EngineUpgradeRequired => "engine_upgrade_required",
            ErrorKind::Environment => "environment",
            ErrorKind::SchemaUpgradeRequired => "schema_upgrade_required",
            ErrorKind::InterpreterDowngrade => "interpreter_downgrade",
            ErrorKind::InterpreterUpgradeRequired => "interpreter_upgrade_required",
        }
    }

    /// Default severity. A cancellation is the user's choice, and a point-release engine
    /// downgrade may still open; kinds the user can fix by upgrading are errors; the rest
    /// stop the tree from opening at all.
    pub fn severity(self) -> Severity {
        match self {
            ErrorKind::TransactionCancel | ErrorKind::EngineDowngradeRequired => Severity::Warning,
            ErrorKind::Exception
            | ErrorKind::WriteFailure
            | ErrorKind::EngineUpgradeRequired
            | ErrorKind::SchemaUpgradeRequired
            | ErrorKind::InterpreterUpgradeRequired => Severity::Error,
            ErrorKind::Version
            | ErrorKind::EngineDowngrade
            | ErrorKind::Environment
            | ErrorKind::InterpreterDowngrade => Severity::Fatal,
        }
    }

    pub fn is_version_mismatch(self) -> bool {
        matches!(
            self,
            ErrorKind::Version
                | ErrorKind::EngineDowngrade
                | ErrorKind::EngineDowngradeRequired
                | ErrorKind::EngineUpgradeRequired
                | ErrorKind::SchemaUpgradeRequired
                | ErrorKind::InterpreterDowngrade
                | ErrorKind::InterpreterUpgradeRequired
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
