//! `miette` integration: stable codes, a short next step, and the backup how-to link.

#![cfg(feature = "diagnostic")]

use std::fmt::Display;

use miette::Diagnostic;

use crate::template::BACKUP_HOWTO_URL;
use crate::{DbError, ErrorKind, Severity};

impl ErrorKind {
    /// One-line next step for the user.
    pub fn help(self) -> Option<&'static str> {
        match self {
            ErrorKind::Exception | ErrorKind::TransactionCancel => None,
            ErrorKind::WriteFailure => Some("check free disk space and permissions, then retry"),
            ErrorKind::Version => {
                Some("open the tree with a matching version, or move the data through XML")
            }
            ErrorKind::EngineDowngrade | ErrorKind::InterpreterDowngrade => {
                Some("back the tree up with the newer version and import the backup here")
            }
            ErrorKind::EngineDowngradeRequired => {
                Some("make a backup with the newer version before opening it here")
            }
            ErrorKind::EngineUpgradeRequired
            | ErrorKind::SchemaUpgradeRequired
            | ErrorKind::InterpreterUpgradeRequired => {
                Some("make a backup with the old version before upgrading")
            }
            ErrorKind::Environment => {
                Some("export to XML with the old version, or try the database recovery tools")
            }
        }
    }
}

impl Diagnostic for DbError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(format!("famtree::{}", self.kind().code())))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match DbError::severity(self) {
            Severity::Warning => miette::Severity::Warning,
            Severity::Error | Severity::Fatal => miette::Severity::Error,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        self.kind()
            .help()
            .map(|h| Box::new(h) as Box<dyn Display + 'a>)
    }

    fn url<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        if self.is_version_mismatch() {
            Some(Box::new(BACKUP_HOWTO_URL))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;

    use crate::{DbError, EngineDowngradeRequired, ErrorKind, TransactionCancel, WriteFailure};

    #[test]
    fn code_is_namespaced_kind() {
        let err: DbError = WriteFailure::new("failed").into();
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("famtree::write_failure"));
        assert!(err.url().is_none());
    }

    #[test]
    fn version_skew_links_backup_howto() {
        let err: DbError = EngineDowngradeRequired::new("5.3.28", "5.3.21").into();
        let url = err.url().map(|u| u.to_string()).expect("url");
        assert!(url.ends_with("How_to_make_a_backup"));
        assert_eq!(Diagnostic::severity(&err), Some(miette::Severity::Warning));
    }

    #[test]
    fn cancellation_has_no_help() {
        let err: DbError = TransactionCancel::new("stop").into();
        assert!(err.help().is_none());
        assert!(ErrorKind::ALL.iter().filter(|k| k.help().is_some()).count() >= 9);
    }
}
