use super::{DbError, ErrorPolicy, Result, Severity};

/// Extension trait for `Result` enabling policy-driven emission without
/// contaminating core control-flow with side-effects.
///
/// Each helper emits the error when the policy classifies it at or above the named severity and
/// returns the result unchanged, so the caller still decides whether to abort.
///
/// Example
/// ```rust,ignore
/// use famtree_error::{Result, ResultExt, ErrorPolicy, WriteFailure};
///
/// fn commit(policy: &impl ErrorPolicy) -> Result<()> {
///     let r: Result<()> = Err(WriteFailure::new("could not store person").into());
///     r.emit_error(policy) // shown to the user, still Err for the caller
/// }
/// ```
pub trait ResultExt<T> {
    /// Emit the error unconditionally and return the result unchanged
    fn emit_event(self, policy: &impl ErrorPolicy) -> Self;

    /// Emit if the error classifies as at least `Warning`
    fn emit_warning(self, policy: &impl ErrorPolicy) -> Self;

    /// Emit if the error classifies as at least `Error`
    fn emit_error(self, policy: &impl ErrorPolicy) -> Self;

    /// Emit if the error classifies as `Fatal`
    fn emit_fatal(self, policy: &impl ErrorPolicy) -> Self;
}

fn emit_at_least<T>(result: Result<T>, policy: &impl ErrorPolicy, floor: Severity) -> Result<T> {
    if let Err(ref e) = result {
        if policy.classify(e) >= floor {
            policy.emit(e);
        }
    }
    result
}

impl<T> ResultExt<T> for Result<T> {
    fn emit_event(self, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            policy.emit(e);
        }
        self
    }

    fn emit_warning(self, policy: &impl ErrorPolicy) -> Self {
        emit_at_least(self, policy, Severity::Warning)
    }

    fn emit_error(self, policy: &impl ErrorPolicy) -> Self {
        emit_at_least(self, policy, Severity::Error)
    }

    fn emit_fatal(self, policy: &impl ErrorPolicy) -> Self {
        emit_at_least(self, policy, Severity::Fatal)
    }
}

/// Iterator helpers over `Result` for batch operations, e.g. committing many records.
///
/// - `collect_ok`: collects `Ok` items, returning the first `DbError`.
/// - `first_error`: scans and returns the first `DbError` without allocation.
/// - `cancelled`: true if any item is a user cancellation.
pub trait IterResultExt<T>: Sized {
    fn collect_ok(self) -> Result<Vec<T>>;
    fn first_error(self) -> Option<DbError>;
    fn cancelled(self) -> bool;
}

impl<I, T> IterResultExt<T> for I
where
    I: IntoIterator<Item = Result<T>>,
{
    fn collect_ok(self) -> Result<Vec<T>> {
        self.into_iter().collect()
    }

    fn first_error(self) -> Option<DbError> {
        self.into_iter().find_map(|r| r.err())
    }

    fn cancelled(self) -> bool {
        self.into_iter()
            .any(|r| matches!(r, Err(ref e) if e.is_cancellation()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{EngineDowngrade, TransactionCancel, WriteFailure};

    #[derive(Default)]
    struct Counter(AtomicUsize);

    impl ErrorPolicy for Counter {
        fn classify(&self, error: &DbError) -> Severity {
            error.severity()
        }

        fn emit(&self, _error: &DbError) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn emit_respects_severity_floor() {
        let policy = Counter::default();
        let cancel: Result<()> = Err(TransactionCancel::new("stop").into());
        let write: Result<()> = Err(WriteFailure::new("failed").into());
        let fatal: Result<()> = Err(EngineDowngrade::new(5, 4).into());

        let cancel = cancel.emit_error(&policy);
        assert_eq!(policy.0.load(Ordering::SeqCst), 0);
        let _ = cancel.emit_warning(&policy);
        assert_eq!(policy.0.load(Ordering::SeqCst), 1);

        let _ = write.emit_fatal(&policy);
        assert_eq!(policy.0.load(Ordering::SeqCst), 1);
        let _ = fatal.emit_error(&policy);
        assert_eq!(policy.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn ok_is_never_emitted() {
        let policy = Counter::default();
        let ok: Result<u32> = Ok(7);
        assert_eq!(ok.emit_event(&policy).ok(), Some(7));
        assert_eq!(policy.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn iterator_helpers() {
        let items = || -> Vec<Result<u32>> {
            vec![
                Ok(1),
                Err(WriteFailure::new("disk").into()),
                Err(TransactionCancel::new("stop").into()),
            ]
        };
        assert_eq!(
            items().first_error().and_then(|e| e.messages().map(|(p, _)| p.to_string())),
            Some("disk".to_string())
        );
        assert!(items().collect_ok().is_err());
        assert!(items().cancelled());
        let all_ok: Vec<Result<u32>> = vec![Ok(1), Ok(2)];
        assert_eq!(all_ok.collect_ok(), Ok(vec![1, 2]));
    }
}
