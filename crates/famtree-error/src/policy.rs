use super::{DbError, Severity};

/// A policy for classifying and emitting database errors.
///
/// The database layer never logs or shows dialogs itself; it returns [`crate::Result`] and lets
/// the application install an `ErrorPolicy` that decides how an error reaches the user:
/// - tracing logs
/// - a dialog in the UI
/// - a miette report on the terminal
///
/// Example
/// ```rust,ignore
/// use famtree_error::{DbError, ErrorPolicy, Render, Severity};
///
/// struct DialogPolicy;
/// impl ErrorPolicy for DialogPolicy {
///     fn classify(&self, e: &DbError) -> Severity { e.severity() }
///     fn emit(&self, e: &DbError) { show_dialog(&e.render(&my_catalog())); }
/// }
/// ```
pub trait ErrorPolicy: Send + Sync {
    /// Classify the error's severity
    fn classify(&self, error: &DbError) -> Severity;

    /// Hand the error to its consumer (log, dialog, report)
    fn emit(&self, error: &DbError);
}

/// A no-operation policy that does nothing
#[derive(Debug, Clone, Default)]
pub struct NoopPolicy;

impl ErrorPolicy for NoopPolicy {
    fn classify(&self, error: &DbError) -> Severity {
        error.severity()
    }

    fn emit(&self, _error: &DbError) {}
}

/// Emits each error as a `tracing` event carrying its kind code and English text.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Default)]
pub struct TracingPolicy;

#[cfg(feature = "tracing")]
impl ErrorPolicy for TracingPolicy {
    fn classify(&self, error: &DbError) -> Severity {
        error.severity()
    }

    fn emit(&self, error: &DbError) {
        use tracing::{Level, event};

        let kind = error.kind().code();
        match error.severity() {
            Severity::Warning => event!(Level::WARN, kind = %kind, error = %error),
            Severity::Error | Severity::Fatal => {
                event!(Level::ERROR, kind = %kind, error = %error)
            }
        }
    }
}

#[cfg(feature = "diagnostic")]
#[derive(Debug, Clone, Default)]
pub struct MiettePolicy;

#[cfg(feature = "diagnostic")]
impl ErrorPolicy for MiettePolicy {
    fn classify(&self, error: &DbError) -> Severity {
        error.severity()
    }

    fn emit(&self, error: &DbError) {
        let report = miette::Report::new(error.clone());
        eprintln!("{report:?}");
    }
}

/// A composite policy that delegates to multiple policies.
///
/// Behavior
/// - classify: the highest severity among the error's own and every inner policy's.
/// - emit: delegates to all inner policies in insertion order.
///
/// Example
/// ```rust,ignore
/// use famtree_error::policy::{CombinedPolicy, NoopPolicy, TracingPolicy};
/// let policy = CombinedPolicy::new()
///     .push(TracingPolicy)
///     .push(DialogPolicy::new(catalog));
/// ```
#[derive(Default)]
pub struct CombinedPolicy {
    policies: Vec<Box<dyn ErrorPolicy>>,
}

impl CombinedPolicy {
    pub fn new() -> Self {
        Self { policies: Vec::new() }
    }

    pub fn from_vec(policies: Vec<Box<dyn ErrorPolicy>>) -> Self {
        Self { policies }
    }

    /// Add a policy by value (boxed internally). Consumes and returns Self for builder-style chaining.
    pub fn push<P: ErrorPolicy + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Box::new(policy));
        self
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl ErrorPolicy for CombinedPolicy {
    fn classify(&self, error: &DbError) -> Severity {
        self.policies
            .iter()
            .map(|p| p.classify(error))
            .fold(error.severity(), Severity::max)
    }

    fn emit(&self, error: &DbError) {
        for p in &self.policies {
            p.emit(error);
        }
    }
}
