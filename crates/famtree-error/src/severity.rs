//! Coarse-grained classification for programmatic handling of errors.
//!
//! Typical mappings:
//! - Warning: the operation stopped, but the tree is intact and usable
//! - Error: the user must act (upgrade, retry a write) before continuing
//! - Fatal: this build cannot open the tree at all
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
    Fatal,
}

#[cfg(test)]
mod tests {
    use super::Severity;

    #[test]
    fn ordered_by_gravity() {
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
        assert_eq!(
            [Severity::Error, Severity::Fatal, Severity::Warning].iter().max(),
            Some(&Severity::Fatal)
        );
    }
}
