//! Error types for secparse library.

use thiserror::Error;

/// Result type alias for secparse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while classifying and rendering filings.
#[derive(Error, Debug)]
pub enum Error {
    /// The subtree was expected to hold exactly one table but holds none.
    #[error("No table found in <{tag}> element")]
    NoTableFound {
        /// Tag name of the inspected element
        tag: String,
    },

    /// The subtree was expected to hold exactly one table but holds several.
    #[error("Ambiguous table: found {count} tables in <{tag}> element")]
    AmbiguousTable {
        /// Tag name of the inspected element
        tag: String,
        /// Number of tables found
        count: usize,
    },

    /// A processing step broke the length or node identity of the sequence.
    #[error("Processing step '{step}' violated pipeline invariant: {reason}")]
    InvariantViolation {
        /// Name of the offending step
        step: String,
        /// What went wrong
        reason: String,
    },

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Check if this error comes from the single-table precondition.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::NoTableFound { .. } | Error::AmbiguousTable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoTableFound {
            tag: "div".to_string(),
        };
        assert_eq!(err.to_string(), "No table found in <div> element");

        let err = Error::AmbiguousTable {
            tag: "div".to_string(),
            count: 3,
        };
        assert_eq!(
            err.to_string(),
            "Ambiguous table: found 3 tables in <div> element"
        );
    }

    #[test]
    fn test_is_structural() {
        assert!(Error::NoTableFound { tag: "p".into() }.is_structural());
        assert!(!Error::Render("boom".into()).is_structural());
        assert!(!Error::InvariantViolation {
            step: "x".into(),
            reason: "y".into(),
        }
        .is_structural());
    }
}
