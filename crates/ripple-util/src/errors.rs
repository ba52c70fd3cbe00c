use miette::Diagnostic;
use thiserror::Error;

/// A single validation problem, tagged with the subsystem that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Where the problem was detected (e.g. `"Validation"`).
    pub provenance: String,
    /// Human-readable description naming the offending package.
    pub message: String,
}

impl Problem {
    pub fn new(provenance: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            provenance: provenance.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.provenance, self.message)
    }
}

/// Unified error type for all ripple operations.
#[derive(Debug, Error, Diagnostic)]
pub enum RippleError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The solution failed consistency validation. Carries the complete
    /// ordered list of problems, never just the first.
    #[error("solution validation failed with {} problem(s)", .problems.len())]
    #[diagnostic(help("Two or more projects disagree on a package version; run `ripple list` to inspect the aggregate"))]
    Validation { problems: Vec<Problem> },

    /// An update, float, or find targeted a name absent from the collection.
    #[error("dependency not found: {name}")]
    DependencyNotFound { name: String },

    /// Reading or writing a solution's on-disk representation failed.
    #[error("storage error: {message}")]
    Storage { message: String },

    /// A remote feed collaborator reported a failure.
    #[error("feed error: {message}")]
    Feed { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

impl RippleError {
    /// Build a `Storage` error from any displayable cause.
    pub fn storage(message: impl std::fmt::Display) -> Self {
        Self::Storage {
            message: message.to_string(),
        }
    }
}

/// Convenience alias for `miette::Result<T>`.
pub type RippleResult<T> = miette::Result<T>;
