use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The entity name is not a non-empty alphabetic token.
    ///
    /// Produced only at the request-resolution boundary; the engine itself
    /// never re-validates.
    #[error("invalid entity name '{name}': use letters only (e.g. Order, Product)")]
    InvalidEntityName { name: String },

    /// A dedicated generator failed while building its tree.
    ///
    /// The orchestrator recovers from this by substituting the classic
    /// generator; it only surfaces if the fallback fails too.
    #[error("generator for style '{style}' failed: {reason}")]
    GeneratorFailed { style: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidEntityName { name } => vec![
                format!("'{}' is not a valid entity name", name),
                "Use only letters: Order, Product, InvoiceLine".into(),
            ],
            Self::GeneratorFailed { style, .. } => vec![
                format!("The '{}' generator could not build its structure", style),
                "Try: strukt list to see available styles".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidEntityName { .. } => ErrorCategory::Validation,
            Self::GeneratorFailed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
