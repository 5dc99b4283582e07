//! Error types for operation calls.
//!
//! A call through any number of wrappers surfaces at most one [`CallError`].
//! Wrappers pass failures from the operation they wrap through untouched, so
//! the error always names the operation or wrapper that actually raised it.

use std::fmt;

/// Boxed error used as the source of operation and hook failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for operation calls.
pub type Result<T> = std::result::Result<T, CallError>;

/// The point in a wrapper's call at which a hook runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Before the wrapped operation is invoked.
    Before,
    /// After the wrapped operation returned successfully.
    After,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Before => f.write_str("before"),
            Stage::After => f.write_str("after"),
        }
    }
}

/// Errors that can occur while calling an operation.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The base operation itself failed.
    #[error("{operation}() failed: {source}")]
    Operation {
        /// Name of the operation that failed.
        operation: String,
        source: BoxError,
    },

    /// A wrapper's hook failed.
    #[error("{wrapper} {stage} hook failed: {source}")]
    Hook {
        /// Name of the wrapper whose hook failed.
        wrapper: String,
        stage: Stage,
        source: BoxError,
    },
}

impl CallError {
    /// Failure raised by the operation named `operation`.
    pub fn operation(operation: impl Into<String>, source: impl Into<BoxError>) -> Self {
        CallError::Operation {
            operation: operation.into(),
            source: source.into(),
        }
    }

    /// Failure raised by a hook of the wrapper named `wrapper`.
    pub fn hook(wrapper: impl Into<String>, stage: Stage, source: impl Into<BoxError>) -> Self {
        CallError::Hook {
            wrapper: wrapper.into(),
            stage,
            source: source.into(),
        }
    }

    /// Name of the operation or wrapper that raised this error.
    pub fn origin(&self) -> &str {
        match self {
            CallError::Operation { operation, .. } => operation,
            CallError::Hook { wrapper, .. } => wrapper,
        }
    }

    /// The hook stage that failed, if this is a hook failure.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            CallError::Hook { stage, .. } => Some(*stage),
            CallError::Operation { .. } => None,
        }
    }

    /// Returns true if a wrapper hook, not the operation, failed.
    pub fn is_hook_failure(&self) -> bool {
        matches!(self, CallError::Hook { .. })
    }

    /// The underlying error message, without origin attribution.
    pub fn message(&self) -> String {
        match self {
            CallError::Operation { source, .. } | CallError::Hook { source, .. } => {
                source.to_string()
            }
        }
    }
}
