//! Precondition violation errors.

use thiserror::Error;

/// Raised when a required argument is absent.
///
/// This signals a programming error in the caller and is never turned into
/// an `Either::Failure`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PreconditionViolation {
    /// A function-valued argument was absent
    #[error("{operation}: function argument is absent")]
    MissingFunction { operation: &'static str },

    /// A non-function argument was absent
    #[error("{operation}: required argument `{argument}` is absent")]
    MissingArgument {
        operation: &'static str,
        argument: &'static str,
    },
}

impl PreconditionViolation {
    /// Name of the operation that rejected its arguments.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::MissingFunction { operation } | Self::MissingArgument { operation, .. } => {
                *operation
            }
        }
    }
}
