//! Error types for the sequence operations.

use thiserror::Error;

/// Errors returned by the sequence operations.
///
/// All errors are raised at call time, before any element of the source is
/// pulled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A required argument was `None`.
    #[error("argument `{argument}` must not be missing")]
    InvalidArgument { argument: &'static str },
}

impl SequenceError {
    pub(crate) fn missing(argument: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(argument, "rejected call with missing argument");

        SequenceError::InvalidArgument { argument }
    }

    /// Returns the name of the argument that caused the error.
    pub fn argument(&self) -> &'static str {
        match self {
            SequenceError::InvalidArgument { argument } => argument,
        }
    }
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let err = SequenceError::missing("source");
        assert_eq!(err.to_string(), "argument `source` must not be missing");
        assert_eq!(err.argument(), "source");
    }
}
