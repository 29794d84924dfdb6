//! Error types for feriados-rs.
//!
//! Every operation family in the workspace reports failures through the
//! single [`Error`] enum below. The variants are the complete client-facing
//! taxonomy: malformed input, absence, policy refusal, and storage failure.
//! Validation failures are detected and returned before any repository
//! access; storage failures carry the underlying cause as text and are never
//! retried or silently swallowed.

use thiserror::Error;

/// The top-level error type used throughout feriados-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Malformed date or jurisdiction code. Always a caller mistake; retrying
    /// the same request can never succeed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Nothing matched the query, be it a holiday record or a state the
    /// hierarchy knows. Distinct from [`Error::InvalidInput`]: the request
    /// was well-formed, there was simply nothing there.
    #[error("not found")]
    NotFound,

    /// The request was well-formed and targets a real record, but policy
    /// disallows the action (national immutability, type mismatch).
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Storage-layer failure, with the underlying cause preserved as text.
    #[error("repository error: {0}")]
    Repository(String),
}

/// Shorthand `Result` type used throughout feriados-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Guard an input-validation condition.
///
/// Returns `Err(Error::InvalidInput(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use feriados_core::ensure_input;
/// fn two_digits(code: &str) -> feriados_core::Result<&str> {
///     ensure_input!(code.len() == 2, "code {code:?} must have two digits");
///     Ok(code)
/// }
/// assert!(two_digits("35").is_ok());
/// assert!(two_digits("355").is_err());
/// ```
#[macro_export]
macro_rules! ensure_input {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidInput(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::InvalidInput("bad code".into()).to_string(),
            "invalid input: bad code"
        );
        assert_eq!(Error::NotFound.to_string(), "not found");
        assert_eq!(
            Error::Forbidden("incompatible types".into()).to_string(),
            "forbidden: incompatible types"
        );
        assert_eq!(
            Error::Repository("connection reset".into()).to_string(),
            "repository error: connection reset"
        );
    }

    #[test]
    fn ensure_input_short_circuits() {
        fn positive(n: i32) -> crate::Result<i32> {
            ensure_input!(n > 0, "n must be positive, got {n}");
            Ok(n)
        }
        assert_eq!(positive(3), Ok(3));
        assert_eq!(
            positive(-1),
            Err(Error::InvalidInput("n must be positive, got -1".into()))
        );
    }
}
