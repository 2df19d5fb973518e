//! Error types for sphere data preparation.
//!
//! [`SphereError`] reports an input token that is not a number in the expected
//! notation. The coordinate transforms themselves are total and never fail.
//!
//! ```
//! use sphere_core::{SphereError, SphereResult};
//!
//! fn parse_width(token: &str) -> SphereResult<f64> {
//!     token
//!         .trim()
//!         .parse()
//!         .map_err(|_| SphereError::invalid_number(token, "decimal"))
//! }
//!
//! assert!(parse_width("1.0").is_ok());
//! assert!(parse_width("wide").is_err());
//! ```

use thiserror::Error;

/// Error type for angle parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SphereError {
    /// Token could not be read as a number in the expected notation.
    #[error("Cannot parse '{value}' as {expected}")]
    InvalidNumber {
        value: String,
        expected: &'static str,
    },
}

/// Convenience alias for `Result<T, SphereError>`.
pub type SphereResult<T> = Result<T, SphereError>;

impl SphereError {
    /// Creates an [`InvalidNumber`](Self::InvalidNumber) error.
    pub fn invalid_number(value: &str, expected: &'static str) -> Self {
        Self::InvalidNumber {
            value: value.to_string(),
            expected,
        }
    }

    /// The offending input token, if the error came from parsing.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::InvalidNumber { value, .. } => Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_message() {
        let err = SphereError::invalid_number("abc", "decimal degrees");
        assert_eq!(err.to_string(), "Cannot parse 'abc' as decimal degrees");
        assert_eq!(err.value(), Some("abc"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<SphereError>();
        _assert_sync::<SphereError>();
    }
}
