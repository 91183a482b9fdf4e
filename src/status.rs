//! Status: an immutable outcome value
//!
//! A `Status` pairs a [`StatusCode`] with a human-readable message. It is a
//! plain value: copied and moved freely, immutable after construction, and
//! never an operation that can itself fail.
//!
//! Construction goes through the per-code factories generated by the
//! registry (`Status::error`, `Status::storage_error`, ...) or through
//! `Status::new()` for success. There is no public (code, message)
//! constructor, so the registry's default-message substitution cannot be
//! bypassed: an empty message always becomes the code's default, and an
//! explicit non-empty message always wins.
//!
//! The textual rendering is stable and parseable:
//!
//! ```text
//! [<numeric-code>-<symbolic-name>]{<message>}
//! ```
//!
//! e.g. `[100-kError]{Something went wrong}`. This is the format embedded in
//! logs and diagnostics and must not change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::code::StatusCode;

/// Outcome of an operation: a banded code plus a message.
///
/// Defaults to success (`Ok` / `"OK"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    code: StatusCode,
    message: String,
}

impl Status {
    /// Internal constructor shared by the generated factories.
    ///
    /// Empty messages take the registry default for the code.
    pub(crate) fn with_code(code: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            code.default_message().to_string()
        } else {
            message
        };
        Self { code, message }
    }

    /// Creates a success status: code `Ok`, message `"OK"`.
    pub fn new() -> Self {
        Self::with_code(StatusCode::Ok, "")
    }

    /// Returns true iff the code is `Ok`.
    pub fn ok(&self) -> bool {
        self.code == StatusCode::Ok
    }

    /// Returns the stored code.
    pub fn code(&self) -> StatusCode {
        self.code
    }

    /// Returns the stored message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}-{}]{{{}}}",
            self.code.numeric(),
            self.code.name(),
            self.message
        )
    }
}

impl std::error::Error for Status {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ok() {
        let status = Status::new();
        assert!(status.ok());
        assert_eq!(status.code(), StatusCode::Ok);
        assert_eq!(status.message(), "OK");
        assert_eq!(Status::default(), status);
    }

    #[test]
    fn test_factories_substitute_default_message() {
        assert_eq!(Status::error("").message(), "Error");
        assert_eq!(Status::invalid("").message(), "Invalid");
        assert_eq!(Status::not_implemented("").message(), "NotImplemented");
        assert_eq!(Status::storage_error("").message(), "StorageError");
        assert_eq!(Status::query_executor_error("").message(), "QueryExecutorError");
        assert_eq!(Status::query_optimizer_error("").message(), "QueryOptimizerError");
        assert_eq!(Status::sql_error("").message(), "SqlError");
    }

    #[test]
    fn test_explicit_message_overrides_default() {
        let status = Status::invalid("field `name` must not be empty");
        assert_eq!(status.code(), StatusCode::Invalid);
        assert_eq!(status.message(), "field `name` must not be empty");
    }

    #[test]
    fn test_factories_are_not_ok() {
        assert!(!Status::error("").ok());
        assert!(!Status::sql_error("").ok());
    }

    #[test]
    fn test_display_format_is_exact() {
        assert_eq!(Status::error("X").to_string(), "[100-kError]{X}");
        assert_eq!(Status::storage_error("Y").to_string(), "[200-kStorageError]{Y}");
        assert_eq!(Status::new().to_string(), "[0-kOk]{OK}");
        assert_eq!(
            Status::query_optimizer_error("").to_string(),
            "[400-kQueryOptimizerError]{QueryOptimizerError}"
        );
    }

    #[test]
    fn test_clone_preserves_code_and_message() {
        let original = Status::query_executor_error("scan aborted");
        let copy = original.clone();
        assert_eq!(copy, original);
        assert_eq!(copy.code(), StatusCode::QueryExecutorError);
        assert_eq!(copy.message(), "scan aborted");
    }

    #[test]
    fn test_status_is_an_error_type() {
        let boxed: Box<dyn std::error::Error> = Box::new(Status::error("Bad"));
        assert_eq!(boxed.to_string(), "[100-kError]{Bad}");
    }

    #[test]
    fn test_serde_roundtrip() {
        let status = Status::storage_error("disk gone");
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#"{"code":"StorageError","message":"disk gone"}"#);
        let back: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }
}
