//! Status code registry
//!
//! Codes are banded numerically by subsystem:
//! - 0        success
//! - 100-199  general errors
//! - 200-299  storage errors
//! - 300-399  query executor errors
//! - 400-499  query optimizer errors
//! - 500-599  SQL errors
//!
//! The registry is written once, in the `status_codes!` invocation at the
//! bottom of this file. The enum, the accessor tables, the reverse lookup,
//! and the per-code `Status` factories are all generated from that single
//! token list, so they cannot drift apart. New codes are added by appending
//! a line to the invocation; a duplicate numeric value fails the build.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::status::Status;

macro_rules! status_codes {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident = $numeric:literal, $symbol:literal, $default:literal $(, $factory:ident)?;
        )+
    ) => {
        /// Outcome code identifying the kind of result.
        ///
        /// `Ok` is the unique success code; every other code names a
        /// distinct failure category. Discriminants are the wire-visible
        /// numeric values.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[repr(u16)]
        pub enum StatusCode {
            $(
                $(#[$meta])*
                $variant = $numeric,
            )+
        }

        impl StatusCode {
            /// All registered codes, in registry order.
            pub const ALL: &'static [StatusCode] = &[
                $(StatusCode::$variant,)+
            ];

            /// Returns the numeric value of this code.
            pub fn numeric(self) -> u16 {
                self as u16
            }

            /// Returns the symbolic name rendered in the textual format.
            pub fn name(self) -> &'static str {
                match self {
                    $(StatusCode::$variant => $symbol,)+
                }
            }

            /// Returns the message used when a factory is given an empty one.
            pub fn default_message(self) -> &'static str {
                match self {
                    $(StatusCode::$variant => $default,)+
                }
            }

            /// Looks up a code by numeric value, `None` if unregistered.
            pub fn from_numeric(value: u16) -> Option<StatusCode> {
                match value {
                    $($numeric => Some(StatusCode::$variant),)+
                    _ => None,
                }
            }
        }

        impl Status {
            $($(
                #[doc = concat!("Builds a `", $symbol, "` status.")]
                #[doc = ""]
                #[doc = concat!("An empty message is replaced with the registry default, `\"", $default, "\"`.")]
                pub fn $factory(message: impl Into<String>) -> Status {
                    Status::with_code(StatusCode::$variant, message)
                }
            )?)+
        }
    };
}

status_codes! {
    /// Success
    Ok = 0, "kOk", "OK";
    /// Generic failure
    Error = 100, "kError", "Error", error;
    /// Invalid argument or state
    Invalid = 101, "kInvalid", "Invalid", invalid;
    /// Operation not implemented
    NotImplemented = 102, "kNotImplemented", "NotImplemented", not_implemented;
    /// Storage subsystem failure
    StorageError = 200, "kStorageError", "StorageError", storage_error;
    /// Query executor failure
    QueryExecutorError = 300, "kQueryExecutorError", "QueryExecutorError", query_executor_error;
    /// Query optimizer failure
    QueryOptimizerError = 400, "kQueryOptimizerError", "QueryOptimizerError", query_optimizer_error;
    /// SQL layer failure
    SqlError = 500, "kSqlError", "SqlError", sql_error;
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
