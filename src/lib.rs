//! statusor - band-coded Status and StatusOr result types
//!
//! The explicit error-propagation core of a database engine: a [`Status`]
//! outcome value whose codes are banded by subsystem (general, storage,
//! query executor, query optimizer, SQL), and a [`StatusOr`] container
//! holding either a computed value or the `Status` that prevented it.
//!
//! ```
//! use statusor::{Status, StatusOr};
//!
//! fn parse_limit(raw: &str) -> StatusOr<u64> {
//!     match raw.parse::<u64>() {
//!         Ok(limit) => StatusOr::new(limit),
//!         Err(e) => Status::sql_error(format!("bad LIMIT: {}", e)).into(),
//!     }
//! }
//!
//! let result = parse_limit("10");
//! assert!(result.ok());
//! assert_eq!(*result.value(), 10);
//!
//! let result = parse_limit("ten");
//! assert!(!result.ok());
//! assert_eq!(result.status().to_string(), "[500-kSqlError]{bad LIMIT: invalid digit found in string}");
//! ```

pub mod code;
pub mod status;
pub mod status_or;

pub use code::StatusCode;
pub use status::Status;
pub use status_or::StatusOr;
