//! StatusOr: a value or the Status that prevented it
//!
//! `StatusOr<T>` holds exactly one of three mutually exclusive states:
//!
//! - **Void**: no value and no status. Only produced by default
//!   construction or by draining (`take`, `take_value`, `take_status`).
//!   Never the intended result of an operation; it exists so drained
//!   containers stay valid and reusable through reassignment.
//! - **Failed**: a [`Status`] describing why no value was produced.
//! - **Value**: a successfully computed `T`.
//!
//! State changes only happen by whole-value replacement (construction,
//! reassignment, draining); the live state is never mutated field-by-field.
//!
//! Callers must check [`ok()`](StatusOr::ok) before touching the value: the
//! `value()` family panics on a non-ok container, printing the stringified
//! status. That is a fail-fast contract for programmer misuse, not a
//! recoverable error.
//!
//! `T` must not itself be `Status` or a `StatusOr` (the failure channel does
//! not nest), and must not be a reference type.

use std::mem;

use crate::status::Status;

/// Container for the outcome of a fallible computation of `T`.
///
/// Functions that can fail return `StatusOr<T>`; a bare `Status` converts
/// into the failed state, so `return status.into();` works at any call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOr<T> {
    inner: Inner<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Inner<T> {
    Void,
    Failed(Status),
    Value(T),
}

impl<T> StatusOr<T> {
    /// Creates a successful container.
    ///
    /// Accepts anything convertible into `T`, so an `i32` result can feed a
    /// `StatusOr<f64>` directly.
    pub fn new(value: impl Into<T>) -> Self {
        Self {
            inner: Inner::Value(value.into()),
        }
    }

    /// Returns true iff a value is present.
    pub fn ok(&self) -> bool {
        matches!(self.inner, Inner::Value(_))
    }

    /// Returns the status of this container.
    ///
    /// Failed containers return their stored status; successful ones
    /// synthesize `Ok`. A void container reports a generic error rather
    /// than crashing, since draining is not a misuse.
    pub fn status(&self) -> Status {
        match &self.inner {
            Inner::Void => Status::error("StatusOr is void"),
            Inner::Failed(status) => status.clone(),
            Inner::Value(_) => Status::new(),
        }
    }

    /// Moves the status out, leaving a failed container void.
    ///
    /// Successful and void containers are left untouched and report the
    /// same status as [`status()`](StatusOr::status).
    pub fn take_status(&mut self) -> Status {
        if matches!(self.inner, Inner::Failed(_)) {
            match mem::replace(&mut self.inner, Inner::Void) {
                Inner::Failed(status) => status,
                _ => unreachable!(),
            }
        } else {
            self.status()
        }
    }

    /// Returns a reference to the contained value.
    ///
    /// # Panics
    ///
    /// Panics if no value is present. Check [`ok()`](StatusOr::ok) first.
    pub fn value(&self) -> &T {
        match &self.inner {
            Inner::Value(value) => value,
            _ => panic!("StatusOr has no value: {}", self.status()),
        }
    }

    /// Returns a mutable reference to the contained value.
    ///
    /// # Panics
    ///
    /// Panics if no value is present.
    pub fn value_mut(&mut self) -> &mut T {
        if !self.ok() {
            panic!("StatusOr has no value: {}", self.status());
        }
        match &mut self.inner {
            Inner::Value(value) => value,
            _ => unreachable!(),
        }
    }

    /// Moves the value out, leaving the container void.
    ///
    /// # Panics
    ///
    /// Panics if no value is present.
    pub fn take_value(&mut self) -> T {
        if !self.ok() {
            panic!("StatusOr has no value: {}", self.status());
        }
        match mem::replace(&mut self.inner, Inner::Void) {
            Inner::Value(value) => value,
            _ => unreachable!(),
        }
    }

    /// Consumes the container and returns the value.
    ///
    /// # Panics
    ///
    /// Panics if no value is present.
    pub fn into_value(self) -> T {
        match self.inner {
            Inner::Value(value) => value,
            Inner::Failed(status) => panic!("StatusOr has no value: {}", status),
            Inner::Void => panic!("StatusOr has no value: {}", Status::error("StatusOr is void")),
        }
    }

    /// Moves the whole container out, leaving this one void.
    pub fn take(&mut self) -> StatusOr<T> {
        mem::take(self)
    }

    /// Converts to a `StatusOr<U>`, preserving the state.
    ///
    /// A value is converted through `Into`, a status is carried over as-is,
    /// void stays void.
    pub fn convert<U>(self) -> StatusOr<U>
    where
        T: Into<U>,
    {
        StatusOr {
            inner: match self.inner {
                Inner::Void => Inner::Void,
                Inner::Failed(status) => Inner::Failed(status),
                Inner::Value(value) => Inner::Value(value.into()),
            },
        }
    }
}

impl<T> Default for StatusOr<T> {
    /// The void state. Transient only; never return it as a result.
    fn default() -> Self {
        Self { inner: Inner::Void }
    }
}

impl<T> From<Status> for StatusOr<T> {
    /// Wraps a status as the failed state.
    fn from(status: Status) -> Self {
        Self {
            inner: Inner::Failed(status),
        }
    }
}
