//! Two-variant result of a driven effect or task
//!
//! An [`Outcome`] is either `Success` with a value or `Failure` with an
//! error value. There is no pending or cancelled state: execution is
//! synchronous relative to the driver, so by the time an outcome exists the
//! work behind it is finished.
//!
//! `Outcome` is deliberately a distinct type rather than an alias of
//! [`std::result::Result`]: outcomes are ordinary *values* flowing through
//! effect combinators, and keeping them apart from the crate's own control
//! flow avoids accidental `?` on a driven result.

use serde::{Deserialize, Serialize};

/// Result of driving an effect or task to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed with an error value.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Apply a pure function to the success value, leaving failures intact.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Apply a pure function to the error value, leaving successes intact.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Convert into a standard `Result` at the edge of the runtime.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}
