//! Effect wrapper with a typed error channel
//!
//! A [`Task`] is an effect descriptor whose eventual result is an
//! [`Outcome`] over a success value and a structured error type. The one
//! piece of policy this layer adds over raw effect sequencing is
//! short-circuiting: chaining stops at the first failure, and the failure
//! propagates unchanged.
//!
//! [`Task::attempt`] is the single entry point by which any task executes.
//! The caller that constructs a task owns it exclusively until it passes it
//! to `attempt`, which consumes it; a task is never driven twice.

use crate::effect::{always, Effect};
use crate::env::HostEnv;
use crate::outcome::Outcome;

/// An effect whose eventual result is a success/failure outcome.
pub struct Task<T, E> {
    effect: Effect<Outcome<T, E>>,
}

impl<T: 'static, E: 'static> Task<T, E> {
    /// Task that immediately succeeds with `value`. No host interaction.
    pub fn ok(value: T) -> Self {
        Self::from_effect(always(Outcome::Success(value)))
    }

    /// Task that immediately fails with `error`. No host interaction.
    pub fn err(error: E) -> Self {
        Self::from_effect(always(Outcome::Failure(error)))
    }

    /// Lift a raw effect whose result is already an outcome into the task
    /// type. A pure re-tagging; no behavior change.
    pub fn from_effect(effect: Effect<Outcome<T, E>>) -> Self {
        Self { effect }
    }

    /// Apply a pure function to the success value.
    pub fn map<U: 'static>(self, f: impl FnOnce(T) -> U + 'static) -> Task<U, E> {
        Task::from_effect(self.effect.map(|outcome| outcome.map(f)))
    }

    /// Apply a pure function to the error value.
    pub fn map_err<F: 'static>(self, f: impl FnOnce(E) -> F + 'static) -> Task<T, F> {
        Task::from_effect(self.effect.map(|outcome| outcome.map_err(f)))
    }

    /// Run this task, then build the next task from its success value.
    ///
    /// Short-circuits: if this task fails, `k` is never invoked and the
    /// failure propagates unchanged.
    pub fn and_then<U: 'static>(
        self,
        k: impl FnOnce(T) -> Task<U, E> + 'static,
    ) -> Task<U, E> {
        Task::from_effect(self.effect.after(|outcome| match outcome {
            Outcome::Success(value) => k(value).effect,
            Outcome::Failure(error) => always(Outcome::Failure(error)),
        }))
    }

    /// Run this task, then build a recovery task from its error value.
    ///
    /// The error-channel counterpart of [`Task::and_then`]: if this task
    /// succeeds, `k` is never invoked and the success propagates unchanged.
    pub fn or_else<F: 'static>(
        self,
        k: impl FnOnce(E) -> Task<T, F> + 'static,
    ) -> Task<T, F> {
        Task::from_effect(self.effect.after(|outcome| match outcome {
            Outcome::Success(value) => always(Outcome::Success(value)),
            Outcome::Failure(error) => k(error).effect,
        }))
    }

    /// Drive this task to completion and hand the final outcome to
    /// `callback`, which is invoked exactly once.
    ///
    /// This is the only operation that crosses the host boundary: `attempt`
    /// returns only after the entire composed descriptor tree has been
    /// fully driven.
    pub fn attempt(self, host: &mut dyn HostEnv, callback: impl FnOnce(Outcome<T, E>)) {
        callback(self.effect.run(host));
    }
}
