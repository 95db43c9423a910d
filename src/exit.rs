//! Entry adapter: translate a final task outcome into a process exit
//!
//! The classification is pure and lives in [`classify`]; the actual
//! process termination is isolated in [`dispatch`] so everything up to the
//! `exit` call stays testable.
//!
//! Classification contract:
//!
//! | Outcome                         | Signal            |
//! |---------------------------------|-------------------|
//! | `Success(())`                   | `Success`         |
//! | `Failure` with an exit code     | `Exit(code)`      |
//! | `Failure` with anything else    | `Fatal(diagnostic)` |
//!
//! The `Fatal` path is a last-resort safety net for programming errors;
//! expected domain failures must be converted into an explicit exit request
//! before they reach the top-level task's outcome.

use std::fmt;
use std::process;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::env::HostEnv;
use crate::outcome::Outcome;
use crate::task::Task;

/// Process exit signal derived from a top-level task's outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitSignal {
    /// Orderly success, exit code 0.
    Success,
    /// Orderly termination with an explicit exit code, propagated verbatim.
    Exit(i32),
    /// Unhandled failure: diagnostic output and non-zero termination.
    Fatal(String),
}

/// Implemented by top-level error types that carry an explicit exit-code
/// variant, so an orderly non-zero exit is distinguishable from a fatal
/// unhandled failure.
pub trait ExitRequest {
    /// The requested exit code, if this error is an explicit exit request.
    fn exit_code(&self) -> Option<i32>;
}

/// Pure: classify a top-level outcome into an exit signal.
pub fn classify<E>(outcome: Outcome<(), E>) -> ExitSignal
where
    E: ExitRequest + fmt::Display,
{
    match outcome {
        Outcome::Success(()) => ExitSignal::Success,
        Outcome::Failure(error) => match error.exit_code() {
            Some(code) => ExitSignal::Exit(code),
            None => ExitSignal::Fatal(error.to_string()),
        },
    }
}

/// Drive the top-level task to completion and classify its outcome.
pub fn run_task<E>(task: Task<(), E>, host: &mut dyn HostEnv) -> ExitSignal
where
    E: ExitRequest + fmt::Display + 'static,
{
    let mut signal = ExitSignal::Success;
    task.attempt(host, |outcome| signal = classify(outcome));
    debug!(?signal, "top-level task settled");
    signal
}

/// Terminate the process according to `signal`.
pub fn dispatch(signal: ExitSignal) -> ! {
    match signal {
        ExitSignal::Success => process::exit(0),
        ExitSignal::Exit(code) => process::exit(code),
        ExitSignal::Fatal(diagnostic) => {
            eprintln!("fatal: {diagnostic}");
            process::exit(1)
        }
    }
}
