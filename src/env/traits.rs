//! Host boundary trait definitions
//!
//! [`HostOp`] enumerates the atomic operations a descriptor can ask the
//! hosting process to perform; [`HostEnv`] is the contract the host
//! fulfills to execute them. The runtime treats both as opaque: the content
//! being persisted and its meaning belong entirely to the host
//! implementation.

use std::path::{Path, PathBuf};

use crate::outcome::Outcome;

/// Payload of a primitive descriptor: one atomic host operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOp {
    /// Persist the host's associated content to `destination`.
    Save { destination: PathBuf },
}

/// The contract the hosting process fulfills to execute primitive effects.
///
/// Execution is synchronous and single-threaded from the runtime's point of
/// view; the runtime provides no pooling, retry, or backpressure around the
/// host. Takes `&mut self` because performing an operation may consume or
/// alter host-owned state.
pub trait HostEnv {
    /// Attempt to persist the associated content to `destination`.
    ///
    /// On success the outcome carries an empty value; on failure it carries
    /// a diagnostic string.
    fn save(&mut self, destination: &Path) -> Outcome<(), String>;
}
