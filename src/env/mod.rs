//! Host-effect boundary
//!
//! The single point where the runtime meets the outside world. This module
//! provides:
//!
//! - **Traits**: [`HostEnv`], the contract the hosting process fulfills,
//!   and [`HostOp`], the payload of a primitive descriptor
//! - **Real implementation**: [`DocumentEnv`], which owns the document and
//!   writes it to disk
//! - **Mock implementation**: [`MockHostEnv`], in-memory and scriptable,
//!   for testing without I/O
//! - **Primitive constructors**: [`save`], the one primitive effect this
//!   runtime defines
//!
//! ```
//! use ebb::env::{save, MockHostEnv};
//! use ebb::outcome::Outcome;
//! use ebb::task::Task;
//!
//! let mut host = MockHostEnv::failing("disk full");
//! Task::from_effect(save("out.pdf")).attempt(&mut host, |outcome| {
//!     assert_eq!(outcome, Outcome::Failure("disk full".to_string()));
//! });
//! ```

mod mock;
mod real;
mod traits;

pub use mock::MockHostEnv;
pub use real::DocumentEnv;
pub use traits::{HostEnv, HostOp};

use std::path::PathBuf;

use crate::effect::{primitive, Effect};
use crate::outcome::Outcome;

/// Describe persisting the host's content to `destination`.
///
/// Building the descriptor performs nothing; the save happens only when the
/// descriptor is driven, and its outcome carries either an empty success or
/// a diagnostic string from the host.
pub fn save(destination: impl Into<PathBuf>) -> Effect<Outcome<(), String>> {
    primitive(HostOp::Save {
        destination: destination.into(),
    })
}
