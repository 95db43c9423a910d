//! # Ebb
//!
//! A minimal effect/task runtime. Deferred host operations are described as
//! inert values, composed with pure combinators, and driven to completion at
//! a single well-defined boundary. Building a descriptor never performs I/O;
//! only [`task::Task::attempt`] crosses the host boundary.
//!
//! ```
//! use ebb::env::MockHostEnv;
//! use ebb::export::export_document;
//! use ebb::outcome::Outcome;
//!
//! let mut host = MockHostEnv::new();
//! export_document("out.pdf").attempt(&mut host, |outcome| {
//!     assert_eq!(outcome, Outcome::Success(()));
//! });
//! ```
//!
//! ## Modules
//!
//! - `document` - PDF document builder used by the demo binary
//! - `effect` - Effect descriptors and their combinators (the pure core)
//! - `env` - Host-effect boundary: trait plus production and mock hosts
//! - `exit` - Entry adapter translating a final outcome into a process exit
//! - `export` - Domain operation persisting a document through the runtime
//! - `outcome` - Two-variant result produced by driven tasks
//! - `task` - Effect wrapper with a typed error channel and `attempt`

pub mod document;
pub mod effect;
pub mod env;
pub mod exit;
pub mod export;
pub mod outcome;
pub mod task;
