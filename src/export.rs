//! Domain operation: export the document
//!
//! A thin client of the runtime. Lifts the `save` primitive into a task and
//! wraps the host's raw failure diagnostic in a domain-tagged error;
//! successes pass through untouched.

use std::path::PathBuf;

use thiserror::Error;

use crate::env::save;
use crate::task::Task;

/// Failure of a document export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The host could not persist the document.
    #[error("could not save document: {0}")]
    Save(String),
}

/// Describe exporting the host's document to `destination`.
pub fn export_document(destination: impl Into<PathBuf>) -> Task<(), ExportError> {
    Task::from_effect(save(destination)).map_err(ExportError::Save)
}
