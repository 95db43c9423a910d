//! Mock host implementation for testing
//!
//! Performs no I/O: every operation is recorded in memory, and the outcome
//! of a save can be scripted. The operation log is what lets tests assert
//! that composing descriptors is inert and that driving performs exactly
//! the expected operations.

use std::path::{Path, PathBuf};

use super::traits::HostEnv;
use crate::outcome::Outcome;

/// In-memory host that records operations and returns scripted outcomes.
#[derive(Debug, Default)]
pub struct MockHostEnv {
    saves: Vec<PathBuf>,
    failure: Option<String>,
}

impl MockHostEnv {
    /// Host whose saves all succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose saves all fail with the given diagnostic.
    pub fn failing(diagnostic: impl Into<String>) -> Self {
        Self {
            saves: Vec::new(),
            failure: Some(diagnostic.into()),
        }
    }

    /// Destinations passed to `save`, in execution order.
    pub fn saved(&self) -> &[PathBuf] {
        &self.saves
    }

    /// Total number of operations performed against this host.
    pub fn operations(&self) -> usize {
        self.saves.len()
    }
}

impl HostEnv for MockHostEnv {
    fn save(&mut self, destination: &Path) -> Outcome<(), String> {
        self.saves.push(destination.to_path_buf());
        match &self.failure {
            Some(diagnostic) => Outcome::Failure(diagnostic.clone()),
            None => Outcome::Success(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_destinations_in_order() {
        let mut env = MockHostEnv::new();
        assert!(env.save(Path::new("a.pdf")).is_success());
        assert!(env.save(Path::new("b.pdf")).is_success());

        assert_eq!(env.operations(), 2);
        assert_eq!(env.saved(), [PathBuf::from("a.pdf"), PathBuf::from("b.pdf")]);
    }

    #[test]
    fn test_scripted_failure_is_returned_verbatim() {
        let mut env = MockHostEnv::failing("disk full");
        assert_eq!(
            env.save(Path::new("a.pdf")),
            Outcome::Failure("disk full".to_string())
        );
        // The failed operation is still recorded.
        assert_eq!(env.operations(), 1);
    }
}
