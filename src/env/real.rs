//! Production host implementation
//!
//! Owns the document being generated and performs actual filesystem I/O
//! when the driver reaches a save primitive.

use std::path::Path;

use tracing::debug;

use super::traits::HostEnv;
use crate::document::Document;
use crate::outcome::Outcome;

/// Host that persists an owned [`Document`] to disk.
#[derive(Debug)]
pub struct DocumentEnv {
    document: Document,
}

impl DocumentEnv {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl HostEnv for DocumentEnv {
    fn save(&mut self, destination: &Path) -> Outcome<(), String> {
        debug!(destination = %destination.display(), "saving document");
        match self.document.persist(destination) {
            Ok(()) => Outcome::Success(()),
            Err(err) => Outcome::Failure(format!(
                "write to {} failed: {err}",
                destination.display()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_env() -> DocumentEnv {
        DocumentEnv::new(Document::hello_world().expect("document should build"))
    }

    #[test]
    fn test_save_writes_document_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("out.pdf");

        let mut env = test_env();
        assert!(env.save(&destination).is_success());
        assert!(destination.exists());
    }

    #[test]
    fn test_save_reports_diagnostic_on_failure() {
        let mut env = test_env();
        let destination = Path::new("/nonexistent-ebb-dir/out.pdf");

        match env.save(destination) {
            Outcome::Failure(diagnostic) => {
                assert!(diagnostic.contains("failed"));
                assert!(diagnostic.contains("nonexistent-ebb-dir"));
            }
            Outcome::Success(()) => panic!("save into a missing directory should fail"),
        }
    }
}
