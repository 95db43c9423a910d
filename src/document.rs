//! PDF document builder
//!
//! Builds the one-page document the demo binary persists. The runtime core
//! never looks inside: from its point of view the document is opaque host
//! content that a save primitive writes out.

use std::path::Path;

use anyhow::{Context, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, Stream};

/// A PDF document ready to be persisted.
#[derive(Debug)]
pub struct Document {
    inner: lopdf::Document,
}

impl Document {
    /// Build a single-page document with "Hello World!" set in Courier.
    pub fn hello_world() -> Result<Self> {
        let mut doc = lopdf::Document::with_version("1.5");
        // The page tree id is allocated up front so the page can name its
        // parent before the tree itself is inserted.
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        // PDF text coordinates have their origin at the bottom of the page.
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 48.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal("Hello World!")]),
                Operation::new("ET", vec![]),
            ],
        };
        let encoded = content
            .encode()
            .context("failed to encode page content stream")?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            // A4 media box.
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        Ok(Self { inner: doc })
    }

    /// Compress and write the document to `destination`.
    pub fn persist(&mut self, destination: &Path) -> Result<(), lopdf::Error> {
        self.inner.compress();
        self.inner.save(destination)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_hello_world_persists_as_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("hello.pdf");

        let mut document = Document::hello_world().expect("document should build");
        document.persist(&destination).expect("save should succeed");

        let bytes = fs::read(&destination).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn test_persist_into_missing_directory_fails() {
        let mut document = Document::hello_world().expect("document should build");
        let result = document.persist(Path::new("/nonexistent-ebb-dir/hello.pdf"));
        assert!(result.is_err());
    }
}
