// Infrastructure implementations for Method Tree.

pub mod stream_source;

use std::path::Path;

use crate::api::TreeDocument;
use crate::ports::TreeExporter;

pub use stream_source::StreamSource;

/// Writes the document as pretty-printed JSON (4-space indent).
pub struct JsonFileExporter;

impl TreeExporter for JsonFileExporter {
    fn export(&self, document: &TreeDocument, path: &Path) -> std::io::Result<()> {
        let content = document.to_pretty_json()?;
        std::fs::write(path, content)
    }
}
