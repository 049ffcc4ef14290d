use std::path::Path;

use crate::api::TreeDocument;
use crate::domain::Result;

// TextSource: supply the fully buffered input text once the stream has closed
pub trait TextSource {
    fn read_text(&self) -> Result<String>;
}

// TreeExporter: persist the finished document
pub trait TreeExporter {
    fn export(&self, document: &TreeDocument, path: &Path) -> std::io::Result<()>;
}
