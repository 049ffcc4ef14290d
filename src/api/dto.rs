use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::{CallTree, Token};

/// The persisted document: a single key, the identifier token, mapped to the
/// call tree. `{ "Library.": { "method1": { "method2": {} } } }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeDocument {
    pub root: Token,
    pub tree: CallTree,
}

impl TreeDocument {
    pub fn new(root: Token, tree: CallTree) -> Self {
        Self { root, tree }
    }

    /// Render with 4-space indentation.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever emits UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Serialize for TreeDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.root.as_str(), &self.tree)?;
        map.end()
    }
}
