//! Metadata structures for a parsed class stub

use serde::{Deserialize, Serialize};

/// Facts extracted from a PHP class stub
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSpec {
    /// Class name (empty if the stub has no `Class <name> {` line)
    pub name: String,

    /// Table the class reads and writes (empty if not declared)
    pub table_name: String,

    /// Public property names in declaration order, duplicates kept
    pub fields: Vec<String>,
}

impl ClassSpec {
    /// Create a spec from its parts
    pub fn new(
        name: impl Into<String>,
        table_name: impl Into<String>,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Fields joined for display, e.g. "Title, Body"
    pub fn field_list(&self) -> String {
        self.fields.join(", ")
    }
}
