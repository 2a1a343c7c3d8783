//! Line-oriented PHP class stub parser

use regex::Regex;
use tracing::info;

use super::metadata::ClassSpec;
use crate::error::Result;

/// `Class Article {` -> "Article"
pub const CLASS_PATTERN: &str = r"Class (.*?)\s*\{";

/// `public $Title;` -> "Title"
pub const PROPERTY_PATTERN: &str = r"public \$(.*?);";

/// `private $table_name = "articles";` -> "articles"
pub const TABLE_NAME_PATTERN: &str = r#"private \$table_name = "(.*?)";"#;

/// Parse a stub string into a class spec
pub fn parse_stub(source: &str) -> Result<ClassSpec> {
    let parser = StubParser::new()?;
    let spec = parser.parse(source.lines());
    info!("Class Name: {}", spec.name);
    info!("Table name: {}", spec.table_name);
    info!("Fields: {}", spec.field_list());
    Ok(spec)
}

/// Compiled stub patterns
#[derive(Debug, Clone)]
pub struct StubParser {
    class: Regex,
    property: Regex,
    table_name: Regex,
}

impl StubParser {
    /// Compile the stub patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            class: Regex::new(CLASS_PATTERN)?,
            property: Regex::new(PROPERTY_PATTERN)?,
            table_name: Regex::new(TABLE_NAME_PATTERN)?,
        })
    }

    /// Scan lines and collect the class name, table name and public fields.
    ///
    /// Lines that match nothing are ignored; the last class and table match
    /// wins, fields accumulate in order.
    pub fn parse<I, S>(&self, lines: I) -> ClassSpec
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut spec = ClassSpec::default();

        for line in lines {
            let line = line.as_ref();
            if let Some(name) = self.find_class(line) {
                spec.name = name;
            }
            if let Some(field) = self.find_field(line) {
                spec.fields.push(field);
            }
            if let Some(table) = self.find_table_name(line) {
                spec.table_name = table;
            }
        }

        spec
    }

    /// Class name declared on a line, if any
    pub fn find_class(&self, line: &str) -> Option<String> {
        capture(&self.class, line).map(|name| name.trim_end().to_string())
    }

    /// Public property declared on a line, if any
    pub fn find_field(&self, line: &str) -> Option<String> {
        capture(&self.property, line).map(str::to_string)
    }

    /// Table name assigned on a line, if any
    pub fn find_table_name(&self, line: &str) -> Option<String> {
        capture(&self.table_name, line).map(str::to_string)
    }
}

/// First capture group of the first match, skipping empty captures
fn capture<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}
