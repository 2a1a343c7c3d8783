//! Naming utilities for code generation

use std::path::Path;

use crate::config::defaults::SUPPORTED_FILE_TYPES;

/// Lowercase the ASCII letters of a string, leaving everything else alone
///
/// Shared by file-type validation and the emitter's doc text.
pub fn to_lower(value: &str) -> String {
    value.to_ascii_lowercase()
}

/// Name of the generated file for a class
/// e.g., "Article" -> "Article.php"
pub fn php_file_name(class_name: &str) -> String {
    format!("{}.php", class_name)
}

/// Check if a path ends with one of the supported stub extensions
pub fn is_supported_file_type(path: &Path) -> bool {
    let name = to_lower(&path.to_string_lossy());
    SUPPORTED_FILE_TYPES
        .iter()
        .any(|ext| name.ends_with(&to_lower(ext)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_lower() {
        assert_eq!(to_lower("Article"), "article");
        assert_eq!(to_lower("OrderItem2"), "orderitem2");
        // non-ASCII letters pass through untouched
        assert_eq!(to_lower("CAFÉ"), "cafÉ");
    }

    #[test]
    fn test_php_file_name() {
        assert_eq!(php_file_name("Article"), "Article.php");
        assert_eq!(php_file_name(""), ".php");
    }

    #[test]
    fn test_is_supported_file_type() {
        assert!(is_supported_file_type(Path::new("Foo.php")));
        assert!(is_supported_file_type(Path::new("Foo.PHP")));
        assert!(is_supported_file_type(Path::new("stubs/Foo.Php")));
        assert!(!is_supported_file_type(Path::new("Foo.txt")));
        assert!(!is_supported_file_type(Path::new("Foo")));
        assert!(!is_supported_file_type(Path::new("php")));
    }
}
