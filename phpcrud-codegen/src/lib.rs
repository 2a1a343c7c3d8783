//! phpcrud-codegen: Generate PHP classes with PDO CRUD methods from class stubs
//!
//! This crate provides both a CLI tool and a library. It reads a minimal PHP
//! class stub (class name, `$table_name`, public properties) and writes
//! `<ClassName>.php` with:
//!
//! - the property declarations and a PDO constructor
//! - `read`, `readOne`, `readPaging`, `count`, exists checks, `Insert`,
//!   `update` and `remove` methods, each with a PHPDoc block
//!
//! A stub looks like:
//!
//! ```php
//! <?php
//!     Class Article {
//!         public $ID;
//!         public $Title;
//!         private $conn;
//!         private $table_name = "articles";
//!     }
//! ?>
//! ```
//!
//! # Usage in build.rs
//!
//! ```toml
//! [package.metadata.phpcrud-codegen]
//! stub_file = "stubs/article.php"
//! output_dir = "php/generated"
//! ```
//!
//! ```rust,ignore
//! fn main() {
//!     phpcrud_codegen::generate_from_cargo_metadata()
//!         .expect("Failed to generate PHP class");
//! }
//! ```
//!
//! # Alternative: Programmatic Configuration
//!
//! ```rust,ignore
//! phpcrud_codegen::CodegenBuilder::new("stubs/article.php")
//!     .output_dir("php/generated")
//!     .rename_get_if_exists()
//!     .generate()
//!     .expect("Failed to generate PHP class");
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! phpcrud-codegen -l Article.php
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod parser;

use std::path::{Path, PathBuf};

use tracing::info;

pub use codegen::CodeGenerator;
pub use config::CodegenConfig;
pub use error::{CodegenError, Result};
pub use parser::ClassSpec;

/// Main entry point for code generation
///
/// Returns the path of the generated file. In dry-run mode nothing is
/// written and the path that would have been used is returned.
pub fn generate(config: &CodegenConfig) -> Result<PathBuf> {
    let spec = load_class_spec(config)?;
    let generator = CodeGenerator::new(config);

    if config.dry_run {
        let path = generator.output_path(&spec);
        info!("Dry run - would generate {}", path.display());
        return Ok(path);
    }

    info!("Creating PHP file for class {}", spec.name);
    generator.write(&spec)
}

/// Validate the config, then read and parse the input stub
pub fn load_class_spec(config: &CodegenConfig) -> Result<ClassSpec> {
    config.validate()?;
    info!("Parsing stub: {:?}", config.input_file);
    let source = std::fs::read_to_string(&config.input_file)?;
    parser::parse_stub(&source)
}

/// Builder pattern for easy configuration in build.rs
pub struct CodegenBuilder {
    config: CodegenConfig,
}

impl CodegenBuilder {
    /// Create a new builder with the given stub file
    pub fn new(stub_file: impl AsRef<Path>) -> Self {
        Self {
            config: CodegenConfig::default_with_input(stub_file.as_ref().to_path_buf()),
        }
    }

    /// Set the directory the class file is written to
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the column at which doc comments wrap
    pub fn wrap_width(mut self, width: usize) -> Self {
        self.config.wrap_width = width;
        self
    }

    /// Emit the get-if-exists method as `getIfExists`
    pub fn rename_get_if_exists(mut self) -> Self {
        self.config.rename_get_if_exists = true;
        self
    }

    /// Enable dry run mode (preview without writing files)
    pub fn dry_run(mut self) -> Self {
        self.config.dry_run = true;
        self
    }

    /// Generate the class file
    pub fn generate(self) -> Result<PathBuf> {
        generate(&self.config)
    }
}

/// Configuration for `[package.metadata.phpcrud-codegen]` in Cargo.toml
#[derive(Debug, Clone, Default, serde::Deserialize)]
struct CargoMetadataConfig {
    /// Path to the PHP class stub (required)
    stub_file: Option<String>,

    /// Output directory (optional, defaults to OUT_DIR)
    output_dir: Option<String>,

    /// Doc comment wrap column (optional)
    wrap_width: Option<usize>,

    /// Emit `getIfExists` instead of a second `checkIfExists` (default: false)
    rename_get_if_exists: Option<bool>,
}

#[derive(Debug, serde::Deserialize)]
struct CargoToml {
    package: Option<CargoPackage>,
}

#[derive(Debug, serde::Deserialize)]
struct CargoPackage {
    metadata: Option<CargoPackageMetadata>,
}

#[derive(Debug, serde::Deserialize)]
struct CargoPackageMetadata {
    #[serde(rename = "phpcrud-codegen")]
    phpcrud_codegen: Option<CargoMetadataConfig>,
}

/// Generate a class from `[package.metadata.phpcrud-codegen]` in Cargo.toml
///
/// ```rust,ignore
/// // build.rs
/// fn main() {
///     phpcrud_codegen::generate_from_cargo_metadata()
///         .expect("Failed to generate PHP class");
/// }
/// ```
///
/// Configure in Cargo.toml:
///
/// ```toml
/// [package.metadata.phpcrud-codegen]
/// stub_file = "stubs/article.php"
/// rename_get_if_exists = true
/// ```
pub fn generate_from_cargo_metadata() -> Result<PathBuf> {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").map_err(|_| {
        CodegenError::ConfigError(
            "CARGO_MANIFEST_DIR not set - are you running from build.rs?".into(),
        )
    })?;

    let cargo_toml_path = PathBuf::from(&manifest_dir).join("Cargo.toml");
    let cargo_toml_content = std::fs::read_to_string(&cargo_toml_path)?;

    let cargo_toml: CargoToml = toml::from_str(&cargo_toml_content).map_err(|e| {
        CodegenError::ConfigError(format!(
            "Failed to parse {}: {}",
            cargo_toml_path.display(),
            e
        ))
    })?;

    let metadata_config = cargo_toml
        .package
        .and_then(|p| p.metadata)
        .and_then(|m| m.phpcrud_codegen)
        .ok_or_else(|| {
            CodegenError::ConfigError(
                "Missing [package.metadata.phpcrud-codegen] section in Cargo.toml".into(),
            )
        })?;

    let stub_file = metadata_config.stub_file.ok_or_else(|| {
        CodegenError::ConfigError(
            "stub_file is required in [package.metadata.phpcrud-codegen]".into(),
        )
    })?;

    // Resolve stub_file relative to manifest dir
    let stub_path = PathBuf::from(&manifest_dir).join(&stub_file);

    let mut builder = CodegenBuilder::new(&stub_path);

    if let Some(dir) = metadata_config.output_dir {
        builder = builder.output_dir(PathBuf::from(&manifest_dir).join(dir));
    } else {
        let out_dir = std::env::var("OUT_DIR").map(PathBuf::from).map_err(|_| {
            CodegenError::ConfigError("OUT_DIR not set - are you running from build.rs?".into())
        })?;
        builder = builder.output_dir(out_dir);
    }

    if let Some(width) = metadata_config.wrap_width {
        builder = builder.wrap_width(width);
    }
    if let Some(true) = metadata_config.rename_get_if_exists {
        builder = builder.rename_get_if_exists();
    }

    println!("cargo:rerun-if-changed={}", stub_path.display());
    println!("cargo:rerun-if-changed={}", cargo_toml_path.display());

    builder.generate()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE_STUB: &str = r#"<?php
    Class Article {
        public $Title;
        public $Body;
        private $conn;
        private $table_name = "articles";
    }
?>"#;

    #[test]
    fn test_builder_generates_file() {
        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("article.php");
        std::fs::write(&stub, ARTICLE_STUB).unwrap();

        let path = CodegenBuilder::new(&stub)
            .output_dir(dir.path().join("generated"))
            .generate()
            .unwrap();

        assert_eq!(path, dir.path().join("generated").join("Article.php"));
        let code = std::fs::read_to_string(path).unwrap();
        assert!(code.contains("\tclass Article\n"));
        assert!(code.contains("private $table_name = \"articles\";"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("article.php");
        std::fs::write(&stub, ARTICLE_STUB).unwrap();

        let path = CodegenBuilder::new(&stub)
            .output_dir(dir.path())
            .dry_run()
            .generate()
            .unwrap();

        assert_eq!(path, dir.path().join("Article.php"));
        assert!(!path.exists());
    }

    #[test]
    fn test_rejects_bad_extension_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("article.txt");
        std::fs::write(&stub, ARTICLE_STUB).unwrap();

        let result = CodegenBuilder::new(&stub).output_dir(dir.path()).generate();
        assert!(matches!(result, Err(CodegenError::UnsupportedFileType(_))));
        assert!(!dir.path().join("Article.php").exists());
    }

    #[test]
    fn test_load_class_spec() {
        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("Article.PHP");
        std::fs::write(&stub, ARTICLE_STUB).unwrap();

        let spec = load_class_spec(&CodegenConfig::default_with_input(stub)).unwrap();
        assert_eq!(spec, ClassSpec::new("Article", "articles", ["Title", "Body"]));
    }
}
