//! Configuration settings for phpcrud-codegen

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::defaults;
use crate::codegen::is_supported_file_type;
use crate::error::{CodegenError, Result};

/// Main configuration struct for code generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// Path to the PHP class stub
    #[serde(default)]
    pub input_file: PathBuf,

    /// Directory the generated `<ClassName>.php` is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Column at which doc comment text is wrapped
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,

    /// Emit the get-if-exists method as `getIfExists` instead of
    /// a second `checkIfExists`
    #[serde(default = "default_rename_get_if_exists")]
    pub rename_get_if_exists: bool,

    /// Dry run mode - preview without writing files
    #[serde(default = "default_dry_run")]
    pub dry_run: bool,

    /// Log level (trace, debug, info, warn, error)
    /// Can be overridden by RUST_LOG env var
    #[serde(default)]
    pub log_level: Option<String>,
}

// Default value functions for serde
fn default_output_dir() -> PathBuf {
    PathBuf::from(defaults::OUTPUT_DIR)
}
fn default_wrap_width() -> usize {
    defaults::WRAP_WIDTH
}
fn default_rename_get_if_exists() -> bool {
    defaults::RENAME_GET_IF_EXISTS
}
fn default_dry_run() -> bool {
    defaults::DRY_RUN
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::new(),
            output_dir: default_output_dir(),
            wrap_width: default_wrap_width(),
            rename_get_if_exists: default_rename_get_if_exists(),
            dry_run: default_dry_run(),
            log_level: None,
        }
    }
}

impl CodegenConfig {
    /// Create a default config with the given input stub
    pub fn default_with_input(input_file: PathBuf) -> Self {
        Self {
            input_file,
            ..Default::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CodegenConfig = toml::from_str(&content).map_err(|e| {
            CodegenError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Load configuration using config-rs (file + environment variables)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        } else {
            builder = builder.add_source(File::with_name(defaults::CONFIG_FILE_NAME).required(false));
        }

        // PHPCRUD_CODEGEN_WRAP_WIDTH=80 etc.
        builder = builder.add_source(
            Environment::with_prefix(defaults::ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        let config: CodegenConfig = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    /// Name of the output file for a class
    pub fn output_path(&self, class_name: &str) -> PathBuf {
        self.output_dir.join(crate::codegen::php_file_name(class_name))
    }

    /// Validate the configuration
    ///
    /// Argument problems (no input, wrong extension) are reported before
    /// anything touches the filesystem.
    pub fn validate(&self) -> Result<()> {
        if self.input_file.as_os_str().is_empty() {
            return Err(CodegenError::MissingInputFile);
        }

        if !is_supported_file_type(&self.input_file) {
            return Err(CodegenError::UnsupportedFileType(
                self.input_file.display().to_string(),
            ));
        }

        if !self.input_file.exists() {
            return Err(CodegenError::ValidationError(format!(
                "Input file not found: {}",
                self.input_file.display()
            )));
        }

        if self.wrap_width == 0 {
            return Err(CodegenError::ValidationError(
                "wrap_width must be greater than zero".into(),
            ));
        }

        Ok(())
    }
}
