//! Error types for phpcrud-codegen

use thiserror::Error;

/// Result type alias for phpcrud-codegen operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("The {flag} parameter with an input file name is required", flag = crate::config::defaults::INPUT_FLAG)]
    MissingInputFile,

    #[error("Invalid file type: {0} (only {supported} inputs are supported)", supported = crate::config::defaults::SUPPORTED_FILE_TYPES.join(", "))]
    UnsupportedFileType(String),

    #[error("Invalid stub pattern: {0}")]
    PatternError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<regex::Error> for CodegenError {
    fn from(err: regex::Error) -> Self {
        CodegenError::PatternError(err.to_string())
    }
}

impl From<config::ConfigError> for CodegenError {
    fn from(err: config::ConfigError) -> Self {
        CodegenError::ConfigError(err.to_string())
    }
}
