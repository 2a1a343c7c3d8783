//! Main code generator orchestrator

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::info;

use crate::config::CodegenConfig;
use crate::error::Result;
use crate::parser::ClassSpec;

pub use super::class_generator::{emit_class, render_class};

/// Main code generator that turns a class spec into a PHP file
pub struct CodeGenerator<'a> {
    config: &'a CodegenConfig,
}

impl<'a> CodeGenerator<'a> {
    /// Create a new code generator with the given configuration
    pub fn new(config: &'a CodegenConfig) -> Self {
        Self { config }
    }

    /// Path the class file is written to
    pub fn output_path(&self, spec: &ClassSpec) -> PathBuf {
        self.config.output_path(&spec.name)
    }

    /// Render the class without touching the filesystem
    pub fn render(&self, spec: &ClassSpec) -> String {
        render_class(spec, self.config)
    }

    /// Create (or truncate) `<ClassName>.php` and write the class into it
    pub fn write(&self, spec: &ClassSpec) -> Result<PathBuf> {
        let path = self.output_path(spec);
        fs::create_dir_all(&self.config.output_dir)?;

        let mut out = BufWriter::new(File::create(&path)?);
        emit_class(spec, self.config, &mut out)?;
        out.flush()?;

        info!("{} has been created.", path.display());
        Ok(path)
    }
}

/// Write the class file for a spec, returning its path
pub fn generate_class_file(spec: &ClassSpec, config: &CodegenConfig) -> Result<PathBuf> {
    CodeGenerator::new(config).write(spec)
}
