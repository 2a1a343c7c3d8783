//! CLI entry point for phpcrud-codegen

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use phpcrud_codegen::config::CodegenConfig;

#[derive(Parser)]
#[command(name = "phpcrud-codegen")]
#[command(about = "Generate PHP classes with PDO CRUD methods from minimal class stubs")]
#[command(version)]
struct Cli {
    /// Path to the PHP class stub (.php)
    #[arg(short = 'l', long = "load", value_name = "FILE")]
    load: Option<PathBuf>,

    /// Path to configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for the generated class (default: current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the get-if-exists method as getIfExists instead of a second checkIfExists
    #[arg(long)]
    rename_get_if_exists: bool,

    /// Dry run - show what would be generated without writing files
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the class file (default)
    Generate,
    /// Inspect stub (show the parsed class for debugging)
    Inspect,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging, so we can use config.log_level)
    let mut config = CodegenConfig::load(cli.config.as_deref())?;

    // Initialize logging
    // Priority: RUST_LOG env var > config.log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = config.log_level.as_deref().unwrap_or(default_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    // Apply CLI overrides
    if let Some(load) = cli.load {
        config.input_file = load;
    }
    if let Some(output) = cli.output {
        config.output_dir = output;
    }
    if cli.rename_get_if_exists {
        config.rename_get_if_exists = true;
    }
    if cli.dry_run {
        config.dry_run = true;
    }

    if let Some(Commands::Inspect) = &cli.command {
        return inspect_stub(&config);
    }

    info!("Generating class from stub: {:?}", config.input_file);

    let path = phpcrud_codegen::generate(&config)?;
    if config.dry_run {
        println!("Dry run mode - would generate:");
        println!("  Class: {}", path.display());
        return Ok(());
    }

    println!("{} has been created.", path.display());
    Ok(())
}

fn inspect_stub(config: &CodegenConfig) -> Result<()> {
    let spec = phpcrud_codegen::load_class_spec(config)?;

    println!("Class Name: {}", spec.name);
    println!("Table name: {}", spec.table_name);
    println!("Fields ({}): {}", spec.fields.len(), spec.field_list());
    println!(
        "Output:     {}",
        config.output_path(&spec.name).display()
    );

    Ok(())
}
