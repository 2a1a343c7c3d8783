//! Default configuration values - single source of truth

/// Command-line flag that names the input stub
pub const INPUT_FLAG: &str = "-l";

/// Extensions accepted for input stubs (compared case-insensitively)
pub const SUPPORTED_FILE_TYPES: &[&str] = &[".php", ".PHP"];

/// Default output directory for generated classes
pub const OUTPUT_DIR: &str = ".";

/// Column at which doc comment text is wrapped
pub const WRAP_WIDTH: usize = 70;

/// Whether to emit the get-if-exists method as `getIfExists`
/// instead of the legacy duplicate `checkIfExists`
pub const RENAME_GET_IF_EXISTS: bool = false;

/// Whether to run in dry-run mode by default
pub const DRY_RUN: bool = false;

/// Config file looked up by `CodegenConfig::load` when none is given
pub const CONFIG_FILE_NAME: &str = "phpcrud-codegen";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "PHPCRUD_CODEGEN";
