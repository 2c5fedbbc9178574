//! Detector configuration.
//!
//! Settings come from three layers: command-line flags and their
//! environment variables (`CE_GO_PACKAGE`, `CE_GO_FUNCTION`, `CE_PROTOCOL`),
//! an optional `ce-function.toml` in the working directory, and built-in
//! defaults.

mod core;
mod loader;

pub use self::core::{
    ConfigOverrides, DetectorConfig, FileConfig, FunctionSection, DEFAULT_FUNCTION,
    DEFAULT_PACKAGE,
};
pub use loader::{load_config, parse_config, CONFIG_FILE};

use crate::errors::Result;
use std::path::Path;

/// Resolve the configuration for a run rooted at `working_dir`.
pub fn resolve_config(working_dir: &Path, overrides: ConfigOverrides) -> Result<DetectorConfig> {
    let file = load_config(working_dir)?;
    Ok(DetectorConfig::resolve(overrides, file))
}
