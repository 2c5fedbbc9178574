//! CLI command implementations.
//!
//! - **detect**: find the receiver and emit the detection outcome / build plan
//! - **build**: render the entrypoint from a build plan
//! - **generate**: detect and build in one process
//! - **signatures**: list the supported receiver signatures

pub mod build;
pub mod detect;
pub mod generate;
pub mod signatures;

pub use build::handle_build;
pub use detect::handle_detect;
pub use generate::handle_generate;
pub use signatures::handle_signatures;

use crate::codegen::GeneratedOutput;
use crate::core::DetectionOutcome;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

// Human-readable summary on stderr; stdout carries the directive
fn print_generation_summary(
    outcome: &DetectionOutcome,
    generated: &GeneratedOutput,
    working_dir: &Path,
) -> Result<()> {
    eprintln!("{}  {}", "Package:".bold(), outcome.package_path);
    eprintln!("{} {}", "Function:".bold(), outcome.function_name);
    eprintln!("{} {}", "Protocol:".bold(), outcome.protocol);
    for path in &generated.files {
        let shown = path.strip_prefix(working_dir).unwrap_or(path);
        eprintln!("{} {}", "Generated".green(), shown.display());
    }

    print!("{}", toml::to_string(&generated.directive)?);
    Ok(())
}
