use super::detect::run_detection;
use super::print_generation_summary;
use crate::cli::DetectArgs;
use crate::codegen::assemble;
use anyhow::Result;

pub fn handle_generate(args: DetectArgs) -> Result<()> {
    let outcome = run_detection(&args)?;
    let generated = assemble(&outcome, &args.working_dir)?;
    print_generation_summary(&outcome, &generated, &args.working_dir)
}
