use super::print_generation_summary;
use crate::codegen::assemble;
use crate::plan::read_plan;
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle_build(working_dir: &Path, plan_path: &Path) -> Result<()> {
    let plan = read_plan(plan_path)
        .with_context(|| format!("Failed to read build plan {}", plan_path.display()))?;
    let outcome = plan.outcome()?;

    let generated = assemble(&outcome, working_dir)?;
    print_generation_summary(&outcome, &generated, working_dir)
}
