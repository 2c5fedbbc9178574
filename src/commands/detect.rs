use crate::cli::{DetectArgs, OutputFormat};
use crate::config::resolve_config;
use crate::core::DetectionOutcome;
use crate::detector::Detector;
use crate::plan::write_plan;
use anyhow::{Context, Result};
use std::path::Path;

/// Run detection as configured by `args`.
pub fn run_detection(args: &DetectArgs) -> Result<DetectionOutcome> {
    let config = resolve_config(&args.working_dir, args.overrides())?;
    let outcome = Detector::new(config).detect(&args.working_dir)?;
    Ok(outcome)
}

pub fn handle_detect(args: DetectArgs, plan: Option<&Path>, format: OutputFormat) -> Result<()> {
    let outcome = run_detection(&args)?;

    if let Some(plan_path) = plan {
        write_plan(plan_path, &outcome)
            .with_context(|| format!("Failed to write build plan {}", plan_path.display()))?;
    }

    print!("{}", format_outcome(&outcome, format)?);
    Ok(())
}

pub fn format_outcome(outcome: &DetectionOutcome, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Toml => toml::to_string(outcome)?,
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(outcome)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_outcome_toml() {
        let outcome = DetectionOutcome::new("example.org/myfn", "Receiver", "http");
        assert_eq!(
            format_outcome(&outcome, OutputFormat::Toml).unwrap(),
            "package = \"example.org/myfn\"\nfunction = \"Receiver\"\nprotocol = \"http\"\n"
        );
    }

    #[test]
    fn test_format_outcome_json() {
        let outcome = DetectionOutcome::new("example.org/myfn", "Receiver", "http");
        let json: serde_json::Value =
            serde_json::from_str(&format_outcome(&outcome, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["function"], "Receiver");
    }
}
