//! Build plan exchanged between the detect and build phases.
//!
//! ```toml
//! [[provides]]
//! name = "ce-go-function"
//!
//! [[requires]]
//! name = "ce-go-function"
//!
//! [requires.metadata]
//! package = "example.org/myfn"
//! function = "Receiver"
//! protocol = "http"
//! ```

use crate::core::DetectionOutcome;
use crate::errors::{Error, Result};
use crate::io;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const PLAN_ENTRY_NAME: &str = "ce-go-function";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildPlan {
    #[serde(default)]
    pub provides: Vec<Provision>,
    #[serde(default)]
    pub requires: Vec<Requirement>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provision {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<toml::Table>,
}

impl BuildPlan {
    pub fn for_outcome(outcome: &DetectionOutcome) -> Result<Self> {
        let metadata = match toml::Value::try_from(outcome)? {
            toml::Value::Table(table) => table,
            other => {
                return Err(Error::Configuration(format!(
                    "plan metadata must be a table, not {}",
                    other.type_str()
                )))
            }
        };
        Ok(Self {
            provides: vec![Provision {
                name: PLAN_ENTRY_NAME.to_string(),
            }],
            requires: vec![Requirement {
                name: PLAN_ENTRY_NAME.to_string(),
                metadata: Some(metadata),
            }],
        })
    }

    /// The outcome carried by the last requirement for this tool.
    ///
    /// Writes append, so the last entry is the most recent detection.
    pub fn outcome(&self) -> Result<DetectionOutcome> {
        let metadata = self
            .requires
            .iter()
            .rfind(|r| r.name == PLAN_ENTRY_NAME)
            .and_then(|r| r.metadata.clone())
            .ok_or(Error::MissingPlanEntry)?;
        Ok(toml::Value::Table(metadata).try_into()?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Append the plan for `outcome` to `path`, creating the file if needed.
pub fn write_plan(path: &Path, outcome: &DetectionOutcome) -> Result<()> {
    let plan = BuildPlan::for_outcome(outcome)?;
    io::append_file(path, &format!("\n{}", plan.to_toml()?))?;
    log::debug!("Appended build plan to {}", path.display());
    Ok(())
}

pub fn read_plan(path: &Path) -> Result<BuildPlan> {
    let contents = std::fs::read_to_string(path)?;
    BuildPlan::from_toml(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_redetect_replaces_previous_outcome() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.toml");
        let old = DetectionOutcome::new("example.org/myfn", "Old", "http");
        let new = DetectionOutcome::new("example.org/myfn", "New", "http");

        write_plan(&path, &old).unwrap();
        write_plan(&path, &new).unwrap();

        assert_eq!(read_plan(&path).unwrap().outcome().unwrap(), new);
    }

    #[test]
    fn test_plan_round_trips_outcome() {
        let outcome = DetectionOutcome::new("example.org/myfn", "Receiver", "http");
        let plan = BuildPlan::for_outcome(&outcome).unwrap();
        let parsed = BuildPlan::from_toml(&plan.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.outcome().unwrap(), outcome);
    }

    #[test]
    fn test_outcome_skips_unrelated_entries() {
        let plan = BuildPlan::from_toml(indoc! {r#"
            [[requires]]
            name = "unrelated-entry"

            [[requires]]
            name = "ce-go-function"

            [requires.metadata]
            package = "paketo.io/my-fn"
            function = "MyHandler"
            protocol = "http"
        "#})
        .unwrap();

        assert_eq!(
            plan.outcome().unwrap(),
            DetectionOutcome::new("paketo.io/my-fn", "MyHandler", "http")
        );
    }

    #[test]
    fn test_missing_plan_entry() {
        let plan = BuildPlan::from_toml("[[requires]]\nname = \"unrelated-entry\"\n").unwrap();
        assert!(matches!(plan.outcome(), Err(Error::MissingPlanEntry)));
    }

    #[test]
    fn test_incomplete_metadata_is_rejected() {
        let plan = BuildPlan::from_toml(indoc! {r#"
            [[requires]]
            name = "ce-go-function"

            [requires.metadata]
            package = "paketo.io/my-fn"
        "#})
        .unwrap();
        assert!(matches!(plan.outcome(), Err(Error::TomlDe(_))));
    }

    #[test]
    fn test_write_plan_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.toml");
        std::fs::write(&path, "[[provides]]\nname = \"other\"\n").unwrap();

        let outcome = DetectionOutcome::new("example.org/myfn", "Receiver", "http");
        write_plan(&path, &outcome).unwrap();

        let plan = read_plan(&path).unwrap();
        assert_eq!(plan.provides.len(), 2);
        assert_eq!(plan.outcome().unwrap(), outcome);
    }
}
