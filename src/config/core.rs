use serde::{Deserialize, Serialize};

pub const DEFAULT_PACKAGE: &str = ".";
pub const DEFAULT_FUNCTION: &str = "Receiver";

/// Root of `ce-function.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub function: Option<FunctionSection>,
}

/// The `[function]` table
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FunctionSection {
    /// Package directory relative to the module root
    #[serde(default)]
    pub package: Option<String>,

    /// Receiver function name; empty accepts any supported function
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub protocol: Option<String>,
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub package: Option<String>,
    pub function: Option<String>,
    pub any_function: bool,
    pub protocol: Option<String>,
}

/// Resolved settings for one detection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    pub package: String,
    /// `None` accepts the first function with a supported signature
    pub function: Option<String>,
    pub protocol: String,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            function: Some(DEFAULT_FUNCTION.to_string()),
            protocol: crate::codegen::default_protocol().to_string(),
        }
    }
}

impl DetectorConfig {
    /// Overrides win over the file, which wins over defaults.
    pub fn resolve(overrides: ConfigOverrides, file: Option<FileConfig>) -> Self {
        let section = file.and_then(|f| f.function).unwrap_or_default();
        let defaults = Self::default();

        let function = if overrides.any_function {
            None
        } else {
            match overrides.function.or(section.name) {
                Some(name) if name.trim().is_empty() => None,
                Some(name) => Some(name),
                None => defaults.function,
            }
        };

        Self {
            package: overrides
                .package
                .or(section.package)
                .filter(|p| !p.is_empty())
                .unwrap_or(defaults.package),
            function,
            protocol: overrides
                .protocol
                .or(section.protocol)
                .filter(|p| !p.is_empty())
                .unwrap_or(defaults.protocol),
        }
    }
}
