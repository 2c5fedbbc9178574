//! Error types for detection and generation.
//!
//! Parse failures of individual files are recoverable and surface as
//! [`Error::MalformedSource`], which the detector logs and skips. Every other
//! variant aborts the run.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ce-go-function operations
#[derive(Debug, Error)]
pub enum Error {
    /// A candidate source file could not be read
    #[error("failed to read source file {}: {source}", path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file did not parse into a declaration tree
    #[error("failed to parse {}: {message}", path.display())]
    MalformedSource { path: PathBuf, message: String },

    /// The configured protocol has no adapter template
    #[error(
        "unsupported protocol: {protocol:?} (supported: {})",
        crate::codegen::protocol_ids().join(", ")
    )]
    UnsupportedProtocol { protocol: String },

    /// No declaration satisfied both the name requirement and a registry match
    #[error(
        "unable to find {} in {package:?} with a supported signature\n{}",
        target_label(.function),
        crate::signature::supported_signatures_help()
    )]
    NoMatchingFunction {
        function: Option<String>,
        package: String,
    },

    /// The host module path could not be determined
    #[error("unable to determine module root from {}: {reason}", path.display())]
    MissingModuleRoot { path: PathBuf, reason: String },

    /// The build plan carries no requirement for this tool
    #[error("missing metadata for {}", crate::plan::PLAN_ENTRY_NAME)]
    MissingPlanEntry,

    /// A template references a substitution point it does not declare
    #[error("template {template:?}: {message}")]
    Template { template: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The Go grammar could not be loaded into the parser
    #[error("Failed to set Go language: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Directory listing errors
    #[error(transparent)]
    Walk(#[from] ignore::Error),

    /// TOML decoding errors
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    /// TOML encoding errors
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a malformed-source error for a file
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::MalformedSource {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a missing-module-root error for a go.mod location
    pub fn missing_module_root(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MissingModuleRoot {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the detector may skip past this error and keep scanning.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MalformedSource { .. })
    }
}

fn target_label(function: &Option<String>) -> String {
    match function {
        Some(name) => format!("function {name:?}"),
        None => "any function".to_string(),
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
