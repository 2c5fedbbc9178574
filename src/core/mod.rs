pub mod ast;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Semantic category of one parameter or result type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Unsupported,
    Context,
    Envelope,
    EnvelopePointer,
    ProtocolResult,
    Error,
}

impl Category {
    /// The canonical spelling used in signature keys.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Unsupported => "unsupported",
            Category::Context => "context.Context",
            Category::Envelope => "event.Event",
            Category::EnvelopePointer => "*event.Event",
            Category::ProtocolResult => "protocol.Result",
            Category::Error => "error",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A candidate source file as read from disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub source: String,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectedFunction {
    pub name: String,
    pub signature_key: &'static str,
}

/// What detection hands to code generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionOutcome {
    #[serde(rename = "package")]
    pub package_path: String,
    #[serde(rename = "function")]
    pub function_name: String,
    pub protocol: String,
}

impl DetectionOutcome {
    pub fn new(
        package_path: impl Into<String>,
        function_name: impl Into<String>,
        protocol: impl Into<String>,
    ) -> Self {
        Self {
            package_path: package_path.into(),
            function_name: function_name.into(),
            protocol: protocol.into(),
        }
    }
}
