// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod codegen;
pub mod commands;
pub mod config;
pub mod core;
pub mod detector;
pub mod errors;
pub mod io;
pub mod plan;
pub mod signature;

// Re-export commonly used types
pub use crate::core::{Category, DetectedFunction, DetectionOutcome, SourceUnit};

pub use crate::analyzers::{scan_file, AliasTable, GoParser, ScannedFunction};

pub use crate::codegen::{assemble, BuildDirective, GeneratedOutput};

pub use crate::config::{resolve_config, ConfigOverrides, DetectorConfig};

pub use crate::detector::{detect_in_sources, Detector};

pub use crate::errors::{Error, Result};

pub use crate::plan::BuildPlan;

pub use crate::signature::CanonicalSignature;
