use crate::config::ConfigOverrides;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ce-go-function")]
#[command(about = "Detects a CloudEvents receiver in a Go package and generates its entrypoint", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the receiver function and print the detection outcome
    Detect {
        #[command(flatten)]
        detect: DetectArgs,

        /// Append the outcome to this build plan file
        #[arg(long)]
        plan: Option<PathBuf>,

        /// Format of the outcome printed to stdout
        #[arg(short = 'f', long = "format", value_enum, default_value = "toml")]
        format: OutputFormat,
    },

    /// Generate the entrypoint from a build plan written by `detect`
    Build {
        /// Directory holding go.mod; output goes under ce-cmd/function
        #[arg(long = "working-dir", default_value = ".")]
        working_dir: PathBuf,

        /// Build plan file
        #[arg(long)]
        plan: PathBuf,
    },

    /// Detect and generate in one step
    Generate {
        #[command(flatten)]
        detect: DetectArgs,
    },

    /// List the supported receiver signatures
    Signatures,
}

#[derive(Args, Debug, Clone)]
pub struct DetectArgs {
    /// Directory holding go.mod
    #[arg(long = "working-dir", default_value = ".")]
    pub working_dir: PathBuf,

    /// Package directory relative to the working directory
    #[arg(long, env = "CE_GO_PACKAGE")]
    pub package: Option<String>,

    /// Name of the receiver function
    #[arg(long, env = "CE_GO_FUNCTION")]
    pub function: Option<String>,

    /// Accept the first function with a supported signature, whatever its name
    #[arg(long = "any-function")]
    pub any_function: bool,

    /// Delivery protocol to bind the receiver to
    #[arg(long, env = "CE_PROTOCOL")]
    pub protocol: Option<String>,
}

impl DetectArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            package: self.package.clone(),
            function: self.function.clone(),
            any_function: self.any_function,
            protocol: self.protocol.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Toml,
    Json,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_detect_flags() {
        let cli = Cli::try_parse_from([
            "ce-go-function",
            "detect",
            "--working-dir",
            "/src",
            "--function",
            "Handle",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Detect { detect, format, .. } => {
                assert_eq!(detect.working_dir, PathBuf::from("/src"));
                assert_eq!(detect.function.as_deref(), Some("Handle"));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_build_requires_plan() {
        assert!(Cli::try_parse_from(["ce-go-function", "build"]).is_err());
    }
}
