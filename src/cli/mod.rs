//! CLI module for ce-go-function
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

pub use args::{parse_args, Cli, Commands, DetectArgs, OutputFormat};
pub use setup::init_logging;
