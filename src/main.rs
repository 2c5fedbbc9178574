use anyhow::Result;
use ce_go_function::cli::{self, Commands};
use ce_go_function::commands;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbose);

    match cli.command {
        Commands::Detect {
            detect,
            plan,
            format,
        } => commands::handle_detect(detect, plan.as_deref(), format),
        Commands::Build { working_dir, plan } => commands::handle_build(&working_dir, &plan),
        Commands::Generate { detect } => commands::handle_generate(detect),
        Commands::Signatures => {
            commands::handle_signatures();
            Ok(())
        }
    }
}
