use cardpress::cli::{Cli, Commands};
use cardpress::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => cardpress::cli::build::run(args, &printer)?,
        Commands::Validate(args) => cardpress::cli::validate::run(args, &printer)?,
        Commands::Init(args) => cardpress::cli::init::run(args, &printer)?,
        Commands::Themes(args) => cardpress::cli::themes::run(args, &printer)?,
        Commands::Completions(args) => cardpress::cli::completions::run(args)?,
    }

    Ok(())
}
