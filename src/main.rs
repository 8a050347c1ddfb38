use clap::Parser;
use huepick::cli::{Cli, Commands};
use huepick::logging::{init_logging, LoggingConfig};
use huepick::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(if cli.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::default()
    });

    let printer = Printer::new();

    match cli.command {
        Commands::Init(args) => huepick::cli::init::run(args, &printer)?,
        Commands::Render(args) => huepick::cli::render::run(args, &printer)?,
        Commands::Replay(args) => huepick::cli::replay::run(args, &printer)?,
        Commands::Sample(args) => huepick::cli::sample::run(args, &printer)?,
        Commands::Completions(args) => huepick::cli::completions::run(args)?,
    }

    Ok(())
}
