mod cli;
mod commands;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::debug;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);
    debug!("parsed CLI arguments: {:?}", &cli);

    match cli.command {
        Commands::List => commands::list::run_equations(),
        Commands::Molecules => commands::list::run_molecules(),
        Commands::Check(args) => commands::check::run(args),
    }
}
