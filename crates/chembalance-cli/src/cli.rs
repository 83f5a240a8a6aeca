use clap::{Args, Parser, Subcommand};

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "chembalance CLI - inspect the chemical-equation catalog and check coefficient sets for balance.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every equation in the fixed catalog with its index.
    List,
    /// List every molecule in the fixed catalog.
    Molecules,
    /// Apply a coefficient set to a catalog equation and report its balance state.
    Check(CheckArgs),
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Catalog index of the equation, as printed by `list`.
    #[arg(short, long, value_name = "INDEX")]
    pub equation: usize,

    /// Current coefficients, reactants then products, e.g. `1,3,2`.
    #[arg(short, long, value_name = "LIST", value_delimiter = ',', required = true)]
    pub coefficients: Vec<i32>,
}
