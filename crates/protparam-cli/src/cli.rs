use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "protparam - compute physicochemical parameters (MW, pI, extinction, instability, aliphatic index, half-life) of protein sequences.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress bars except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to profile batch records.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Profile the first sequence of a FASTA file and print a text report.
    Single(SingleArgs),
    /// Profile every sequence of a FASTA file and write a CSV report.
    Batch(BatchArgs),
}

/// Arguments for the `single` subcommand.
#[derive(Args, Debug)]
pub struct SingleArgs {
    /// Path to the input FASTA file.
    #[arg(value_name = "FASTA")]
    pub input: PathBuf,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Path to the input FASTA file.
    #[arg(value_name = "FASTA")]
    pub input: PathBuf,

    /// Path for the CSV report.
    /// Defaults to `<input stem>_protparam.csv` next to the input file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Engine options shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct EngineArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the net-charge tolerance of the pI search.
    #[arg(long, value_name = "FLOAT")]
    pub epsilon: Option<f64>,

    /// Override the maximum number of pI search steps.
    #[arg(long, value_name = "INT")]
    pub max_iterations: Option<usize>,

    /// Use a custom pKa scale (TOML) instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    pub pka_scale: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S solver.initial-ph=6.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}
