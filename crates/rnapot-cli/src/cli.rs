use clap::{Args, Parser, Subcommand, ValueEnum};
use rnapot::core::potential::scoring::{FilterPolicy, InterpolationMode};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "rnapot CLI - Derive a knowledge-based pseudo-energy potential from solved RNA structures and use it to estimate the Gibbs free energy of new ones.",
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

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive per-pair score tables from a training set of structure files.
    Train(TrainArgs),
    /// Estimate the Gibbs free energy of one or more structures.
    Score(ScoreArgs),
}

/// Arguments for the `train` subcommand.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Directory containing the training set of .pdb structure files.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub train_dir: PathBuf,

    /// Directory the per-pair score files are written into.
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// File name for the tabular summary of all derived scores.
    #[arg(long, default_value = "pseudo_energy_data.csv", value_name = "NAME")]
    pub summary: String,
}

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Path to a single structure file. When omitted, every .pdb file in the
    /// examples directory is scored instead.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Directory containing the per-pair score files.
    /// Overrides the config file; defaults to 'data/scores'.
    #[arg(short, long, value_name = "DIR")]
    pub scores_dir: Option<PathBuf>,

    /// Directory scanned for .pdb files when no input is given.
    #[arg(short, long, default_value = "data/examples", value_name = "DIR")]
    pub examples_dir: PathBuf,

    /// Optional TOML file with scoring options; CLI flags take precedence.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the interpolation strategy from the config file.
    #[arg(long, value_enum, value_name = "MODE")]
    pub mode: Option<ModeArg>,

    /// Override the score filter policy from the config file.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub filter: Option<FilterArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ModeArg {
    ExactLookup,
    LinearInterpolation,
}

impl From<ModeArg> for InterpolationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::ExactLookup => Self::ExactLookup,
            ModeArg::LinearInterpolation => Self::LinearInterpolation,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum FilterArg {
    ExcludeNanOnly,
    ExcludeNanAndInf,
}

impl From<FilterArg> for FilterPolicy {
    fn from(filter: FilterArg) -> Self {
        match filter {
            FilterArg::ExcludeNanOnly => Self::ExcludeNanOnly,
            FilterArg::ExcludeNanAndInf => Self::ExcludeNanAndInf,
        }
    }
}
