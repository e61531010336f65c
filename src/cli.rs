use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use mgpareto::aligner::{GapModel, DEFAULT_MAX_STATES};

/// The output formats for the Pareto front
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputType {
    /// One "<matches> <gaps>" line per non-dominated score
    Text,

    /// The front as JSON object
    Json,
}

/// How gaps are counted
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum GapCounting {
    /// Each gap column counts as a gap
    Column,

    /// Each maximal run of gap columns counts as a single gap
    Run,
}

impl From<GapCounting> for GapModel {
    fn from(value: GapCounting) -> Self {
        match value {
            GapCounting::Column => GapModel::Column,
            GapCounting::Run => GapModel::Run,
        }
    }
}

/// Compute all Pareto-optimal (matches, gaps) scores of the global alignment of two sequences.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Set verbosity level. Use multiple times to increase the verbosity level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// First sequence in FASTA format (optionally gzipped).
    #[clap(help_heading = "Inputs")]
    pub seq1: PathBuf,

    /// Second sequence in FASTA format (optionally gzipped).
    #[clap(help_heading = "Inputs")]
    pub seq2: PathBuf,

    /// Output filename. If not given, defaults to stdout
    #[arg(short, long)]
    #[clap(help_heading = "Outputs")]
    pub output: Option<PathBuf>,

    /// Output file type.
    #[arg(value_enum, short = 'O', long, default_value = "text")]
    #[clap(help_heading = "Outputs")]
    pub output_type: OutputType,

    /// How to count gaps: every gap column, or every run of consecutive gap columns.
    #[arg(value_enum, short = 'g', long, default_value = "column")]
    #[clap(help_heading = "Alignment configuration")]
    pub gap_model: GapCounting,

    /// Maximum number of non-dominated scores per DP cell (at least 1)
    #[arg(
        short = 's',
        long,
        default_value_t = DEFAULT_MAX_STATES as u64,
        value_parser = clap::value_parser!(u64).range(1..),
        conflicts_with = "unbounded"
    )]
    #[clap(help_heading = "Alignment configuration")]
    pub max_states: u64,

    /// Do not limit the number of non-dominated scores per DP cell
    #[arg(long)]
    #[clap(help_heading = "Alignment configuration")]
    pub unbounded: bool,
}

impl CliArgs {
    pub fn max_states(&self) -> Option<usize> {
        if self.unbounded {
            None
        } else {
            Some(usize::try_from(self.max_states).unwrap_or(usize::MAX))
        }
    }
}
