use crate::version::VERSION_STRING;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the Langton's ant simulator
#[derive(Parser, Debug)]
#[command(name = "langton_ant", version = VERSION_STRING, about = "🐜 Langton's ant on a board that grows on demand")]
pub struct Args {
    /// Path to a world file; a random world is generated when omitted
    #[arg(short = 'm', long = "map", conflicts_with = "suite")]
    pub map: Option<PathBuf>,

    /// Board rows of a generated world
    #[arg(long, default_value_t = 11)]
    pub rows: usize,

    /// Board columns of a generated world
    #[arg(long, default_value_t = 11)]
    pub cols: usize,

    /// Number of ants in a generated world
    #[arg(short = 'n', long = "ants", default_value_t = 1)]
    pub ants: usize,

    /// Random seed for a generated world
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of steps to simulate
    #[arg(short = 's', long, default_value_t = 1)]
    pub steps: u64,

    /// Compare the final world against this world file
    #[arg(long, conflicts_with = "suite")]
    pub expect: Option<PathBuf>,

    /// Run numbered cases from `<DIR>/in/testN` against `<DIR>/out/testN`
    #[arg(long, value_name = "DIR")]
    pub suite: Option<PathBuf>,

    /// Print the final world in the world file format
    #[arg(long, default_value_t = false)]
    pub snapshot: bool,

    /// Only print the summary
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
