use clap::Args;
use std::path::PathBuf;

use crate::align::DEFAULT_MAX_MATRIX_CELLS;
use crate::report::DEFAULT_LINE_LENGTH;

#[derive(Args, Debug)]
pub struct NeedleArgs {
    #[arg(short, long)]
    pub query: PathBuf,
    #[arg(short, long)]
    pub subject: PathBuf,
    /// Scoring matrix: a builtin name (EDNAFULL, BLOSUM62) or a path to a
    /// matrix file in the standard whitespace-separated layout
    #[arg(short, long, default_value = "EDNAFULL")]
    pub matrix: String,
    /// Penalty for opening a gap (applied as a subtraction)
    #[arg(long, default_value_t = 10.0)]
    pub gap_open: f64,
    /// Penalty for each gap position after the first
    #[arg(long, default_value_t = 0.5)]
    pub gap_extend: f64,
    #[arg(short = 'n', long, default_value_t = 0)]
    pub num_threads: usize,
    /// Maximum matrix size in cells; pairs whose (n+1)*(m+1) exceeds this
    /// are refused instead of allocated
    #[arg(long, default_value_t = DEFAULT_MAX_MATRIX_CELLS)]
    pub max_matrix_cells: usize,
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output format.
    ///
    /// Supported formats:
    ///   0 = Pairwise alignment view (default)
    ///   6 = Tabular (tab-separated values)
    ///   7 = Tabular with comment lines (headers)
    #[arg(long, default_value = "0")]
    pub outfmt: String,
    /// Line length for pairwise alignment display
    #[arg(long, default_value_t = DEFAULT_LINE_LENGTH)]
    pub line_length: usize,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}
