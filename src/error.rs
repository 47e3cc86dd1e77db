//! Error types for alignment and scoring-table construction.

use thiserror::Error;

/// Errors surfaced by the alignment engine and the scoring-table loaders.
#[derive(Debug, Error)]
pub enum AlignError {
    /// A sequence contains a symbol the scoring table does not define.
    /// Caught before any matrix work begins.
    #[error("symbol '{symbol}' at position {position} is not in the scoring table alphabet")]
    UnknownSymbol { symbol: char, position: usize },

    /// The scoring table has no entry for the requested symbol pair.
    #[error("scoring table has no entry for pair ('{a}', '{b}')")]
    MissingScore { a: char, b: char },

    /// The (n+1) x (m+1) matrices would exceed the configured cell budget.
    #[error("alignment matrices of {rows} x {cols} cells exceed the limit of {limit} cells")]
    MatrixTooLarge {
        rows: usize,
        cols: usize,
        limit: usize,
    },

    /// Gap penalties must be non-negative (they are subtracted).
    #[error("gap penalties must be non-negative, got open={gap_open}, extend={gap_extend}")]
    InvalidPenalty { gap_open: f64, gap_extend: f64 },

    /// Malformed scoring-matrix text.
    #[error("scoring matrix parse error at line {line}: {msg}")]
    MatrixParse { line: usize, msg: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AlignError>;
