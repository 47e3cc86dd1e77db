//! Unit test infrastructure for gosat
//!
//! Tests are organized by module:
//! - `align` - Global alignment engine (scores, traces, statistics)
//! - `scoring` - Builtin tables and the matrix file loader
//! - `report` - Output formats 0, 6, and 7
//! - `args` - CLI argument parsing
//! - `needle` - Driver helpers (FASTA input, matrix resolution)


pub mod align;
pub mod report;
