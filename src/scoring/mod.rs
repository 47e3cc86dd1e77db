//! Substitution scoring: the table type, built-in matrices, and the
//! EMBOSS-style text loader.

pub mod loader;
pub mod table;
pub mod tables;

pub use table::ScoringTable;
pub use tables::{blosum62, builtin, ednafull};
