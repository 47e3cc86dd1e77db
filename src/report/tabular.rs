//! Tabular output (outfmt 6 and 7)

use super::{AlignedPair, ReportContext};
use std::io::{self, Write};

/// Tabular column names, in output order
pub const TABULAR_COLUMNS: &[&str] = &[
    "qseqid",   // Query sequence ID
    "sseqid",   // Subject sequence ID
    "score",    // Alignment score
    "length",   // Alignment length
    "pident",   // Percentage of identical columns
    "nident",   // Number of identical columns
    "mismatch", // Number of mismatches
    "gapopen",  // Number of gap openings
    "gaps",     // Total gap columns
];

/// Write a single pair as one tab-separated line.
fn write_pair_fields<W: Write>(writer: &mut W, pair: &AlignedPair) -> io::Result<()> {
    let a = &pair.alignment;
    write!(writer, "{}\t{}", pair.query_id, pair.subject_id)?;
    write!(writer, "\t{:.1}", a.score)?;
    write!(writer, "\t{}", a.len())?;
    write!(writer, "\t{:.3}", a.identity())?;
    write!(writer, "\t{}", a.matches)?;
    write!(writer, "\t{}", a.mismatches)?;
    write!(writer, "\t{}", a.gap_opens)?;
    write!(writer, "\t{}", a.gaps)?;
    writeln!(writer)
}

/// Write pairs in outfmt 6 format
pub fn write_tabular<W: Write>(pairs: &[AlignedPair], writer: &mut W) -> io::Result<()> {
    for pair in pairs {
        write_pair_fields(writer, pair)?;
    }
    Ok(())
}

/// Write the outfmt 7 comment header
fn write_comment_header<W: Write>(
    writer: &mut W,
    context: &ReportContext,
    num_pairs: usize,
) -> io::Result<()> {
    let version = context.version.as_deref().unwrap_or("0.1.0");
    writeln!(writer, "# {} {}", context.program.to_uppercase(), version)?;

    if let Some(ref query) = context.query_name {
        writeln!(writer, "# Query: {}", query)?;
    }
    if let Some(ref subject) = context.subject_name {
        writeln!(writer, "# Subject: {}", subject)?;
    }

    if num_pairs > 0 {
        writeln!(writer, "# Fields: {}", TABULAR_COLUMNS.join(", "))?;
    }
    writeln!(writer, "# {} alignments", num_pairs)?;

    Ok(())
}

/// Write pairs in outfmt 7 format (tabular with comment headers)
pub fn write_tabular_with_comments<W: Write>(
    pairs: &[AlignedPair],
    writer: &mut W,
    context: &ReportContext,
) -> io::Result<()> {
    write_comment_header(writer, context, pairs.len())?;
    write_tabular(pairs, writer)
}
