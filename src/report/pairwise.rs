//! Pairwise alignment output (outfmt 0)
//!
//! Traditional block view: a header per pair, a score/identity summary,
//! then the aligned sequences wrapped at a fixed width with a marker
//! line between them.

use super::{AlignedPair, ReportContext};
use std::io::{self, Write};

/// Line length for alignment display (default: 60)
pub const DEFAULT_LINE_LENGTH: usize = 60;

/// Configuration for pairwise output
#[derive(Debug, Clone)]
pub struct PairwiseConfig {
    /// Line length for sequence display
    pub line_length: usize,
}

impl Default for PairwiseConfig {
    fn default() -> Self {
        Self {
            line_length: DEFAULT_LINE_LENGTH,
        }
    }
}

/// Write all pairs in pairwise format (outfmt 0)
pub fn write_pairwise<W: Write>(
    pairs: &[AlignedPair],
    writer: &mut W,
    config: &PairwiseConfig,
    context: &ReportContext,
) -> io::Result<()> {
    let version = context.version.as_deref().unwrap_or("0.1.0");
    writeln!(writer, "{} {}", context.program.to_uppercase(), version)?;
    writeln!(writer)?;

    if let Some(ref query) = context.query_name {
        writeln!(writer, "Query: {}", query)?;
    }
    if let Some(ref subject) = context.subject_name {
        writeln!(writer, "Subject: {}", subject)?;
    }
    if context.query_name.is_some() || context.subject_name.is_some() {
        writeln!(writer)?;
    }

    if pairs.is_empty() {
        writeln!(writer, " ***** No alignments found *****")?;
        return Ok(());
    }

    for pair in pairs {
        write_pair_block(writer, pair, config)?;
    }

    Ok(())
}

/// Write one pair: identifiers, summary line, aligned rows.
fn write_pair_block<W: Write>(
    writer: &mut W,
    pair: &AlignedPair,
    config: &PairwiseConfig,
) -> io::Result<()> {
    let a = &pair.alignment;

    writeln!(writer, "Query= {}", pair.query_id)?;
    writeln!(writer, "Subject= {}", pair.subject_id)?;
    writeln!(writer)?;

    let align_len = a.len();
    let gap_pct = if align_len > 0 {
        100.0 * (a.gaps as f64) / (align_len as f64)
    } else {
        0.0
    };
    writeln!(writer, " Score = {:.1}", a.score)?;
    writeln!(
        writer,
        " Identities = {}/{} ({:.0}%), Gaps = {}/{} ({:.0}%)",
        a.matches,
        align_len,
        a.identity(),
        a.gaps,
        align_len,
        gap_pct
    )?;
    writeln!(writer)?;

    write_alignment_rows(writer, &a.aligned_query, &a.aligned_subject, config)?;

    Ok(())
}

/// Write the wrapped Query/marker/Sbjct rows.
///
/// Positions are 1-based over the ungapped sequences and do not advance
/// on gap columns; a chunk that consumes nothing shows end = start - 1.
fn write_alignment_rows<W: Write>(
    writer: &mut W,
    aligned_query: &str,
    aligned_subject: &str,
    config: &PairwiseConfig,
) -> io::Result<()> {
    let line_len = config.line_length.max(1);
    let q = aligned_query.as_bytes();
    let s = aligned_subject.as_bytes();

    let q_total = q.iter().filter(|&&c| c != b'-').count();
    let s_total = s.iter().filter(|&&c| c != b'-').count();
    let max_pos = q_total.max(s_total);
    let pos_width = max_pos.to_string().len().max(4);

    let mut q_consumed = 0usize;
    let mut s_consumed = 0usize;
    let mut offset = 0;

    while offset < q.len() {
        let end = (offset + line_len).min(q.len());
        let chunk_q = &q[offset..end];
        let chunk_s = &s[offset..end];

        let marker: String = chunk_q
            .iter()
            .zip(chunk_s.iter())
            .map(|(&qc, &sc)| {
                if qc == b'-' || sc == b'-' {
                    ' '
                } else if qc == sc {
                    '|'
                } else {
                    '.'
                }
            })
            .collect();

        let q_non_gap = chunk_q.iter().filter(|&&c| c != b'-').count();
        let s_non_gap = chunk_s.iter().filter(|&&c| c != b'-').count();

        writeln!(
            writer,
            "Query  {:>width$}  {}  {}",
            q_consumed + 1,
            String::from_utf8_lossy(chunk_q),
            q_consumed + q_non_gap,
            width = pos_width
        )?;
        writeln!(writer, "       {:>width$}  {}", "", marker, width = pos_width)?;
        writeln!(
            writer,
            "Sbjct  {:>width$}  {}  {}",
            s_consumed + 1,
            String::from_utf8_lossy(chunk_s),
            s_consumed + s_non_gap,
            width = pos_width
        )?;
        writeln!(writer)?;

        q_consumed += q_non_gap;
        s_consumed += s_non_gap;
        offset = end;
    }

    Ok(())
}
