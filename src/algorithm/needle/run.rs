//! Driver for all-vs-all global alignment.
//!
//! Reads the query and subject FASTA files, aligns every query against
//! every subject in parallel, and writes the report in the requested
//! format. Pair order in the output is query-major input order.

use anyhow::{Context, Result};
use bio::io::fasta;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::align::{align_global, GlobalAlignConfig};
use crate::error::AlignError;
use crate::report::{
    write_pairwise, write_tabular, write_tabular_with_comments, AlignedPair, OutputFormat,
    PairwiseConfig, ReportContext,
};
use crate::scoring::{self, ScoringTable};

use super::args::NeedleArgs;

/// Resolve the matrix argument: a builtin name first, then a file path.
pub fn resolve_table(matrix: &str) -> Result<ScoringTable> {
    if let Some(table) = scoring::builtin(matrix) {
        return Ok(table);
    }
    scoring::loader::from_path(Path::new(matrix))
        .with_context(|| format!("Failed to load scoring matrix from {}", matrix))
}

/// Read a FASTA file into (id, uppercased sequence) pairs.
pub fn read_fasta(path: &Path) -> Result<Vec<(String, Vec<u8>)>> {
    let reader = fasta::Reader::from_file(path)?;
    Ok(reader
        .records()
        .filter_map(|r| r.ok())
        .map(|r| {
            let id = r.id().split_whitespace().next().unwrap_or("unknown").to_string();
            (id, r.seq().to_ascii_uppercase())
        })
        .collect())
}

pub fn run(args: NeedleArgs) -> Result<()> {
    let num_threads = if args.num_threads == 0 {
        num_cpus::get()
    } else {
        args.num_threads
    };
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .context("Failed to build thread pool")?;

    let format = OutputFormat::parse(&args.outfmt).map_err(anyhow::Error::msg)?;
    let table = resolve_table(&args.matrix)?;
    let align_config = GlobalAlignConfig {
        gap_open: args.gap_open,
        gap_extend: args.gap_extend,
        max_matrix_cells: args.max_matrix_cells,
    };

    if args.verbose {
        eprintln!("Reading queries...");
    }
    let queries = read_fasta(&args.query)?;
    if args.verbose {
        eprintln!("Reading subjects...");
    }
    let subjects = read_fasta(&args.subject)?;

    let num_pairs = queries.len() * subjects.len();
    if args.verbose {
        eprintln!(
            "Aligning {} x {} = {} pairs...",
            queries.len(),
            subjects.len(),
            num_pairs
        );
    }

    let bar = if args.verbose {
        let bar = ProgressBar::new(num_pairs as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
                .unwrap(),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let jobs: Vec<(usize, usize)> = (0..queries.len())
        .flat_map(|qi| (0..subjects.len()).map(move |si| (qi, si)))
        .collect();

    let pairs = jobs
        .par_iter()
        .map(|&(qi, si)| {
            let (query_id, query_seq) = &queries[qi];
            let (subject_id, subject_seq) = &subjects[si];
            let alignment = align_global(query_seq, subject_seq, &table, &align_config)?;
            bar.inc(1);
            Ok(AlignedPair {
                query_id: query_id.clone(),
                subject_id: subject_id.clone(),
                alignment,
            })
        })
        .collect::<std::result::Result<Vec<_>, AlignError>>()?;
    bar.finish();

    let context = ReportContext {
        query_name: Some(args.query.display().to_string()),
        subject_name: Some(args.subject.display().to_string()),
        program: "needle".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    };

    let stdout = io::stdout();
    let mut writer: Box<dyn Write> = if let Some(ref path) = args.out {
        Box::new(BufWriter::new(File::create(path)?))
    } else {
        Box::new(BufWriter::new(stdout.lock()))
    };

    match format {
        OutputFormat::Pairwise => {
            let config = PairwiseConfig {
                line_length: args.line_length,
            };
            write_pairwise(&pairs, &mut writer, &config, &context)?;
        }
        OutputFormat::Tabular => write_tabular(&pairs, &mut writer)?,
        OutputFormat::TabularWithComments => {
            write_tabular_with_comments(&pairs, &mut writer, &context)?;
        }
    }
    writer.flush()?;

    if args.verbose {
        eprintln!("Wrote {} alignments", pairs.len());
    }

    Ok(())
}
