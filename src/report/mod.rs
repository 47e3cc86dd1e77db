//! Report generation for alignment results.
//!
//! Three output formats are supported, selected by `--outfmt`:
//! 0 (pairwise blocks), 6 (tabular), 7 (tabular with comment headers).

pub mod pairwise;
pub mod tabular;

pub use pairwise::{write_pairwise, PairwiseConfig, DEFAULT_LINE_LENGTH};
pub use tabular::{write_tabular, write_tabular_with_comments};

use crate::align::GlobalAlignment;

/// Output format enum matching the `-outfmt` numbering used by the
/// common alignment toolchains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 0 = Pairwise alignment view
    #[default]
    Pairwise = 0,
    /// 6 = Tabular output (tab-separated values)
    Tabular = 6,
    /// 7 = Tabular output with comment lines (headers)
    TabularWithComments = 7,
}

impl OutputFormat {
    /// Parse output format from string (e.g., "0", "6", "7")
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim() {
            "0" => Ok(OutputFormat::Pairwise),
            "6" => Ok(OutputFormat::Tabular),
            "7" => Ok(OutputFormat::TabularWithComments),
            other => Err(format!(
                "Unsupported output format: {}. Supported: 0, 6, 7",
                other
            )),
        }
    }
}

/// One query/subject pair together with its computed alignment.
#[derive(Debug, Clone)]
pub struct AlignedPair {
    /// Query sequence ID
    pub query_id: String,
    /// Subject sequence ID
    pub subject_id: String,
    /// Global alignment of the pair
    pub alignment: GlobalAlignment,
}

/// Context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// Query file name or description
    pub query_name: Option<String>,
    /// Subject file name or description
    pub subject_name: Option<String>,
    /// Program name
    pub program: String,
    /// Version string
    pub version: Option<String>,
}

impl Default for ReportContext {
    fn default() -> Self {
        Self {
            query_name: None,
            subject_name: None,
            program: "needle".to_string(),
            version: None,
        }
    }
}
