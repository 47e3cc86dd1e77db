/// Result of a global alignment with full statistics
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalAlignment {
    /// Optimal alignment score
    pub score: f64,
    /// Query with gap characters inserted
    pub aligned_query: String,
    /// Subject with gap characters inserted
    pub aligned_subject: String,
    /// Number of identical columns
    pub matches: usize,
    /// Number of substituted columns
    pub mismatches: usize,
    /// Number of gap columns (total gap positions, not gap openings)
    pub gaps: usize,
    /// Number of gap openings
    pub gap_opens: usize,
}

impl GlobalAlignment {
    /// Total alignment length (number of columns including gaps)
    pub fn len(&self) -> usize {
        self.aligned_query.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_query.is_empty()
    }

    /// Calculate percent identity over alignment columns
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        100.0 * (self.matches as f64) / (self.len() as f64)
    }
}
