//! Gotoh's three-layer global alignment with affine gap penalties.
//!
//! The recurrence keeps three coupled (n+1) x (m+1) layers: `lower` for
//! gaps consuming query symbols, `upper` for gaps consuming subject
//! symbols, `middle` for substitutions and transitions out of either gap
//! layer. Each cell also records which predecessor produced its optimum,
//! and the traceback replays those choices, so tie-breaks here fix the
//! reported alignment.
//!
//! Tie-break order: lower/upper keep a running gap over opening a new one;
//! middle prefers the diagonal, then lower, then upper. This keeps gaps
//! unfragmented and the output deterministic.

use crate::error::{AlignError, Result};
use crate::scoring::ScoringTable;

use super::layers::{Choice, GapState, LayerMatrices};
use super::result::GlobalAlignment;
use super::traceback::reconstruct;

/// Default cap on (n+1) * (m+1) cells before an alignment is refused.
/// Six dense grids at this size sit around 2.5 GiB.
pub const DEFAULT_MAX_MATRIX_CELLS: usize = 100_000_000;

/// Parameters for a global alignment call.
#[derive(Debug, Clone, Copy)]
pub struct GlobalAlignConfig {
    /// Penalty for the first position of a gap (subtracted).
    pub gap_open: f64,
    /// Penalty for each further position of a gap (subtracted).
    pub gap_extend: f64,
    /// Upper bound on (n+1) * (m+1) checked before allocation.
    pub max_matrix_cells: usize,
}

impl Default for GlobalAlignConfig {
    fn default() -> Self {
        Self {
            gap_open: 10.0,
            gap_extend: 0.5,
            max_matrix_cells: DEFAULT_MAX_MATRIX_CELLS,
        }
    }
}

/// Compute the optimal global alignment of `query` against `subject`.
///
/// Both sequences are validated against the table's alphabet and the
/// matrix size is checked against the configured budget before any layer
/// is allocated.
pub fn align_global(
    query: &[u8],
    subject: &[u8],
    table: &ScoringTable,
    config: &GlobalAlignConfig,
) -> Result<GlobalAlignment> {
    if config.gap_open < 0.0
        || config.gap_extend < 0.0
        || config.gap_open.is_nan()
        || config.gap_extend.is_nan()
    {
        return Err(AlignError::InvalidPenalty {
            gap_open: config.gap_open,
            gap_extend: config.gap_extend,
        });
    }

    let q = table.encode(query)?;
    let s = table.encode(subject)?;

    let rows = q.len() + 1;
    let cols = s.len() + 1;
    let cells = rows.checked_mul(cols).unwrap_or(usize::MAX);
    if cells > config.max_matrix_cells {
        return Err(AlignError::MatrixTooLarge {
            rows,
            cols,
            limit: config.max_matrix_cells,
        });
    }

    let layers = build_layers(&q, &s, table, config);
    Ok(reconstruct(&layers, query, subject))
}

/// Fill all six layers for the encoded sequences.
fn build_layers(
    q: &[usize],
    s: &[usize],
    table: &ScoringTable,
    config: &GlobalAlignConfig,
) -> LayerMatrices {
    let n = q.len();
    let m = s.len();
    let open = config.gap_open;
    let extend = config.gap_extend;

    let mut layers = LayerMatrices::new(n + 1, m + 1);

    layers.set_score(GapState::Lower, 0, 0, 0.0);
    layers.set_score(GapState::Middle, 0, 0, 0.0);
    layers.set_score(GapState::Upper, 0, 0, 0.0);

    // First column: reachable only through a query-consuming gap run.
    // The upper layer stays at -inf there. Choice tags let the traceback
    // walk the boundary like any other run.
    for i in 1..=n {
        let cost = -(open + (i - 1) as f64 * extend);
        layers.set_score(GapState::Lower, i, 0, cost);
        layers.set_score(GapState::Middle, i, 0, cost);
        let tag = if i == 1 {
            Choice::FromMiddle
        } else {
            Choice::FromLower
        };
        layers.set_choice(GapState::Lower, i, 0, tag);
        layers.set_choice(GapState::Middle, i, 0, Choice::FromLower);
    }

    // First row: symmetric, through the upper layer.
    for j in 1..=m {
        let cost = -(open + (j - 1) as f64 * extend);
        layers.set_score(GapState::Upper, 0, j, cost);
        layers.set_score(GapState::Middle, 0, j, cost);
        let tag = if j == 1 {
            Choice::FromMiddle
        } else {
            Choice::FromUpper
        };
        layers.set_choice(GapState::Upper, 0, j, tag);
        layers.set_choice(GapState::Middle, 0, j, Choice::FromUpper);
    }

    for i in 1..=n {
        for j in 1..=m {
            // Lower: continue the gap, or open one out of middle. Ties
            // keep the continuation.
            let continue_gap = layers.score(GapState::Lower, i - 1, j) - extend;
            let open_gap = layers.score(GapState::Middle, i - 1, j) - open;
            if open_gap > continue_gap {
                layers.set_score(GapState::Lower, i, j, open_gap);
                layers.set_choice(GapState::Lower, i, j, Choice::FromMiddle);
            } else {
                layers.set_score(GapState::Lower, i, j, continue_gap);
                layers.set_choice(GapState::Lower, i, j, Choice::FromLower);
            }

            // Upper: the same over the subject.
            let continue_gap = layers.score(GapState::Upper, i, j - 1) - extend;
            let open_gap = layers.score(GapState::Middle, i, j - 1) - open;
            if open_gap > continue_gap {
                layers.set_score(GapState::Upper, i, j, open_gap);
                layers.set_choice(GapState::Upper, i, j, Choice::FromMiddle);
            } else {
                layers.set_score(GapState::Upper, i, j, continue_gap);
                layers.set_choice(GapState::Upper, i, j, Choice::FromUpper);
            }

            // Middle: substitution wins ties, then lower, then upper.
            let diagonal = layers.score(GapState::Middle, i - 1, j - 1)
                + f64::from(table.score_by_index(q[i - 1], s[j - 1]));
            let from_lower = layers.score(GapState::Lower, i, j);
            let from_upper = layers.score(GapState::Upper, i, j);
            if diagonal >= from_lower && diagonal >= from_upper {
                layers.set_score(GapState::Middle, i, j, diagonal);
                layers.set_choice(GapState::Middle, i, j, Choice::FromSubstitution);
            } else if from_lower >= from_upper {
                layers.set_score(GapState::Middle, i, j, from_lower);
                layers.set_choice(GapState::Middle, i, j, Choice::FromLower);
            } else {
                layers.set_score(GapState::Middle, i, j, from_upper);
                layers.set_choice(GapState::Middle, i, j, Choice::FromUpper);
            }
        }
    }

    layers
}
