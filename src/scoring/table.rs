//! Substitution scoring table: a square symbol-by-symbol score grid.

use crate::error::{AlignError, Result};
use rustc_hash::FxHashMap;

/// A square substitution matrix over a finite symbol alphabet.
///
/// Scores are stored as a dense row-major grid in the order of `symbols`;
/// lookups by symbol go through a hash index, and the alignment hot loop
/// uses pre-encoded indices instead (`encode` + `score_by_index`).
#[derive(Debug)]
pub struct ScoringTable {
    symbols: Vec<u8>,
    index: FxHashMap<u8, usize>,
    scores: Vec<i32>,
}

impl ScoringTable {
    /// Build a table from a symbol alphabet and a dense row-major score
    /// grid of `symbols.len() * symbols.len()` entries.
    pub fn new(symbols: Vec<u8>, scores: Vec<i32>) -> Result<Self> {
        let n = symbols.len();
        if scores.len() != n * n {
            return Err(AlignError::MatrixParse {
                line: 0,
                msg: format!(
                    "expected {} scores for {} symbols, got {}",
                    n * n,
                    n,
                    scores.len()
                ),
            });
        }
        let mut index = FxHashMap::default();
        for (i, &sym) in symbols.iter().enumerate() {
            if index.insert(sym, i).is_some() {
                return Err(AlignError::MatrixParse {
                    line: 0,
                    msg: format!("duplicate symbol '{}' in alphabet", sym as char),
                });
            }
        }
        Ok(Self {
            symbols,
            index,
            scores,
        })
    }

    /// Construct from a compiled-in symbol order and score grid. The
    /// built-in tables are square and duplicate-free by construction.
    pub(crate) fn from_static(symbols: &[u8], scores: &[i8]) -> Self {
        let mut index = FxHashMap::default();
        for (i, &sym) in symbols.iter().enumerate() {
            index.insert(sym, i);
        }
        Self {
            symbols: symbols.to_vec(),
            index,
            scores: scores.iter().map(|&s| s as i32).collect(),
        }
    }

    /// The table's symbol alphabet, in storage order.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether the table defines a score for `symbol`.
    pub fn contains(&self, symbol: u8) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Substitution score for a symbol pair. Fails when either symbol is
    /// outside the alphabet; never substitutes a default.
    pub fn score(&self, a: u8, b: u8) -> Result<i32> {
        match (self.index.get(&a), self.index.get(&b)) {
            (Some(&i), Some(&j)) => Ok(self.score_by_index(i, j)),
            _ => Err(AlignError::MissingScore {
                a: a as char,
                b: b as char,
            }),
        }
    }

    /// Score lookup by pre-encoded indices. Callers obtain indices from
    /// `encode`, which guarantees they are in range.
    #[inline]
    pub fn score_by_index(&self, a: usize, b: usize) -> i32 {
        self.scores[a * self.symbols.len() + b]
    }

    /// Encode a sequence into table indices, failing on the first symbol
    /// outside the alphabet. Positions in the error are 1-based.
    pub fn encode(&self, seq: &[u8]) -> Result<Vec<usize>> {
        let mut encoded = Vec::with_capacity(seq.len());
        for (pos, &sym) in seq.iter().enumerate() {
            match self.index.get(&sym) {
                Some(&i) => encoded.push(i),
                None => {
                    return Err(AlignError::UnknownSymbol {
                        symbol: sym as char,
                        position: pos + 1,
                    })
                }
            }
        }
        Ok(encoded)
    }

    /// Whether score(a, b) == score(b, a) for every symbol pair.
    pub fn is_symmetric(&self) -> bool {
        let n = self.symbols.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.score_by_index(i, j) != self.score_by_index(j, i) {
                    return false;
                }
            }
        }
        true
    }
}
