//! Scoring-matrix text loader.
//!
//! Accepts the EMBOSS-style layout: optional '#' comment lines, a header
//! row listing the alphabet, then one labeled row of integer scores per
//! symbol. Columns are whitespace-delimited.

use crate::error::{AlignError, Result};
use rustc_hash::FxHashMap;
use std::path::Path;

use super::table::ScoringTable;

fn parse_symbol(token: &str, line: usize) -> Result<u8> {
    let bytes = token.as_bytes();
    if bytes.len() != 1 {
        return Err(AlignError::MatrixParse {
            line,
            msg: format!("symbol '{token}' must be a single character"),
        });
    }
    Ok(bytes[0])
}

/// Parse scoring-matrix text into a table.
pub fn from_str(text: &str) -> Result<ScoringTable> {
    let mut symbols: Vec<u8> = Vec::new();
    let mut seen_rows: FxHashMap<u8, usize> = FxHashMap::default();
    let mut scores: Vec<i32> = Vec::new();
    let mut rows_read = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if symbols.is_empty() {
            // Header row: the alphabet.
            for token in line.split_whitespace() {
                symbols.push(parse_symbol(token, line_no)?);
            }
            if symbols.is_empty() {
                return Err(AlignError::MatrixParse {
                    line: line_no,
                    msg: "empty header row".to_string(),
                });
            }
            scores = vec![0; symbols.len() * symbols.len()];
            continue;
        }

        let mut tokens = line.split_whitespace();
        let label = match tokens.next() {
            Some(t) => parse_symbol(t, line_no)?,
            None => continue,
        };
        let row = match symbols.iter().position(|&s| s == label) {
            Some(r) => r,
            None => {
                return Err(AlignError::MatrixParse {
                    line: line_no,
                    msg: format!("row symbol '{}' is not in the header", label as char),
                })
            }
        };
        if seen_rows.insert(label, line_no).is_some() {
            return Err(AlignError::MatrixParse {
                line: line_no,
                msg: format!("duplicate row for symbol '{}'", label as char),
            });
        }

        let mut count = 0usize;
        for token in tokens {
            if count >= symbols.len() {
                return Err(AlignError::MatrixParse {
                    line: line_no,
                    msg: format!("expected {} scores, found more", symbols.len()),
                });
            }
            let value: i32 = token.parse().map_err(|_| AlignError::MatrixParse {
                line: line_no,
                msg: format!("invalid score '{token}'"),
            })?;
            scores[row * symbols.len() + count] = value;
            count += 1;
        }
        if count != symbols.len() {
            return Err(AlignError::MatrixParse {
                line: line_no,
                msg: format!("expected {} scores, found {}", symbols.len(), count),
            });
        }
        rows_read += 1;
    }

    if symbols.is_empty() {
        return Err(AlignError::MatrixParse {
            line: 0,
            msg: "no header row found".to_string(),
        });
    }
    if rows_read != symbols.len() {
        return Err(AlignError::MatrixParse {
            line: 0,
            msg: format!("expected {} rows, found {}", symbols.len(), rows_read),
        });
    }

    ScoringTable::new(symbols, scores)
}

/// Load a scoring matrix from a file.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ScoringTable> {
    let text = std::fs::read_to_string(path)?;
    from_str(&text)
}
