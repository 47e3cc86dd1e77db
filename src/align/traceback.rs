//! Reconstruction of the aligned strings from filled layers.

use super::layers::{Choice, GapState, LayerMatrices};
use super::result::GlobalAlignment;

/// Walk the recorded choices from (n, m) back to (0, 0) and build the
/// alignment.
///
/// The walk starts in the middle layer. A middle cell tagged with a gap
/// layer switches the walk into that layer without consuming a position;
/// substitution steps and gap steps each emit one column. Statistics are
/// tallied during the walk, with a gap open counted when a gap run
/// transitions back to the middle layer.
pub(crate) fn reconstruct(
    layers: &LayerMatrices,
    query: &[u8],
    subject: &[u8],
) -> GlobalAlignment {
    let n = query.len();
    let m = subject.len();
    let score = layers.score(GapState::Middle, n, m);

    let mut aligned_query = Vec::with_capacity(n + m);
    let mut aligned_subject = Vec::with_capacity(n + m);
    let mut matches = 0usize;
    let mut mismatches = 0usize;
    let mut gaps = 0usize;
    let mut gap_opens = 0usize;

    let mut state = GapState::Middle;
    let mut i = n;
    let mut j = m;

    while i > 0 || j > 0 {
        match state {
            GapState::Lower => {
                aligned_query.push(query[i - 1]);
                aligned_subject.push(b'-');
                gaps += 1;
                if layers.choice(GapState::Lower, i, j) == Choice::FromMiddle {
                    gap_opens += 1;
                    state = GapState::Middle;
                }
                i -= 1;
            }
            GapState::Upper => {
                aligned_query.push(b'-');
                aligned_subject.push(subject[j - 1]);
                gaps += 1;
                if layers.choice(GapState::Upper, i, j) == Choice::FromMiddle {
                    gap_opens += 1;
                    state = GapState::Middle;
                }
                j -= 1;
            }
            GapState::Middle => match layers.choice(GapState::Middle, i, j) {
                Choice::FromSubstitution => {
                    let q = query[i - 1];
                    let s = subject[j - 1];
                    aligned_query.push(q);
                    aligned_subject.push(s);
                    if q == s {
                        matches += 1;
                    } else {
                        mismatches += 1;
                    }
                    i -= 1;
                    j -= 1;
                }
                Choice::FromLower => state = GapState::Lower,
                Choice::FromUpper => state = GapState::Upper,
                _ => unreachable!(),
            },
        }
    }

    aligned_query.reverse();
    aligned_subject.reverse();

    GlobalAlignment {
        score,
        aligned_query: String::from_utf8_lossy(&aligned_query).into_owned(),
        aligned_subject: String::from_utf8_lossy(&aligned_subject).into_owned(),
        matches,
        mismatches,
        gaps,
        gap_opens,
    }
}
