//! Dense score and choice layers for the three-state recurrence.

/// The three states of the affine-gap recurrence.
///
/// `Lower` consumes query symbols only (gap in the subject), `Upper`
/// consumes subject symbols only (gap in the query), `Middle` holds the
/// substitution state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapState {
    Lower,
    Middle,
    Upper,
}

/// Predecessor transition recorded per cell, consumed by the traceback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Optimum came from the lower layer.
    FromLower,
    /// Optimum came from the middle layer (in lower/upper: a gap open).
    FromMiddle,
    /// Optimum came from the upper layer.
    FromUpper,
    /// Diagonal substitution step (middle layer only).
    FromSubstitution,
}

/// Dense row-major grid of (n+1) x (m+1) cells.
pub struct Grid<T: Copy> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Grid<T> {
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            data: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

/// The six grids of one alignment call: a score layer and a choice layer
/// per `GapState`, all sharing the same shape.
pub struct LayerMatrices {
    scores: [Grid<f64>; 3],
    choices: [Grid<Choice>; 3],
}

impl LayerMatrices {
    /// Allocate all layers with scores at negative infinity (unreachable).
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            scores: [
                Grid::new(rows, cols, f64::NEG_INFINITY),
                Grid::new(rows, cols, f64::NEG_INFINITY),
                Grid::new(rows, cols, f64::NEG_INFINITY),
            ],
            choices: [
                Grid::new(rows, cols, Choice::FromSubstitution),
                Grid::new(rows, cols, Choice::FromSubstitution),
                Grid::new(rows, cols, Choice::FromSubstitution),
            ],
        }
    }

    #[inline]
    pub fn score(&self, state: GapState, row: usize, col: usize) -> f64 {
        self.scores[state as usize].get(row, col)
    }

    #[inline]
    pub fn set_score(&mut self, state: GapState, row: usize, col: usize, value: f64) {
        self.scores[state as usize].set(row, col, value);
    }

    #[inline]
    pub fn choice(&self, state: GapState, row: usize, col: usize) -> Choice {
        self.choices[state as usize].get(row, col)
    }

    #[inline]
    pub fn set_choice(&mut self, state: GapState, row: usize, col: usize, value: Choice) {
        self.choices[state as usize].set(row, col, value);
    }

    pub fn rows(&self) -> usize {
        self.scores[0].rows()
    }

    pub fn cols(&self) -> usize {
        self.scores[0].cols()
    }
}
