//! Global alignment with affine gap penalties.
//!
//! The entry point is [`align_global`], which fills Gotoh's three score
//! layers for a query/subject pair and reconstructs the optimal
//! alignment from the recorded choices.

pub mod gotoh;
pub mod layers;
pub mod result;
pub mod traceback;

pub use gotoh::{align_global, GlobalAlignConfig, DEFAULT_MAX_MATRIX_CELLS};
pub use result::GlobalAlignment;
