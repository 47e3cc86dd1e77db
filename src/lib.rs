pub mod algorithm;
pub mod align;
pub mod error;
pub mod report;
pub mod scoring;
