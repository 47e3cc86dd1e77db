pub mod args;
pub mod run;

pub use args::NeedleArgs;
pub use run::run;
