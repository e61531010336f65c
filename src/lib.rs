pub mod errors;
pub mod io;
pub mod aligner;

pub use aligner::{AlignerConfig, GapModel, ParetoAligner, ParetoFront, Score};
