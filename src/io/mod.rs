//! Reading classifier outputs produced outside this crate

mod predictions;

pub use predictions::ProbabilityTable;
