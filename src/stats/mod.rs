//! Bias statistics
//!
//! Empirical probability records and the shuffle bias harness built on them.

pub mod probability;
pub mod results;

pub use probability::Probability;
pub use results::ShuffleResults;
