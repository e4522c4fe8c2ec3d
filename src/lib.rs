//! Riffle
pub mod core;
pub mod logging;
pub mod sequence;
pub mod stats;
pub mod text;
