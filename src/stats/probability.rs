//! Empirical probability records
//!
//! A `Probability` is one statistic over a batch of shuffle outcomes: the
//! raw observation count and its ratio against a caller-supplied
//! theoretical maximum.

use serde::{Deserialize, Serialize};

use crate::core::errors::{Error, Result};

/// One empirical probability computed over a sample batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Probability {
    /// Theoretical maximum number of qualifying observations.
    pub n: u64,
    /// Observations actually counted across the batch.
    pub observations: u64,
    /// `observations / n`.
    pub probability: f64,
}

impl Probability {
    /// Count observations over `samples` with `count` and normalize by `n`.
    ///
    /// `n` is the theoretical maximum of qualifying observations across the
    /// whole batch, so the result estimates how often an opportunity was
    /// taken rather than a plain per-sample frequency. A zero `n` is
    /// rejected instead of producing a NaN.
    pub fn compute<F>(samples: &[String], n: u64, count: F) -> Result<Probability>
    where
        F: Fn(&str) -> u64,
    {
        if n == 0 {
            return Err(Error::ZeroDenominator);
        }
        let observations: u64 = samples.iter().map(|sample| count(sample)).sum();
        Ok(Probability {
            n,
            observations,
            probability: observations as f64 / n as f64,
        })
    }
}
