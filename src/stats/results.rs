//! Shuffle bias harness
//!
//! Runs many independent shuffles of a fixed input and measures three bias
//! statistics over the outcomes. A uniform shuffle drives each ratio toward
//! the value a uniform random permutation implies; the harness exists to
//! flag bias, not to prove correctness.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::errors::{Error, Result};
use crate::sequence::shuffle::ShuffleVariant;
use crate::stats::probability::Probability;
use crate::text;

/// The three bias statistics for one shuffle algorithm, plus the rendered
/// outcomes they were computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShuffleResults {
    /// A value still directly precedes the value it preceded in the input.
    pub ordered_pair: Probability,
    /// The input's last value became the output's first value.
    pub last_to_first: Probability,
    /// A value kept its original input index.
    pub index_continuity: Probability,
    /// One rendered outcome per trial.
    pub samples: Vec<String>,
}

impl ShuffleResults {
    /// Run `shuffle` on a fresh copy of `input` once per trial and compute
    /// the three statistics over the collected outcomes.
    ///
    /// The same `rng` threads through every trial, so a seeded source
    /// reproduces the whole batch. Inputs shorter than two characters and a
    /// zero trial count are rejected.
    pub fn compute<R, F>(
        input: &str,
        mut shuffle: F,
        iterations: u32,
        guarantee_discontinuity: bool,
        trials: u32,
        rng: &mut R,
    ) -> Result<ShuffleResults>
    where
        R: Rng + ?Sized,
        F: FnMut(&mut [char], u32, bool, &mut R),
    {
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        if len < 2 {
            return Err(Error::InputTooShort { len });
        }
        if trials == 0 {
            return Err(Error::ZeroTrials);
        }

        let mut samples = Vec::with_capacity(trials as usize);
        let mut buffer = Vec::with_capacity(len);
        for _ in 0..trials {
            buffer.clear();
            buffer.extend_from_slice(&chars);
            shuffle(&mut buffer, iterations, guarantee_discontinuity, rng);
            samples.push(text::concatenated(buffer.iter()));
        }
        debug!(trials, len, "collected shuffle samples");

        let trial_count = u64::from(trials);
        let ordered_pair =
            Probability::compute(&samples, trial_count * (len as u64 - 1), ordered_pairs)?;
        let original_last = chars[len - 1];
        let last_to_first = Probability::compute(&samples, trial_count, |sample| {
            u64::from(sample.chars().next() == Some(original_last))
        })?;
        let index_continuity =
            Probability::compute(&samples, trial_count * len as u64, |sample| {
                continuous_indices(&chars, sample)
            })?;

        Ok(ShuffleResults {
            ordered_pair,
            last_to_first,
            index_continuity,
            samples,
        })
    }

    /// Like [`ShuffleResults::compute`], dispatching through a named variant.
    pub fn compute_variant<R: Rng + ?Sized>(
        input: &str,
        variant: ShuffleVariant,
        iterations: u32,
        guarantee_discontinuity: bool,
        trials: u32,
        rng: &mut R,
    ) -> Result<ShuffleResults> {
        Self::compute(
            input,
            |seq, iterations, guarantee, rng| variant.shuffle(seq, iterations, guarantee, rng),
            iterations,
            guarantee_discontinuity,
            trials,
            rng,
        )
    }
}

/// Count adjacent positions whose values are still consecutive and in input
/// order, measured by character code distance.
fn ordered_pairs(sample: &str) -> u64 {
    let chars: Vec<char> = sample.chars().collect();
    chars
        .windows(2)
        .filter(|pair| pair[1] as i64 - pair[0] as i64 == 1)
        .count() as u64
}

/// Count positions whose value sits at its original input index.
///
/// A duplicated input value resolves to its first occurrence, so every copy
/// of it landing at that one index counts.
fn continuous_indices(input: &[char], sample: &str) -> u64 {
    sample
        .chars()
        .enumerate()
        .filter(|&(i, c)| input.iter().position(|&original| original == c) == Some(i))
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// A shuffle that leaves the sequence alone.
    fn identity(_seq: &mut [char], _iterations: u32, _guarantee: bool, _rng: &mut StdRng) {}

    /// A shuffle that always reverses the sequence.
    fn reverse(seq: &mut [char], _iterations: u32, _guarantee: bool, _rng: &mut StdRng) {
        seq.reverse();
    }

    #[test]
    fn test_rejects_short_input() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            ShuffleResults::compute("x", identity, 1, false, 10, &mut rng).unwrap_err(),
            Error::InputTooShort { len: 1 }
        );
        assert_eq!(
            ShuffleResults::compute("", identity, 1, false, 10, &mut rng).unwrap_err(),
            Error::InputTooShort { len: 0 }
        );
    }

    #[test]
    fn test_rejects_zero_trials() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            ShuffleResults::compute("abc", identity, 1, false, 0, &mut rng).unwrap_err(),
            Error::ZeroTrials
        );
    }

    #[test]
    fn test_collects_one_sample_per_trial() {
        let mut rng = StdRng::seed_from_u64(5);
        let results =
            ShuffleResults::compute_variant("0123456789", ShuffleVariant::Ascending, 1, false, 25, &mut rng)
                .unwrap();
        assert_eq!(results.samples.len(), 25);
        for sample in &results.samples {
            let mut chars: Vec<char> = sample.chars().collect();
            chars.sort_unstable();
            let rendered: String = chars.into_iter().collect();
            assert_eq!(rendered, "0123456789");
        }
    }

    #[test]
    fn test_identity_shuffle_saturates_ordered_pairs() {
        // Every adjacent pair of "0123456789" is consecutive, every value
        // keeps its index, and the last value never reaches the front.
        let mut rng = StdRng::seed_from_u64(0);
        let results = ShuffleResults::compute("0123456789", identity, 1, false, 40, &mut rng).unwrap();
        assert_eq!(results.ordered_pair.n, 40 * 9);
        assert_eq!(results.ordered_pair.observations, 40 * 9);
        assert_eq!(results.ordered_pair.probability, 1.0);
        assert_eq!(results.last_to_first.n, 40);
        assert_eq!(results.last_to_first.probability, 0.0);
        assert_eq!(results.index_continuity.n, 40 * 10);
        assert_eq!(results.index_continuity.probability, 1.0);
    }

    #[test]
    fn test_reversing_shuffle_inverts_every_statistic() {
        let mut rng = StdRng::seed_from_u64(0);
        let results = ShuffleResults::compute("0123456789", reverse, 1, false, 40, &mut rng).unwrap();
        // Reversal destroys ascending pairs, moves the last value first,
        // and leaves no value at its original index for an even length
        assert_eq!(results.ordered_pair.probability, 0.0);
        assert_eq!(results.last_to_first.probability, 1.0);
        assert_eq!(results.index_continuity.probability, 0.0);
    }

    #[test]
    fn test_duplicate_values_resolve_to_first_occurrence() {
        // "aa" reversed is still "aa"; both positions hold 'a', whose first
        // input occurrence is index 0, so exactly one position counts.
        let mut rng = StdRng::seed_from_u64(0);
        let results = ShuffleResults::compute("aa", reverse, 1, false, 10, &mut rng).unwrap();
        assert_eq!(results.index_continuity.observations, 10);
        assert_eq!(results.index_continuity.n, 20);
    }

    #[test]
    fn test_ordered_pairs_counts_code_distance() {
        assert_eq!(ordered_pairs("0123456789"), 9);
        assert_eq!(ordered_pairs("9876543210"), 0);
        assert_eq!(ordered_pairs("0213465789"), 3);
        assert_eq!(ordered_pairs("ab"), 1);
        assert_eq!(ordered_pairs("ba"), 0);
    }

    #[test]
    fn test_continuous_indices_against_known_layouts() {
        let input: Vec<char> = "0123".chars().collect();
        assert_eq!(continuous_indices(&input, "0123"), 4);
        assert_eq!(continuous_indices(&input, "3210"), 0);
        assert_eq!(continuous_indices(&input, "0213"), 2);
    }

    #[test]
    fn test_seeded_runs_reproduce_samples() {
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let first = ShuffleResults::compute_variant(
            "abcdef",
            ShuffleVariant::DescendingReverse,
            2,
            true,
            50,
            &mut rng_a,
        )
        .unwrap();
        let second = ShuffleResults::compute_variant(
            "abcdef",
            ShuffleVariant::DescendingReverse,
            2,
            true,
            50,
            &mut rng_b,
        )
        .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_discontinuity_flag_threads_through_to_samples() {
        let mut rng = StdRng::seed_from_u64(3);
        let results = ShuffleResults::compute_variant(
            "0123456789",
            ShuffleVariant::Descending,
            1,
            true,
            200,
            &mut rng,
        )
        .unwrap();
        assert_eq!(results.last_to_first.observations, 0);
        assert_eq!(results.last_to_first.probability, 0.0);
    }
}
