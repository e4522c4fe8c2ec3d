//! In-place shuffle algorithms
//!
//! Four permutation algorithms that differ in traversal direction and in the
//! range the swap partner is drawn from, plus an enum naming them for
//! dispatch. Every function takes its random source as an explicit parameter
//! so callers control seeding and reproducibility.

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shuffle by sweeping front to back, swapping each position with a
/// uniformly random partner anywhere in the sequence.
///
/// Runs `seq.len() * iterations` full sweeps. When `guarantee_discontinuity`
/// is set and the first element still equals the original last element
/// afterwards, positions `0` and `len - 1` are swapped; only position `0` is
/// ever checked or fixed.
///
/// Sequences shorter than two elements and `iterations == 0` are no-ops.
pub fn shuffle_ascending<T, R>(
    seq: &mut [T],
    iterations: u32,
    guarantee_discontinuity: bool,
    rng: &mut R,
) where
    T: PartialEq + Clone,
    R: Rng + ?Sized,
{
    let len = seq.len();
    if len < 2 || iterations == 0 {
        return;
    }
    let original_last = guarantee_discontinuity.then(|| seq[len - 1].clone());
    for _ in 0..len * iterations as usize {
        for j in 0..len {
            let k = rng.gen_range(0..len);
            seq.swap(j, k);
        }
    }
    apply_discontinuity(seq, original_last);
}

/// Shuffle by sweeping front to back, swapping each position with a
/// uniformly random partner strictly after it.
///
/// The last position has no partner range and is only moved by earlier
/// swaps. Sweep count, discontinuity handling, and no-op cases match
/// [`shuffle_ascending`].
pub fn shuffle_ascending_forward<T, R>(
    seq: &mut [T],
    iterations: u32,
    guarantee_discontinuity: bool,
    rng: &mut R,
) where
    T: PartialEq + Clone,
    R: Rng + ?Sized,
{
    let len = seq.len();
    if len < 2 || iterations == 0 {
        return;
    }
    let original_last = guarantee_discontinuity.then(|| seq[len - 1].clone());
    for _ in 0..len * iterations as usize {
        for j in 0..len - 1 {
            let k = rng.gen_range(j + 1..len);
            seq.swap(j, k);
        }
    }
    apply_discontinuity(seq, original_last);
}

/// Shuffle by sweeping back to front, swapping each position with a
/// uniformly random partner anywhere in the sequence.
///
/// Sweep count, discontinuity handling, and no-op cases match
/// [`shuffle_ascending`].
pub fn shuffle_descending<T, R>(
    seq: &mut [T],
    iterations: u32,
    guarantee_discontinuity: bool,
    rng: &mut R,
) where
    T: PartialEq + Clone,
    R: Rng + ?Sized,
{
    let len = seq.len();
    if len < 2 || iterations == 0 {
        return;
    }
    let original_last = guarantee_discontinuity.then(|| seq[len - 1].clone());
    for _ in 0..len * iterations as usize {
        for j in (0..len).rev() {
            let k = rng.gen_range(0..len);
            seq.swap(j, k);
        }
    }
    apply_discontinuity(seq, original_last);
}

/// Shuffle by sweeping back to front, swapping each position with a
/// uniformly random partner at or below it.
///
/// Each sweep is a Fisher-Yates pass, so a single sweep already produces a
/// uniform permutation. The partner range includes the current position,
/// which lets an element stay in place. Sweep count, discontinuity handling,
/// and no-op cases match [`shuffle_ascending`].
pub fn shuffle_descending_reverse<T, R>(
    seq: &mut [T],
    iterations: u32,
    guarantee_discontinuity: bool,
    rng: &mut R,
) where
    T: PartialEq + Clone,
    R: Rng + ?Sized,
{
    let len = seq.len();
    if len < 2 || iterations == 0 {
        return;
    }
    let original_last = guarantee_discontinuity.then(|| seq[len - 1].clone());
    for _ in 0..len * iterations as usize {
        for j in (1..len).rev() {
            let k = rng.gen_range(0..=j);
            seq.swap(j, k);
        }
    }
    apply_discontinuity(seq, original_last);
}

/// Swap the first and last elements if the first still equals the original
/// last element. Callers pass `None` when the guarantee was not requested
/// and guarantee a sequence of at least two elements.
fn apply_discontinuity<T: PartialEq>(seq: &mut [T], original_last: Option<T>) {
    if let Some(last) = original_last {
        if seq[0] == last {
            let end = seq.len() - 1;
            seq.swap(0, end);
        }
    }
}

/// The four shuffle algorithms by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ShuffleVariant {
    /// Front-to-back sweep, partner drawn from the whole sequence.
    Ascending,
    /// Front-to-back sweep, partner drawn strictly after the position.
    AscendingForward,
    /// Back-to-front sweep, partner drawn from the whole sequence.
    Descending,
    /// Back-to-front sweep, partner drawn at or below the position.
    DescendingReverse,
}

impl ShuffleVariant {
    /// Every variant, in presentation order.
    pub const ALL: [ShuffleVariant; 4] = [
        ShuffleVariant::Ascending,
        ShuffleVariant::AscendingForward,
        ShuffleVariant::Descending,
        ShuffleVariant::DescendingReverse,
    ];

    /// Run this variant's algorithm on `seq`.
    pub fn shuffle<T, R>(
        self,
        seq: &mut [T],
        iterations: u32,
        guarantee_discontinuity: bool,
        rng: &mut R,
    ) where
        T: PartialEq + Clone,
        R: Rng + ?Sized,
    {
        match self {
            ShuffleVariant::Ascending => {
                shuffle_ascending(seq, iterations, guarantee_discontinuity, rng)
            }
            ShuffleVariant::AscendingForward => {
                shuffle_ascending_forward(seq, iterations, guarantee_discontinuity, rng)
            }
            ShuffleVariant::Descending => {
                shuffle_descending(seq, iterations, guarantee_discontinuity, rng)
            }
            ShuffleVariant::DescendingReverse => {
                shuffle_descending_reverse(seq, iterations, guarantee_discontinuity, rng)
            }
        }
    }
}

impl fmt::Display for ShuffleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShuffleVariant::Ascending => "ascending",
            ShuffleVariant::AscendingForward => "ascending-forward",
            ShuffleVariant::Descending => "descending",
            ShuffleVariant::DescendingReverse => "descending-reverse",
        };
        // pad so width specifiers work in table output
        f.pad(name)
    }
}
