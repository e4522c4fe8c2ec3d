//! Sequence utilities
//!
//! Free functions for querying and rearranging ordered, index-addressable
//! sequences. The shuffle algorithms build on these and live in the
//! `shuffle` submodule.

pub mod shuffle;

use rand::Rng;

use crate::core::errors::{Error, Result};

/// Exchange the elements at positions `a` and `b`, checking bounds first.
pub fn swap<T>(seq: &mut [T], a: usize, b: usize) -> Result<()> {
    let len = seq.len();
    if a >= len {
        return Err(Error::IndexOutOfBounds { index: a, len });
    }
    if b >= len {
        return Err(Error::IndexOutOfBounds { index: b, len });
    }
    seq.swap(a, b);
    Ok(())
}

/// Pick one element uniformly at random.
pub fn random_item<'a, T, R: Rng + ?Sized>(seq: &'a [T], rng: &mut R) -> Result<&'a T> {
    if seq.is_empty() {
        return Err(Error::EmptySequence { op: "random_item" });
    }
    Ok(&seq[rng.gen_range(0..seq.len())])
}

/// Build the vector `[0, 1, ..., len - 1]`.
pub fn indices(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// Build the index vector for an existing sequence.
pub fn indices_of<T>(seq: &[T]) -> Vec<usize> {
    indices(seq.len())
}

/// Overwrite every position with its own index.
pub fn fill_indices(seq: &mut [usize]) {
    for (i, slot) in seq.iter_mut().enumerate() {
        *slot = i;
    }
}

/// Fill `dst` with the indices of `reference`, requiring equal lengths.
pub fn fill_indices_matching<T>(reference: &[T], dst: &mut [usize]) -> Result<()> {
    if dst.len() != reference.len() {
        return Err(Error::LengthMismatch {
            expected: reference.len(),
            actual: dst.len(),
        });
    }
    fill_indices(dst);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_swap_exchanges_elements() {
        let mut seq = vec!['a', 'b', 'c'];
        swap(&mut seq, 0, 2).unwrap();
        assert_eq!(seq, vec!['c', 'b', 'a']);
    }

    #[test]
    fn test_swap_same_index_is_identity() {
        let mut seq = vec![1, 2, 3];
        swap(&mut seq, 1, 1).unwrap();
        assert_eq!(seq, vec![1, 2, 3]);
    }

    #[test]
    fn test_swap_is_its_own_inverse() {
        let mut seq = vec!['p', 'q', 'r', 's'];
        swap(&mut seq, 0, 3).unwrap();
        swap(&mut seq, 0, 3).unwrap();
        assert_eq!(seq, vec!['p', 'q', 'r', 's']);
    }

    #[test]
    fn test_swap_rejects_out_of_bounds() {
        let mut seq = vec![1, 2, 3];
        assert_eq!(
            swap(&mut seq, 3, 0),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            swap(&mut seq, 0, 7),
            Err(Error::IndexOutOfBounds { index: 7, len: 3 })
        );
        // The failed calls must not have touched the sequence
        assert_eq!(seq, vec![1, 2, 3]);
    }

    #[test]
    fn test_swap_empty_sequence_rejects_any_index() {
        let mut seq: Vec<u8> = Vec::new();
        assert_eq!(
            swap(&mut seq, 0, 0),
            Err(Error::IndexOutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_random_item_returns_member() {
        let seq = vec![10, 20, 30, 40];
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..32 {
            let item = random_item(&seq, &mut rng).unwrap();
            assert!(seq.contains(item));
        }
    }

    #[test]
    fn test_random_item_single_element() {
        let seq = vec![99];
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(random_item(&seq, &mut rng).unwrap(), &99);
    }

    #[test]
    fn test_random_item_empty_sequence_errors() {
        let seq: Vec<u8> = Vec::new();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            random_item(&seq, &mut rng),
            Err(Error::EmptySequence { op: "random_item" })
        );
    }

    #[test]
    fn test_indices_builds_identity_vector() {
        assert_eq!(indices(0), Vec::<usize>::new());
        assert_eq!(indices(4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_indices_of_matches_sequence_length() {
        let seq = vec!['x', 'y', 'z'];
        assert_eq!(indices_of(&seq), vec![0, 1, 2]);
    }

    #[test]
    fn test_fill_indices_overwrites_contents() {
        let mut seq = vec![9, 9, 9, 9];
        fill_indices(&mut seq);
        assert_eq!(seq, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_fill_indices_matching_requires_equal_lengths() {
        let reference = vec!['a', 'b', 'c'];
        let mut dst = vec![0usize; 2];
        assert_eq!(
            fill_indices_matching(&reference, &mut dst),
            Err(Error::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );

        let mut dst = vec![7usize; 3];
        fill_indices_matching(&reference, &mut dst).unwrap();
        assert_eq!(dst, vec![0, 1, 2]);
    }
}
