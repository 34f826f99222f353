//! Inversion counting via merge sort in O(n log n).
//!
//! An inversion is a pair of indices `(i, j)` with `i < j` and
//! `sequence[i] > sequence[j]`. Cross inversions are counted during the
//! merge: whenever an element is emitted from the right half, every
//! element still unconsumed in the left half is greater than it and
//! pairs with it.

use anyhow::Result;
use kata_challenges::inversion::{Challenge, Solution};

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        num_inversions: count_inversions(&challenge.sequence),
    }))
}

/// Counts inversions in `sequence`. The caller's slice is never
/// mutated; sorting happens on a private copy.
pub fn count_inversions<T: Ord + Clone>(sequence: &[T]) -> u64 {
    if sequence.is_empty() {
        return 0;
    }
    let mut working = sequence.to_vec();
    let mut aux = working.clone();
    sort_and_count(&mut working, &mut aux, 0, sequence.len())
}

// Sorts working[left..right] and returns the inversion count within it.
// The auxiliary buffer is shared down the recursion; sibling calls touch
// disjoint ranges.
fn sort_and_count<T: Ord + Clone>(
    working: &mut [T],
    aux: &mut [T],
    left: usize,
    right: usize,
) -> u64 {
    if right - left <= 1 {
        return 0;
    }
    let mid = left + (right - left) / 2;
    let left_count = sort_and_count(working, aux, left, mid);
    let right_count = sort_and_count(working, aux, mid, right);
    left_count + right_count + merge(working, aux, left, mid, right)
}

fn merge<T: Ord + Clone>(
    working: &mut [T],
    aux: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
) -> u64 {
    let (mut left_ptr, mut right_ptr) = (left, mid);
    let mut merged_ptr = left;
    let mut cross_count = 0u64;
    while left_ptr < mid && right_ptr < right {
        // Equal elements are not inversions; take the left one
        if working[left_ptr] <= working[right_ptr] {
            aux[merged_ptr] = working[left_ptr].clone();
            left_ptr += 1;
        } else {
            aux[merged_ptr] = working[right_ptr].clone();
            right_ptr += 1;
            cross_count += (mid - left_ptr) as u64;
        }
        merged_ptr += 1;
    }
    while left_ptr < mid {
        aux[merged_ptr] = working[left_ptr].clone();
        left_ptr += 1;
        merged_ptr += 1;
    }
    while right_ptr < right {
        aux[merged_ptr] = working[right_ptr].clone();
        right_ptr += 1;
        merged_ptr += 1;
    }
    working[left..right].clone_from_slice(&aux[left..right]);
    cross_count
}
