//! Exact 0/1 knapsack via the bottom-up capacity-indexed dynamic program.
//!
//! `subproblems[item][x]` is the best total value achievable with items
//! `0..=item` under weight budget `x`; the recurrence either skips the
//! item (too heavy) or takes the better of excluding and including it.
//! O(n * max_weight) time and space.

use super::{reconstruct, validate_items};
use anyhow::Result;
use kata_challenges::knapsack::{Challenge, Solution};

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    let items = knapsack(&challenge.values, &challenge.weights, challenge.max_weight)?;
    Ok(Some(Solution { items }))
}

/// Returns the indices of an optimal selection, sorted ascending.
pub fn knapsack(values: &[u32], weights: &[u32], max_weight: u32) -> Result<Vec<usize>> {
    validate_items(values, weights)?;

    let n = values.len();
    let cap = max_weight as usize;
    let mut subproblems = vec![vec![0u64; cap + 1]; n];
    for x in 0..=cap {
        if weights[0] as usize <= x {
            subproblems[0][x] = values[0] as u64;
        }
    }
    for item in 1..n {
        let weight = weights[item] as usize;
        for x in 0..=cap {
            subproblems[item][x] = if weight > x {
                subproblems[item - 1][x]
            } else {
                subproblems[item - 1][x]
                    .max(subproblems[item - 1][x - weight] + values[item] as u64)
            };
        }
    }

    Ok(reconstruct(values, weights, cap, &|item, x| {
        subproblems[item][x]
    }))
}
