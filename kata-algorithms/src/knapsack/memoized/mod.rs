//! Exact 0/1 knapsack via top-down memoization.
//!
//! Same recurrence and reconstruction as [`super::bottom_up`], but only
//! the subproblems reachable from `(n - 1, max_weight)` are evaluated.
//! The memo is filled with an explicit work stack; plain recursion would
//! grow the call stack linearly in n.

use super::{reconstruct, validate_items};
use anyhow::Result;
use kata_challenges::knapsack::{Challenge, Solution};

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    let items = knapsack(&challenge.values, &challenge.weights, challenge.max_weight)?;
    Ok(Some(Solution { items }))
}

/// Returns the indices of an optimal selection, sorted ascending.
/// Produces the same selection as [`super::bottom_up::knapsack`] on
/// every input: the tables agree on all evaluated cells, and every cell
/// the reconstruction reads has been evaluated.
pub fn knapsack(values: &[u32], weights: &[u32], max_weight: u32) -> Result<Vec<usize>> {
    validate_items(values, weights)?;

    let n = values.len();
    let cap = max_weight as usize;
    let mut memo: Vec<Vec<Option<u64>>> = vec![vec![None; cap + 1]; n];
    fill(values, weights, n - 1, cap, &mut memo);

    Ok(reconstruct(values, weights, cap, &|item, x| {
        memo[item][x].unwrap_or(0)
    }))
}

fn fill(
    values: &[u32],
    weights: &[u32],
    last_item: usize,
    curr_cap: usize,
    memo: &mut [Vec<Option<u64>>],
) {
    let mut stack = vec![(last_item, curr_cap)];
    while let Some((item, x)) = stack.pop() {
        if memo[item][x].is_some() {
            continue;
        }
        if item == 0 {
            memo[0][x] = Some(if weights[0] as usize <= x {
                values[0] as u64
            } else {
                0
            });
            continue;
        }
        let weight = weights[item] as usize;
        let missing_without = memo[item - 1][x].is_none();
        let missing_with = weight <= x && memo[item - 1][x - weight].is_none();
        if missing_without || missing_with {
            // Revisit once the required subproblems are in the memo
            stack.push((item, x));
            if missing_without {
                stack.push((item - 1, x));
            }
            if missing_with {
                stack.push((item - 1, x - weight));
            }
            continue;
        }
        let result_without = memo[item - 1][x].unwrap();
        memo[item][x] = Some(if weight > x {
            result_without
        } else {
            result_without.max(memo[item - 1][x - weight].unwrap() + values[item] as u64)
        });
    }
}
