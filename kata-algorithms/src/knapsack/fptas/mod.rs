//! Fully-polynomial-time approximation scheme for 0/1 knapsack.
//!
//! Values are scaled down by `m = epsilon * max(values) / n` and floored
//! to integers, then the value-indexed dual dynamic program is solved
//! exactly on the scaled instance: `subproblems[item][x]` is the minimum
//! total weight needed to reach scaled value >= x with items `0..=item`,
//! with `f64::INFINITY` marking unreachable targets. The selection found
//! this way has total (unscaled) value within a `(1 - epsilon)` factor
//! of the optimum.

use super::validate_items;
use crate::HashSet;
use anyhow::{anyhow, Result};
use kata_challenges::knapsack::{Challenge, Solution};

pub fn solve_challenge(challenge: &Challenge, epsilon: f64) -> Result<Option<Solution>> {
    let values: Vec<f64> = challenge.values.iter().map(|&v| v as f64).collect();
    let weights: Vec<f64> = challenge.weights.iter().map(|&w| w as f64).collect();
    let items =
        knapsack_with_heuristic(&values, &weights, challenge.max_weight as f64, epsilon)?;
    Ok(Some(Solution { items }))
}

/// Returns the indices of a selection whose total value is at least
/// `(1 - epsilon)` times the optimum, sorted ascending.
pub fn knapsack_with_heuristic(
    values: &[f64],
    weights: &[f64],
    max_weight: f64,
    epsilon: f64,
) -> Result<Vec<usize>> {
    validate_items(values, weights)?;
    if !max_weight.is_finite() || max_weight < 0.0 {
        return Err(anyhow!("max_weight must be finite and non-negative"));
    }
    if !(epsilon > 0.0 && epsilon < 1.0) {
        return Err(anyhow!("epsilon must be in (0, 1)"));
    }

    let n = values.len();
    let max_value = values.iter().cloned().fold(0.0f64, f64::max);
    if max_value <= 0.0 {
        // Nothing of value to pack; the empty selection is optimal
        return Ok(Vec::new());
    }
    let scale = epsilon * max_value / n as f64;
    let scaled: Vec<u64> = values.iter().map(|&v| (v / scale).floor() as u64).collect();

    Ok(min_weight_knapsack(&scaled, weights, max_weight))
}

/// Solves the scaled instance exactly via the value-indexed table.
/// O(n * sum(scaled values)) time and space.
fn min_weight_knapsack(values: &[u64], weights: &[f64], max_weight: f64) -> Vec<usize> {
    let n = values.len();
    let value_sum = values.iter().sum::<u64>() as usize;

    let mut subproblems = vec![vec![0f64; value_sum + 1]; n];
    for x in 0..=value_sum {
        subproblems[0][x] = if values[0] >= x as u64 {
            weights[0]
        } else {
            f64::INFINITY
        };
    }
    for item in 1..n {
        for x in 0..=value_sum {
            let result_without = subproblems[item - 1][x];
            let mut result_with = weights[item];
            if (values[item] as usize) < x {
                result_with += subproblems[item - 1][x - values[item] as usize];
            }
            subproblems[item][x] = result_without.min(result_with);
        }
    }

    reconstruct(values, weights, max_weight, value_sum, &subproblems)
}

fn reconstruct(
    values: &[u64],
    weights: &[f64],
    max_weight: f64,
    value_sum: usize,
    subproblems: &[Vec<f64>],
) -> Vec<usize> {
    // Highest reachable target value, reached by the shortest item prefix
    let mut best = None;
    'scan: for x in (0..=value_sum).rev() {
        for item in 0..values.len() {
            if subproblems[item][x] <= max_weight {
                best = Some((item, x));
                break 'scan;
            }
        }
    }
    let (last_item, best_target) = match best {
        Some(found) => found,
        None => (0, 0),
    };

    let mut included: HashSet<usize> = HashSet::default();
    let mut target = best_target as u64;
    let mut remaining = max_weight;
    for item in (1..=last_item).rev() {
        let result_without = subproblems[item - 1][target as usize];
        let mut result_with = weights[item];
        if values[item] < target {
            result_with += subproblems[item - 1][(target - values[item]) as usize];
        }
        // Strict comparison on required weight: exclusion wins ties.
        // Note the opposite polarity to the capacity-indexed walk, where
        // the objective is maximized instead of minimized.
        if result_without > result_with && weights[item] <= remaining {
            included.insert(item);
            target = target.saturating_sub(values[item]);
            remaining -= weights[item];
        }
    }
    if values[0] >= target && weights[0] <= remaining {
        included.insert(0);
    }
    let mut items: Vec<usize> = included.into_iter().collect();
    items.sort_unstable();
    items
}
