pub mod bottom_up;
pub mod fptas;
pub mod memoized;

use crate::HashSet;
use anyhow::{anyhow, Result};

pub(crate) fn validate_items<T>(values: &[T], weights: &[T]) -> Result<()> {
    if values.is_empty() || weights.is_empty() {
        return Err(anyhow!("values and weights must not be empty"));
    }
    if values.len() != weights.len() {
        return Err(anyhow!(
            "values ({}) and weights ({}) must have the same length",
            values.len(),
            weights.len()
        ));
    }
    Ok(())
}

/// Walks a filled capacity-indexed table backwards and collects the
/// included items. `optimal(item, x)` must return the best total value
/// achievable with items `0..=item` under weight budget `x`.
pub(crate) fn reconstruct(
    values: &[u32],
    weights: &[u32],
    max_weight: usize,
    optimal: &dyn Fn(usize, usize) -> u64,
) -> Vec<usize> {
    let mut included: HashSet<usize> = HashSet::default();
    let mut remaining = max_weight;
    for item in (1..values.len()).rev() {
        let weight = weights[item] as usize;
        if weight <= remaining {
            let result_without = optimal(item - 1, remaining);
            let result_with = optimal(item - 1, remaining - weight) + values[item] as u64;
            // Strict comparison: exclusion wins ties, so lower-indexed
            // items are preferred among equally good choices
            if result_without < result_with {
                included.insert(item);
                remaining -= weight;
            }
        }
    }
    if weights[0] as usize <= remaining {
        included.insert(0);
    }
    let mut items: Vec<usize> = included.into_iter().collect();
    items.sort_unstable();
    items
}
