//! Longest common subsequence via the bottom-up prefix table.
//!
//! `subproblems[i][j]` is the LCS length of the first `i` characters of
//! `x` and the first `j` characters of `y`. O(m * n) time and space,
//! O(m + n) reconstruction.

use anyhow::Result;
use kata_challenges::lcs::{Challenge, Solution};

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        subsequence: longest_common_subsequence(&challenge.x, &challenge.y),
    }))
}

/// Returns a longest common subsequence of `x` and `y`. Either input
/// being empty yields the empty string.
pub fn longest_common_subsequence(x: &str, y: &str) -> String {
    if x.is_empty() || y.is_empty() {
        return String::new();
    }

    let x: Vec<char> = x.chars().collect();
    let y: Vec<char> = y.chars().collect();
    let (m, n) = (x.len(), y.len());
    let mut subproblems = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            subproblems[i][j] = if x[i - 1] == y[j - 1] {
                subproblems[i - 1][j - 1] + 1
            } else {
                subproblems[i - 1][j].max(subproblems[i][j - 1])
            };
        }
    }

    reconstruct(&x, &y, &subproblems)
}

fn reconstruct(x: &[char], y: &[char], subproblems: &[Vec<usize>]) -> String {
    let mut lcs = Vec::new();
    let (mut i, mut j) = (x.len(), y.len());
    while i >= 1 && j >= 1 {
        if x[i - 1] == y[j - 1] {
            lcs.push(x[i - 1]);
            i -= 1;
            j -= 1;
        } else if subproblems[i][j] == subproblems[i - 1][j] {
            // Ties drop a character from x first
            i -= 1;
        } else {
            j -= 1;
        }
    }
    lcs.iter().rev().collect()
}
