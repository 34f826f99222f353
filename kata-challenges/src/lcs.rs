use anyhow::{anyhow, Result};
use rand::{
    rngs::{SmallRng, StdRng},
    Rng, SeedableRng,
};
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub num_chars: usize,
    pub alphabet_size: u32,
}

impl From<Vec<i32>> for Difficulty {
    fn from(arr: Vec<i32>) -> Self {
        Self {
            num_chars: arr[0] as usize,
            alphabet_size: arr[1] as u32,
        }
    }
}

impl Into<Vec<i32>> for Difficulty {
    fn into(self) -> Vec<i32> {
        vec![self.num_chars as i32, self.alphabet_size as i32]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Solution {
    pub subsequence: String,
}

impl TryFrom<Map<String, Value>> for Solution {
    type Error = serde_json::Error;

    fn try_from(v: Map<String, Value>) -> Result<Self, Self::Error> {
        from_value(Value::Object(v))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub difficulty: Difficulty,
    pub x: String,
    pub y: String,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Challenge> {
        if difficulty.alphabet_size == 0 || difficulty.alphabet_size > 26 {
            return Err(anyhow!("alphabet_size must be in [1, 26]"));
        }
        let mut rng = SmallRng::from_seed(StdRng::from_seed(seed.clone()).gen());

        let mut random_string = |len: usize| -> String {
            (0..len)
                .map(|_| (b'a' + rng.gen_range(0..difficulty.alphabet_size) as u8) as char)
                .collect()
        };
        let x = random_string(difficulty.num_chars);
        let y = random_string(difficulty.num_chars);

        Ok(Challenge {
            seed: seed.clone(),
            difficulty: difficulty.clone(),
            x,
            y,
        })
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<()> {
        if !is_subsequence(&solution.subsequence, &self.x) {
            return Err(anyhow!("'{}' is not a subsequence of x", solution.subsequence));
        }
        if !is_subsequence(&solution.subsequence, &self.y) {
            return Err(anyhow!("'{}' is not a subsequence of y", solution.subsequence));
        }
        let expected = lcs_length(&self.x, &self.y);
        let actual = solution.subsequence.chars().count();
        if actual != expected {
            return Err(anyhow!(
                "Common subsequence is not longest. Expected length: {}, Actual: {}",
                expected,
                actual
            ));
        }
        Ok(())
    }
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut chars = haystack.chars();
    needle.chars().all(|c| chars.any(|h| h == c))
}

// Length-only LCS table, independent of the solvers
fn lcs_length(x: &str, y: &str) -> usize {
    let x: Vec<char> = x.chars().collect();
    let y: Vec<char> = y.chars().collect();
    let mut subproblems = vec![vec![0usize; y.len() + 1]; x.len() + 1];
    for i in 1..=x.len() {
        for j in 1..=y.len() {
            subproblems[i][j] = if x[i - 1] == y[j - 1] {
                subproblems[i - 1][j - 1] + 1
            } else {
                subproblems[i - 1][j].max(subproblems[i][j - 1])
            };
        }
    }
    subproblems[x.len()][y.len()]
}
