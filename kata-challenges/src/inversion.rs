use anyhow::{anyhow, Result};
use rand::{
    distributions::{Distribution, Uniform},
    rngs::{SmallRng, StdRng},
    Rng, SeedableRng,
};
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub num_elements: usize,
    pub max_element: i32,
}

impl From<Vec<i32>> for Difficulty {
    fn from(arr: Vec<i32>) -> Self {
        Self {
            num_elements: arr[0] as usize,
            max_element: arr[1],
        }
    }
}

impl Into<Vec<i32>> for Difficulty {
    fn into(self) -> Vec<i32> {
        vec![self.num_elements as i32, self.max_element]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Solution {
    pub num_inversions: u64,
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
    pub sequence: Vec<i32>,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Challenge> {
        if difficulty.max_element < 0 {
            return Err(anyhow!("max_element must be non-negative"));
        }
        let mut rng = SmallRng::from_seed(StdRng::from_seed(seed.clone()).gen());

        let element_distr = Uniform::new_inclusive(0, difficulty.max_element);
        let sequence: Vec<i32> = (0..difficulty.num_elements)
            .map(|_| element_distr.sample(&mut rng))
            .collect();

        Ok(Challenge {
            seed: seed.clone(),
            difficulty: difficulty.clone(),
            sequence,
        })
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<()> {
        // Pairwise definition: (i, j) with i < j and sequence[i] > sequence[j]
        let mut expected = 0u64;
        for i in 0..self.sequence.len() {
            for j in (i + 1)..self.sequence.len() {
                if self.sequence[i] > self.sequence[j] {
                    expected += 1;
                }
            }
        }
        if solution.num_inversions != expected {
            return Err(anyhow!(
                "Invalid number of inversions. Expected: {}, Actual: {}",
                expected,
                solution.num_inversions
            ));
        }
        Ok(())
    }
}
