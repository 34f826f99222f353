use anyhow::{anyhow, Result};
use rand::{
    rngs::{SmallRng, StdRng},
    Rng, SeedableRng,
};
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};
use std::collections::HashSet;

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub num_items: usize,
    pub max_item_weight: u32,
    pub max_item_value: u32,
}

impl From<Vec<i32>> for Difficulty {
    fn from(arr: Vec<i32>) -> Self {
        Self {
            num_items: arr[0] as usize,
            max_item_weight: arr[1] as u32,
            max_item_value: arr[2] as u32,
        }
    }
}

impl Into<Vec<i32>> for Difficulty {
    fn into(self) -> Vec<i32> {
        vec![
            self.num_items as i32,
            self.max_item_weight as i32,
            self.max_item_value as i32,
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Solution {
    pub items: Vec<usize>,
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
    pub values: Vec<u32>,
    pub weights: Vec<u32>,
    pub max_weight: u32,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Challenge> {
        if difficulty.num_items == 0 {
            return Err(anyhow!("num_items must be positive"));
        }
        if difficulty.max_item_weight == 0 {
            return Err(anyhow!("max_item_weight must be positive"));
        }
        let mut rng = SmallRng::from_seed(StdRng::from_seed(seed.clone()).gen());

        // Weights w_i in [1, max_item_weight], values v_i in [0, max_item_value]
        let weights: Vec<u32> = (0..difficulty.num_items)
            .map(|_| rng.gen_range(1..=difficulty.max_item_weight))
            .collect();
        let values: Vec<u32> = (0..difficulty.num_items)
            .map(|_| rng.gen_range(0..=difficulty.max_item_value))
            .collect();

        // Half the total weight, so roughly half the items fit
        let max_weight: u32 = weights.iter().sum::<u32>() / 2;

        Ok(Challenge {
            seed: seed.clone(),
            difficulty: difficulty.clone(),
            values,
            weights,
            max_weight,
        })
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<u32> {
        let selected_items: HashSet<usize> = solution.items.iter().cloned().collect();
        if selected_items.len() != solution.items.len() {
            return Err(anyhow!("Duplicate items selected."));
        }

        let mut total_weight = 0u64;
        let mut total_value = 0u64;
        for &item in &selected_items {
            if item >= self.weights.len() {
                return Err(anyhow!("Item ({}) is out of bounds", item));
            }
            total_weight += self.weights[item] as u64;
            total_value += self.values[item] as u64;
        }

        if total_weight > self.max_weight as u64 {
            return Err(anyhow!(
                "Total weight ({}) exceeded max weight ({})",
                total_weight,
                self.max_weight
            ));
        }
        Ok(total_value as u32)
    }
}
