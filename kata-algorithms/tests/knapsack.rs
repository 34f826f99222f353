mod tests {
    use kata_algorithms::knapsack::{bottom_up, fptas, memoized};
    use kata_challenges::knapsack::{Challenge, Difficulty};
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    fn brute_force_best_value(values: &[u32], weights: &[u32], max_weight: u32) -> u64 {
        let n = values.len();
        let mut best = 0u64;
        for mask in 0u32..(1u32 << n) {
            let mut value = 0u64;
            let mut weight = 0u64;
            for item in 0..n {
                if mask & (1 << item) != 0 {
                    value += values[item] as u64;
                    weight += weights[item] as u64;
                }
            }
            if weight <= max_weight as u64 && value > best {
                best = value;
            }
        }
        best
    }

    fn total_value(values: &[u32], items: &[usize]) -> u64 {
        items.iter().map(|&item| values[item] as u64).sum()
    }

    fn total_weight(weights: &[u32], items: &[usize]) -> u64 {
        items.iter().map(|&item| weights[item] as u64).sum()
    }

    #[test]
    fn test_textbook_example() {
        let values = [60, 100, 120];
        let weights = [10, 20, 30];
        let items = bottom_up::knapsack(&values, &weights, 50).unwrap();
        assert_eq!(items, vec![1, 2]);
        assert_eq!(total_value(&values, &items), 220);
        assert_eq!(memoized::knapsack(&values, &weights, 50).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_zero_capacity() {
        assert_eq!(
            bottom_up::knapsack(&[3, 4], &[2, 3], 0).unwrap(),
            Vec::<usize>::new()
        );
        // A weightless item still fits
        assert_eq!(bottom_up::knapsack(&[5], &[0], 0).unwrap(), vec![0]);
        assert_eq!(memoized::knapsack(&[5], &[0], 0).unwrap(), vec![0]);
    }

    #[test]
    fn test_tie_break_prefers_earlier_items() {
        // Both items are equally good; exclusion wins the tie on item 1
        let items = bottom_up::knapsack(&[10, 10], &[5, 5], 5).unwrap();
        assert_eq!(items, vec![0]);
        assert_eq!(memoized::knapsack(&[10, 10], &[5, 5], 5).unwrap(), vec![0]);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(bottom_up::knapsack(&[], &[], 10).is_err());
        assert!(bottom_up::knapsack(&[1, 2], &[1], 10).is_err());
        assert!(memoized::knapsack(&[], &[], 10).is_err());
        assert!(memoized::knapsack(&[1], &[1, 2], 10).is_err());
        assert!(fptas::knapsack_with_heuristic(&[], &[], 10.0, 0.5).is_err());
        assert!(fptas::knapsack_with_heuristic(&[1.0, 2.0], &[1.0], 10.0, 0.5).is_err());
        assert!(fptas::knapsack_with_heuristic(&[1.0], &[1.0], -1.0, 0.5).is_err());
        for epsilon in [0.0, 1.0, -0.5, 2.0, f64::NAN] {
            assert!(
                fptas::knapsack_with_heuristic(&[1.0], &[1.0], 10.0, epsilon).is_err(),
                "epsilon {} should be rejected",
                epsilon
            );
        }
    }

    #[test]
    fn test_matches_brute_force_on_random_instances() {
        let mut rng = SmallRng::seed_from_u64(2024);
        for _ in 0..30 {
            let n = rng.gen_range(1..=12);
            let values: Vec<u32> = (0..n).map(|_| rng.gen_range(0..=50)).collect();
            let weights: Vec<u32> = (0..n).map(|_| rng.gen_range(1..=15)).collect();
            let max_weight = rng.gen_range(0..=40);

            let best = brute_force_best_value(&values, &weights, max_weight);
            let items = bottom_up::knapsack(&values, &weights, max_weight).unwrap();
            assert!(total_weight(&weights, &items) <= max_weight as u64);
            assert_eq!(
                total_value(&values, &items),
                best,
                "suboptimal for values={:?} weights={:?} max_weight={}",
                values,
                weights,
                max_weight
            );

            // Both exact variants walk the same table values
            assert_eq!(
                memoized::knapsack(&values, &weights, max_weight).unwrap(),
                items
            );
        }
    }

    #[test]
    fn test_fptas_respects_error_bound() {
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..10 {
            let n = 12;
            let values: Vec<u32> = (0..n).map(|_| rng.gen_range(0..=100)).collect();
            // Every item fits on its own: weights stay below max_weight
            let weights: Vec<u32> = (0..n).map(|_| rng.gen_range(1..=10)).collect();
            let max_weight = 40u32;
            let best = brute_force_best_value(&values, &weights, max_weight) as f64;

            let values_f: Vec<f64> = values.iter().map(|&v| v as f64).collect();
            let weights_f: Vec<f64> = weights.iter().map(|&w| w as f64).collect();
            for epsilon in [0.1, 0.3, 0.5, 0.9] {
                let items = fptas::knapsack_with_heuristic(
                    &values_f,
                    &weights_f,
                    max_weight as f64,
                    epsilon,
                )
                .unwrap();
                assert!(total_weight(&weights, &items) <= max_weight as u64);
                let achieved = total_value(&values, &items) as f64;
                assert!(
                    achieved >= (1.0 - epsilon) * best - 1e-9,
                    "achieved {} < (1 - {}) * {} for values={:?} weights={:?}",
                    achieved,
                    epsilon,
                    best,
                    values,
                    weights
                );
            }
        }
    }

    #[test]
    fn test_fptas_all_zero_values() {
        let items = fptas::knapsack_with_heuristic(&[0.0, 0.0], &[1.0, 2.0], 10.0, 0.5).unwrap();
        assert_eq!(items, Vec::<usize>::new());
    }

    #[test]
    fn test_fptas_fractional_weights() {
        // Only item 1 fits within the fractional capacity
        let items =
            fptas::knapsack_with_heuristic(&[10.0, 8.0], &[2.5, 1.25], 1.5, 0.2).unwrap();
        assert_eq!(items, vec![1]);
    }

    #[test]
    fn test_solve_challenge_passes_verification() {
        let difficulty = Difficulty {
            num_items: 30,
            max_item_weight: 50,
            max_item_value: 100,
        };
        let challenge = Challenge::generate_instance(&[5u8; 32], &difficulty).unwrap();

        let exact = bottom_up::solve_challenge(&challenge).unwrap().unwrap();
        let exact_value = challenge.verify_solution(&exact).unwrap();
        let memo = memoized::solve_challenge(&challenge).unwrap().unwrap();
        assert_eq!(memo.items, exact.items);

        let approx = fptas::solve_challenge(&challenge, 0.2).unwrap().unwrap();
        let approx_value = challenge.verify_solution(&approx).unwrap();
        assert!(approx_value <= exact_value);
    }
}
