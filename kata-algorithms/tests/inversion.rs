mod tests {
    use kata_algorithms::inversion::merge_count;
    use kata_challenges::inversion::{Challenge, Difficulty};
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    fn brute_force_count<T: Ord>(sequence: &[T]) -> u64 {
        let mut count = 0u64;
        for i in 0..sequence.len() {
            for j in (i + 1)..sequence.len() {
                if sequence[i] > sequence[j] {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_example_sequence() {
        // Pairs: (2,1), (3,1), (8,6), (8,1), (6,1)
        assert_eq!(merge_count::count_inversions(&[2, 3, 8, 6, 1]), 5);
    }

    #[test]
    fn test_sorted_sequence_has_no_inversions() {
        let sorted: Vec<i32> = (0..100).collect();
        assert_eq!(merge_count::count_inversions(&sorted), 0);
        assert_eq!(merge_count::count_inversions(&[5, 5, 5, 5]), 0);
    }

    #[test]
    fn test_descending_sequence_has_all_inversions() {
        let descending: Vec<i32> = (0..50).rev().collect();
        assert_eq!(merge_count::count_inversions(&descending), 50 * 49 / 2);
    }

    #[test]
    fn test_trivial_sequences() {
        assert_eq!(merge_count::count_inversions::<i32>(&[]), 0);
        assert_eq!(merge_count::count_inversions(&[42]), 0);
        assert_eq!(merge_count::count_inversions(&[2, 1]), 1);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let sequence = vec![9, 1, 8, 2, 7, 3];
        let original = sequence.clone();
        merge_count::count_inversions(&sequence);
        assert_eq!(sequence, original);
    }

    #[test]
    fn test_generic_elements() {
        assert_eq!(merge_count::count_inversions(&["pear", "orange", "apple"]), 3);
    }

    #[test]
    fn test_matches_brute_force_on_random_sequences() {
        let mut rng = SmallRng::seed_from_u64(1337);
        for _ in 0..25 {
            let len = rng.gen_range(0..=64);
            let sequence: Vec<i32> = (0..len).map(|_| rng.gen_range(0..32)).collect();
            assert_eq!(
                merge_count::count_inversions(&sequence),
                brute_force_count(&sequence),
                "mismatch for {:?}",
                sequence
            );
        }
    }

    #[test]
    fn test_solve_challenge_passes_verification() {
        let difficulty = Difficulty {
            num_elements: 200,
            max_element: 100,
        };
        let challenge = Challenge::generate_instance(&[11u8; 32], &difficulty).unwrap();
        let solution = merge_count::solve_challenge(&challenge).unwrap().unwrap();
        challenge.verify_solution(&solution).unwrap();
    }
}
