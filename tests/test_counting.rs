#[cfg(test)]
mod counting {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use textbook_sort::{counting_sort, counting_sort_by_key, SortError, DEFAULT_SEED};

    #[test]
    fn bound_violation_leaves_output_untouched() {
        let input = [3u32, 1, 11, 0];
        let mut output = [u32::MAX; 4];
        let err = counting_sort(&input, &mut output, 10).unwrap_err();
        assert_eq!(err, SortError::ValueOutOfRange { index: 2 });
        assert_eq!(err.to_string(), "value at index 2 lies outside the counting range [0, k]");
        assert_eq!(output, [u32::MAX; 4]);
    }

    #[test]
    fn negative_inputs_and_bounds() {
        let mut output = [0i8; 2];
        assert_eq!(counting_sort(&[1i8, -1], &mut output, 4), Err(SortError::ValueOutOfRange { index: 1 }));
        assert_eq!(counting_sort(&[1i8, 1], &mut output, -4), Err(SortError::NegativeBound));
    }

    #[test]
    fn mismatched_output() {
        let mut output = [0u8; 1];
        let err = counting_sort(&[1u8, 2], &mut output, 2).unwrap_err();
        assert_eq!(err.to_string(), "output buffer has length 1, input has length 2");
    }

    #[test]
    fn loose_bound() {
        // k far above the actual maximum only costs count slots
        let input = [4u16, 0, 4, 2];
        let mut output = [0u16; 4];
        counting_sort(&input, &mut output, 60_000).unwrap();
        assert_eq!(output, [0, 2, 4, 4]);
    }

    #[test]
    fn stable_records() {
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
        let input: Vec<(u8, usize)> = (0..1000).map(|i| (rng.gen_range(0..=9), i)).collect();
        let mut output = vec![(0u8, 0usize); input.len()];
        counting_sort_by_key(&input, &mut output, 9u8, |r| r.0).unwrap();

        let mut expected = input.clone();
        expected.sort_by_key(|r| r.0);
        assert_eq!(output, expected);
        assert_eq!(input[0].1, 0);
    }
}
