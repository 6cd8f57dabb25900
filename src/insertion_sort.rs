use log::debug;

/// Stable in-place insertion sort. O(n) on sorted input, O(n^2) otherwise.
pub fn insertion_sort<T: PartialOrd + Copy>(arr: &mut [T]) {
    debug!("insertion_sort: n = {}", arr.len());
    for j in 1..arr.len() {
        let key = arr[j];
        // i is one past the slot being compared, so it never drops below 0
        let mut i = j;
        while i > 0 && arr[i - 1] > key {
            arr[i] = arr[i - 1];
            i -= 1;
        }
        arr[i] = key;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use super::*;

    #[test]
    fn test_textbook() {
        let mut arr = [5, 2, 4, 6, 1, 3];
        insertion_sort(&mut arr);
        assert_eq!(arr, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: [u32; 0] = [];
        insertion_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = [42i64];
        insertion_sort(&mut single);
        assert_eq!(single, [42]);
    }

    #[test]
    fn test_shuffled() {
        let mut arr: Vec<u64> = (1..=256).collect();
        arr.shuffle(&mut StdRng::seed_from_u64(12345));
        insertion_sort(&mut arr);
        assert_eq!(arr, (1..=256).collect::<Vec<u64>>());
    }

    #[test]
    fn test_reverse_and_duplicates() {
        let mut arr = [9, 9, 7, 7, 5, 5, -1, -1];
        insertion_sort(&mut arr);
        assert_eq!(arr, [-1, -1, 5, 5, 7, 7, 9, 9]);
    }

    #[test]
    fn test_floats() {
        let mut arr = [0.5, -2.25, 3.0, 0.5, -0.0];
        insertion_sort(&mut arr);
        assert_eq!(arr, [-2.25, -0.0, 0.5, 0.5, 3.0]);
    }
}
