use log::{debug, trace};

// 0-based layout: children of i are 2i+1 and 2i+2.
#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    2 * i + 2
}

/// In-place heap sort over a binary max-heap embedded in the slice.
pub fn heap_sort<T: PartialOrd>(arr: &mut [T]) {
    debug!("heap_sort: n = {}", arr.len());
    let mut size = build_max_heap(arr);
    while size > 1 {
        arr.swap(0, size - 1);
        size -= 1;
        trace!("heap_sort: heap size = {size}");
        max_heapify(arr, 0, size);
    }
}

/// Restores the max-heap property at `i`, given that both child subtrees
/// already satisfy it. Only the first `size` elements belong to the heap.
fn max_heapify<T: PartialOrd>(arr: &mut [T], i: usize, size: usize) {
    let l = left(i);
    let r = right(i);
    let mut largest = i;
    if l < size && arr[l] > arr[largest] {
        largest = l;
    }
    if r < size && arr[r] > arr[largest] {
        largest = r;
    }
    if largest != i {
        arr.swap(i, largest);
        max_heapify(arr, largest, size);
    }
}

// Returns the heap size, which is the full slice length.
fn build_max_heap<T: PartialOrd>(arr: &mut [T]) -> usize {
    let size = arr.len();
    for i in (0..size / 2).rev() {
        max_heapify(arr, i, size);
    }
    size
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use super::*;

    fn is_max_heap<T: PartialOrd>(arr: &[T], size: usize) -> bool {
        (1..size).all(|i| arr[(i - 1) / 2] >= arr[i])
    }

    #[test]
    fn test_textbook() {
        let mut arr = [5, 2, 4, 6, 1, 3];
        heap_sort(&mut arr);
        assert_eq!(arr, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: [f64; 0] = [];
        heap_sort(&mut empty);
        let mut single = [u64::MAX];
        heap_sort(&mut single);
        assert_eq!(single, [u64::MAX]);
    }

    #[test]
    fn test_build_max_heap() {
        let mut rng = StdRng::seed_from_u64(12345);
        for n in 0..100 {
            let mut arr: Vec<i32> = (0..n).map(|_| rng.gen_range(-50..50)).collect();
            assert_eq!(build_max_heap(&mut arr), arr.len());
            assert!(is_max_heap(&arr, arr.len()), "not a heap: {:?}", arr);
        }
    }

    #[test]
    fn test_max_heapify_respects_size() {
        // the root sinks only within the first 3 slots
        let mut arr = [1, 5, 3, 100];
        max_heapify(&mut arr, 0, 3);
        assert_eq!(arr, [5, 1, 3, 100]);
    }

    #[test]
    fn test_textbook_heapify() {
        let mut arr = [16, 4, 10, 14, 7, 9, 3, 2, 8, 1];
        let n = arr.len();
        max_heapify(&mut arr, 1, n);
        assert_eq!(arr, [16, 14, 10, 8, 7, 9, 3, 2, 4, 1]);
    }

    #[test]
    fn test_random() {
        let mut rng = StdRng::seed_from_u64(12345);
        let mut arr: Vec<u64> = (0..2048).map(|_| rng.gen_range(0..100)).collect();
        let mut expected = arr.clone();
        expected.sort_unstable();
        heap_sort(&mut arr);
        assert_eq!(arr, expected);
    }
}
