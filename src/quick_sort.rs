use log::{debug, trace};
use rand::Rng;

/// Randomized quicksort using the thread-local generator.
///
/// Expected recursion depth is O(log n); an adversarial pivot sequence can
/// still drive it to O(n).
pub fn quick_sort<T: PartialOrd>(arr: &mut [T]) {
    quick_sort_with_rng(arr, &mut rand::thread_rng());
}

/// Randomized quicksort drawing pivots from `rng`, for reproducible runs.
pub fn quick_sort_with_rng<T: PartialOrd, R: Rng + ?Sized>(arr: &mut [T], rng: &mut R) {
    debug!("quick_sort: n = {}", arr.len());
    let n = arr.len();
    if n > 1 {
        kernel(arr, 0, n - 1, rng);
    }
}

// Sorts arr[p..=r].
fn kernel<T: PartialOrd, R: Rng + ?Sized>(arr: &mut [T], p: usize, r: usize, rng: &mut R) {
    if p < r {
        let q = randomized_partition(arr, p, r, rng);
        if q > p {
            kernel(arr, p, q - 1, rng);
        }
        kernel(arr, q + 1, r, rng);
    }
}

fn randomized_partition<T: PartialOrd, R: Rng + ?Sized>(arr: &mut [T], p: usize, r: usize, rng: &mut R) -> usize {
    let i = rng.gen_range(p..=r);
    arr.swap(r, i);
    partition(arr, p, r)
}

/// Partitions arr[p..=r] around the pivot arr[r] with a single left to right
/// scan. Returns the pivot's final index: everything before it is <= pivot,
/// everything after it is > pivot.
pub(crate) fn partition<T: PartialOrd>(arr: &mut [T], p: usize, r: usize) -> usize {
    // i is the next slot of the <= region
    let mut i = p;
    for j in p..r {
        if arr[j] <= arr[r] {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, r);
    trace!("partition: [{p}, {r}] pivot at {i}");
    i
}
