use log::{debug, trace};
use crate::error::SortError;
use crate::sentinel::Sentinel;

/// Top-down merge sort with sentinel-terminated merge buffers. Stable.
///
/// Fails with `SortError::SentinelCollision` if an element is not strictly
/// below `T::sentinel()` (integer `MAX`, float `INFINITY` or NaN). The slice is
/// left untouched in that case.
pub fn merge_sort<T: Sentinel>(arr: &mut [T]) -> Result<(), SortError> {
    debug!("merge_sort: n = {}", arr.len());
    let sentinel = T::sentinel();
    if let Some(index) = arr.iter().position(|x| !(*x < sentinel)) {
        debug!("merge_sort: element {index} reaches the sentinel");
        return Err(SortError::SentinelCollision { index });
    }
    let n = arr.len();
    if n > 1 {
        kernel(arr, 0, n - 1, merge);
    }
    Ok(())
}

/// Same recursion as `merge_sort`, but the merge tracks how many elements
/// remain in each buffer instead of relying on a sentinel. Never fails.
pub fn merge_sort_unbounded<T: PartialOrd + Copy>(arr: &mut [T]) {
    debug!("merge_sort_unbounded: n = {}", arr.len());
    let n = arr.len();
    if n > 1 {
        kernel(arr, 0, n - 1, merge_counted);
    }
}

// Sorts arr[p..=r].
fn kernel<T: Copy>(arr: &mut [T], p: usize, r: usize, merge: fn(&mut [T], usize, usize, usize)) {
    if p < r {
        let q = p + (r - p) / 2;
        kernel(arr, p, q, merge);
        kernel(arr, q + 1, r, merge);
        merge(arr, p, q, r);
    }
}

// Merges the sorted runs arr[p..=q] and arr[q+1..=r].
fn merge<T: Sentinel>(arr: &mut [T], p: usize, q: usize, r: usize) {
    trace!("merge: [{p}, {q}] + [{}, {r}]", q + 1);
    let mut left = Vec::with_capacity(q - p + 2);
    left.extend_from_slice(&arr[p..=q]);
    left.push(T::sentinel());
    let mut right = Vec::with_capacity(r - q + 1);
    right.extend_from_slice(&arr[q + 1..=r]);
    right.push(T::sentinel());

    let mut i = 0;
    let mut j = 0;
    for k in p..=r {
        if left[i] <= right[j] {
            arr[k] = left[i];
            i += 1;
        } else {
            arr[k] = right[j];
            j += 1;
        }
    }
}

fn merge_counted<T: PartialOrd + Copy>(arr: &mut [T], p: usize, q: usize, r: usize) {
    trace!("merge_counted: [{p}, {q}] + [{}, {r}]", q + 1);
    let left = arr[p..=q].to_vec();
    let right = arr[q + 1..=r].to_vec();

    let mut i = 0;
    let mut j = 0;
    for k in p..=r {
        if j == right.len() || (i < left.len() && left[i] <= right[j]) {
            arr[k] = left[i];
            i += 1;
        } else {
            arr[k] = right[j];
            j += 1;
        }
    }
}
