use log::{debug, trace};
use crate::error::SortError;

/// Stable counting sort of `input` into `output`, for integer values in
/// `[0, k]`.
///
/// Every value is range-checked before `output` is written, so on error
/// `output` is unchanged. `input` is never modified.
pub fn counting_sort<T>(input: &[T], output: &mut [T], k: T) -> Result<(), SortError>
where
    T: Copy,
    usize: TryFrom<T>,
{
    counting_sort_by_key(input, output, k, |&value| value)
}

/// Counting sort of arbitrary records by an integer key in `[0, k]`.
/// Records with equal keys keep their input order.
pub fn counting_sort_by_key<T, K, F>(input: &[T], output: &mut [T], k: K, key: F) -> Result<(), SortError>
where
    T: Copy,
    usize: TryFrom<K>,
    F: Fn(&T) -> K,
{
    debug!("counting_sort: n = {}", input.len());
    if input.len() != output.len() {
        return Err(SortError::LengthMismatch { input: input.len(), output: output.len() });
    }
    let k = usize::try_from(k).map_err(|_| SortError::NegativeBound)?;
    let slots = k.checked_add(1).ok_or(SortError::BoundTooLarge)?;

    let mut count: Vec<usize> = Vec::new();
    count.try_reserve_exact(slots).map_err(|_| SortError::BoundTooLarge)?;
    count.resize(slots, 0);
    trace!("counting_sort: {} count slots", slots);

    // converted keys, so the placement pass does not call `key` again
    let mut keys: Vec<usize> = Vec::with_capacity(input.len());
    for (index, record) in input.iter().enumerate() {
        let slot = match usize::try_from(key(record)) {
            Ok(slot) if slot <= k => slot,
            _ => {
                debug!("counting_sort: value at index {index} outside [0, {k}]");
                return Err(SortError::ValueOutOfRange { index });
            }
        };
        count[slot] += 1;
        keys.push(slot);
    }

    // count[v] becomes the number of elements <= v
    for v in 1..slots {
        count[v] += count[v - 1];
    }

    // back to front keeps equal keys in input order
    for (&record, &slot) in input.iter().zip(keys.iter()).rev() {
        count[slot] -= 1;
        output[count[slot]] = record;
    }
    Ok(())
}
