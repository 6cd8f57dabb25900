use std::fmt;
use std::str::FromStr;
use log::debug;
use crate::config::MAX_COUNTING_BOUND;
use crate::counting_sort::counting_sort_by_key;
use crate::error::SortError;
use crate::heap_sort::heap_sort;
use crate::insertion_sort::insertion_sort;
use crate::merge_sort::merge_sort;
use crate::quick_sort::quick_sort;
use crate::sentinel::Sentinel;

/// Numeric element types every `Algorithm` can run on.
pub trait Element: Sentinel {
    /// Whether counting sort can index a count array with this type.
    const COUNTABLE: bool;

    /// Count-array slot of the value; `None` if it is negative or not an integer.
    fn counting_key(&self) -> Option<usize>;
}

macro_rules! impl_element_int {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const COUNTABLE: bool = true;

                #[inline]
                fn counting_key(&self) -> Option<usize> {
                    usize::try_from(*self).ok()
                }
            }
        )*
    };
}

macro_rules! impl_element_float {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const COUNTABLE: bool = false;

                #[inline]
                fn counting_key(&self) -> Option<usize> {
                    None
                }
            }
        )*
    };
}

impl_element_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_element_float!(f32, f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Insertion,
    Merge,
    Heap,
    Quick,
    Counting,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Quick,
        Algorithm::Counting,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Heap => "heap",
            Algorithm::Quick => "quick",
            Algorithm::Counting => "counting",
        }
    }

    /// Sorts `arr` ascending with this algorithm.
    ///
    /// Counting sort runs with `k` set to the largest value and writes back
    /// into `arr` from a copy of the input. The count array has `k + 1`
    /// slots, so a largest value above `MAX_COUNTING_BOUND` fails with
    /// `SortError::BoundTooLarge` instead of allocating it. Call
    /// `counting_sort` directly to choose a larger `k` explicitly.
    pub fn sort<T: Element>(self, arr: &mut [T]) -> Result<(), SortError> {
        match self {
            Algorithm::Insertion => insertion_sort(arr),
            Algorithm::Merge => merge_sort(arr)?,
            Algorithm::Heap => heap_sort(arr),
            Algorithm::Quick => quick_sort(arr),
            Algorithm::Counting => {
                if !T::COUNTABLE {
                    return Err(SortError::Unsupported { algorithm: self.name() });
                }
                let k = arr.iter().filter_map(T::counting_key).max().unwrap_or(0);
                if k > MAX_COUNTING_BOUND {
                    debug!("{self} sort: largest value {k} exceeds {MAX_COUNTING_BOUND}");
                    return Err(SortError::BoundTooLarge);
                }
                let input = arr.to_vec();
                // out-of-range sentinel for negative values
                counting_sort_by_key(&input, arr, k, |v| v.counting_key().unwrap_or(usize::MAX))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let name = lowered.strip_suffix("_sort").unwrap_or(lowered.as_str());
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == name)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.trim().to_string()))
    }
}

/// True if every adjacent pair is in non-decreasing order.
pub fn is_sorted<T: PartialOrd>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}
