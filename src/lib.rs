pub mod algorithm;
pub mod config;
mod counting_sort;
mod error;
mod heap_sort;
mod insertion_sort;
mod merge_sort;
mod quick_sort;
mod sentinel;

pub use algorithm::{is_sorted, Algorithm, Element};
pub use config::{env_or, Config, DEFAULT_LEN, DEFAULT_MAX_VALUE, DEFAULT_SEED, MAX_COUNTING_BOUND};
pub use counting_sort::{counting_sort, counting_sort_by_key};
pub use error::SortError;
pub use heap_sort::heap_sort;
pub use insertion_sort::insertion_sort;
pub use merge_sort::{merge_sort, merge_sort_unbounded};
pub use quick_sort::{quick_sort, quick_sort_with_rng};
pub use sentinel::Sentinel;
