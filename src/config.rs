use std::env;
use log::LevelFilter;
use crate::algorithm::Algorithm;

pub const DEFAULT_SEED: u64 = 12345;
pub const DEFAULT_LEN: usize = 1000;
pub const DEFAULT_MAX_VALUE: u64 = 10_000;
/// Largest `k` that `Algorithm::Counting` derives from its input.
pub const MAX_COUNTING_BOUND: usize = 1 << 24;

const _: () = {
    assert!(DEFAULT_LEN > 0, "DEFAULT_LEN must be positive");
    assert!((DEFAULT_MAX_VALUE as u128) <= (MAX_COUNTING_BOUND as u128), "DEFAULT_MAX_VALUE must fit a count array");
};

/// Runtime settings of the self-check binary, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub seed: u64,
    pub len: usize,
    pub max_value: u64,
    pub algorithms: Vec<Algorithm>,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_env() -> Config {
        Config {
            seed: env_or("SEED", DEFAULT_SEED),
            len: env_or("LEN", DEFAULT_LEN),
            max_value: env_or("MAX_VALUE", DEFAULT_MAX_VALUE),
            algorithms: algorithms_from_env(),
            log_level: env_or("LOG_LEVEL", LevelFilter::Info),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: DEFAULT_SEED,
            len: DEFAULT_LEN,
            max_value: DEFAULT_MAX_VALUE,
            algorithms: Algorithm::ALL.to_vec(),
            log_level: LevelFilter::Info,
        }
    }
}

/// Parses `key` from the environment, falling back to `default` when it is
/// unset or malformed.
pub fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

// "all", a single name, or a comma separated list. Unknown names are skipped.
fn algorithms_from_env() -> Vec<Algorithm> {
    let input = match env::var("ALGORITHM") {
        Ok(val) => val,
        Err(_) => return Algorithm::ALL.to_vec(),
    };
    if input.trim().eq_ignore_ascii_case("all") {
        return Algorithm::ALL.to_vec();
    }
    let selected: Vec<Algorithm> = input
        .split(',')
        .filter_map(|s| s.parse().ok())
        .collect();
    if selected.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        selected
    }
}
