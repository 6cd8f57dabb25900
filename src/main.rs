use std::process;
use std::time::Instant;
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use textbook_sort::{is_sorted, Config};

fn main() {
    let config = Config::from_env();
    env_logger::builder()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();
    info!("Config: {:?}", config);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let arr: Vec<u64> = (0..config.len)
        .map(|_| rng.gen_range(0..=config.max_value))
        .collect();
    let mut expected = arr.clone();
    expected.sort_unstable();

    let mut failures = 0;
    for algorithm in &config.algorithms {
        let mut data = arr.clone();
        let start = Instant::now();
        let result = algorithm.sort(&mut data);
        let duration = start.elapsed();

        match result {
            Ok(()) if is_sorted(&data) && data == expected => {
                info!("{algorithm} sort: ok ({:?})", duration);
            }
            Ok(()) => {
                error!("{algorithm} sort: output differs from reference");
                debug!("Output: {:?}", data);
                failures += 1;
            }
            Err(e) => {
                error!("{algorithm} sort: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        process::exit(1);
    }
}
