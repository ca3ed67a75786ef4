pub mod cache;
pub mod config;
pub mod engine;
pub mod input;
pub mod simulate;

use config::{Config, Strategy};

/// Total stone count for each configured depth, in configured order. The
/// memo strategy shares one cache across all depths.
pub fn totals(config: &Config, stones: &[u64]) -> Vec<u64> {
    let mut engine = engine::Engine::with_capacity(config.capacity);

    config
        .depths
        .iter()
        .map(|&depth| {
            let now = std::time::Instant::now();
            let total = match config.strategy {
                Strategy::Memo => engine.total(depth, stones),
                Strategy::Grouped => simulate::count_grouped(stones, depth),
            };
            log::info!("depth {depth}: {total} stones in {:?}", now.elapsed());

            if config.strategy == Strategy::Memo {
                let stats = engine.stats();
                log::debug!(
                    "cache: {}/{} entries, {} hits, {} misses, {} dropped",
                    engine.cache().len(),
                    engine.cache().capacity(),
                    stats.hits,
                    stats.misses,
                    stats.dropped
                );
            }

            total
        })
        .collect()
}

#[test]
fn test_totals_follow_depth_order() {
    let config = Config {
        depths: vec![25, 6, 0],
        ..Config::default()
    };
    assert_eq!(totals(&config, &[125, 17]), vec![55312, 22, 2]);
}

#[test]
fn test_totals_strategies_agree() {
    let memo = Config::default();
    let grouped = Config {
        strategy: Strategy::Grouped,
        ..Config::default()
    };
    let stones = [0, 1, 10, 99, 999];
    assert_eq!(totals(&memo, &stones), totals(&grouped, &stones));
}

#[test]
fn test_totals_deterministic() {
    let config = Config {
        depths: vec![25, 6],
        capacity: 32,
        ..Config::default()
    };
    let stones = [125, 17];
    assert_eq!(totals(&config, &stones), totals(&config, &stones));
    assert_eq!(totals(&config, &stones)[0], 55312);
}
