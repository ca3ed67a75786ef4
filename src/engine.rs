use crate::cache::{Key, MemoCache};

pub const MULTIPLIER: u64 = 2024;

const POW10: [u64; 20] = {
    let mut table = [1u64; 20];
    let mut i = 1;
    while i < table.len() {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};

/// Number of decimal digits in `n`. Zero has one digit.
#[inline]
pub fn digit_count(n: u64) -> u32 {
    let mut digits = 1;
    while digits < POW10.len() && n >= POW10[digits] {
        digits += 1;
    }
    digits as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Successors {
    One(u64),
    Two(u64, u64),
}

/// Applies the blink rule to a single stone.
#[inline]
pub fn successors(stone: u64) -> Successors {
    if stone == 0 {
        return Successors::One(1);
    }

    let digits = digit_count(stone);
    if digits % 2 == 0 {
        let divisor = POW10[(digits / 2) as usize];
        Successors::Two(stone / divisor, stone % divisor)
    } else {
        let next = stone
            .checked_mul(MULTIPLIER)
            .unwrap_or_else(|| panic!("stone {stone} overflows u64 when multiplied by {MULTIPLIER}"));
        Successors::One(next)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub hits: u64,
    pub misses: u64,
    pub dropped: u64,
}

/// Memoized stone counter. A single engine is meant to be reused across
/// depths so that shallower results feed deeper ones.
#[derive(Debug)]
pub struct Engine {
    cache: MemoCache,
    stats: Stats,
}

impl Engine {
    pub fn new(cache: MemoCache) -> Self {
        Self {
            cache,
            stats: Stats::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(MemoCache::with_capacity(capacity))
    }

    /// Number of stones `stone` turns into after `depth` blinks.
    pub fn expand(&mut self, depth: u8, stone: u64) -> u64 {
        if depth == 0 {
            return 1;
        }

        let key = Key::new(depth, stone);
        if let Some(count) = self.cache.lookup(key) {
            self.stats.hits += 1;
            return count;
        }
        self.stats.misses += 1;

        let next = depth - 1;
        let count = match successors(stone) {
            Successors::One(a) => self.expand(next, a),
            Successors::Two(a, b) => self.expand(next, a) + self.expand(next, b),
        };

        if !self.cache.insert(key, count) {
            if self.stats.dropped == 0 {
                log::warn!(
                    "memo cache full at {} entries, further results will be recomputed",
                    self.cache.capacity()
                );
            }
            self.stats.dropped += 1;
        }

        count
    }

    pub fn total(&mut self, depth: u8, stones: &[u64]) -> u64 {
        stones.iter().map(|&stone| self.expand(depth, stone)).sum()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn cache(&self) -> &MemoCache {
        &self.cache
    }

    pub fn into_cache(self) -> MemoCache {
        self.cache
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(MemoCache::default())
    }
}

#[test]
fn test_digit_count() {
    for (n, digits) in [
        (0, 1),
        (1, 1),
        (9, 1),
        (10, 2),
        (99, 2),
        (100, 3),
        (999, 3),
        (1000, 4),
        (999_999_999_999_999_999, 18),
        (1_000_000_000_000_000_000, 19),
        (u64::MAX, 20),
    ] {
        assert_eq!(digit_count(n), digits, "n = {n}");
    }
}

#[test]
fn test_successors() {
    assert_eq!(successors(0), Successors::One(1));
    assert_eq!(successors(1), Successors::One(2024));
    assert_eq!(successors(10), Successors::Two(1, 0));
    assert_eq!(successors(1000), Successors::Two(10, 0));
    assert_eq!(successors(2024), Successors::Two(20, 24));
    assert_eq!(successors(100), Successors::One(202400));
    assert_eq!(successors(99), Successors::Two(9, 9));
}

#[test]
#[should_panic(expected = "overflows")]
fn test_multiply_overflow_panics() {
    successors(1_000_000_000_000_000_000);
}

#[test]
fn test_expand_base_case() {
    let mut engine = Engine::with_capacity(16);
    for stone in [0, 1, 10, 100, 2024, u64::MAX] {
        assert_eq!(engine.expand(0, stone), 1);
    }
    assert!(engine.cache().is_empty());
}

#[test]
fn test_expand_single_step() {
    let mut engine = Engine::default();
    assert_eq!(engine.expand(1, 10), 2);
    assert_eq!(engine.expand(1, 1), 1);
    assert_eq!(engine.expand(1, 0), 1);
    // 3 digits, multiplies rather than splitting
    assert_eq!(engine.expand(1, 100), 1);
    assert_eq!(engine.expand(2, 100), 2);
}

#[test]
fn test_reference_totals() {
    let stones = [125, 17];
    let mut engine = Engine::default();
    assert_eq!(engine.total(6, &stones), 22);
    assert_eq!(engine.total(25, &stones), 55312);
    assert_eq!(engine.total(75, &stones), 65601038650482);
}

#[test]
fn test_warm_cache_matches_cold() {
    let stones = [0, 1, 10, 99, 999, 125, 17, 2024];
    let mut warm = Engine::default();
    let first: Vec<u64> = stones.iter().map(|&s| warm.expand(40, s)).collect();
    let second: Vec<u64> = stones.iter().map(|&s| warm.expand(40, s)).collect();
    assert_eq!(first, second);
    assert!(warm.stats().hits > 0);

    for (&stone, &count) in stones.iter().zip(&first) {
        let mut cold = Engine::default();
        assert_eq!(cold.expand(40, stone), count);
    }
}

#[test]
fn test_small_capacity_matches_default() {
    let stones = [125, 17, 0, 7];
    let expected = Engine::default().total(25, &stones);

    for capacity in [0, 1, 2, 16, 256] {
        let mut engine = Engine::with_capacity(capacity);
        assert_eq!(engine.total(25, &stones), expected, "capacity = {capacity}");
        assert!(engine.cache().len() <= capacity);
        if capacity < 16 {
            assert!(engine.stats().dropped > 0);
        }
    }
}

#[test]
fn test_counts_never_zero() {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let mut engine = Engine::default();

    for _ in 0..200 {
        let stone = rng.gen_range(0..1_000_000_000);
        let depth = rng.gen_range(0..=40);
        assert!(engine.expand(depth, stone) >= 1);
    }
}
