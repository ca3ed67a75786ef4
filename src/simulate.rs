//! Direct, non-memoized evolution of a stone sequence.
//!
//! `simulate` materializes every stone and is only practical for small
//! depths. `count_grouped` keeps a histogram of stone values instead and
//! scales to the same depths as the memoized engine.

use {
    crate::engine::{successors, Successors},
    rustc_hash::FxHashMap,
};

/// One blink over the whole sequence. Split stones are replaced in place by
/// their left and right halves, so order is preserved.
pub fn blink(stones: &[u64]) -> Vec<u64> {
    let mut out = Vec::with_capacity(stones.len() * 2);
    for &stone in stones {
        match successors(stone) {
            Successors::One(a) => out.push(a),
            Successors::Two(a, b) => out.extend_from_slice(&[a, b]),
        }
    }
    out
}

pub fn simulate(stones: &[u64], depth: u8) -> Vec<u64> {
    let mut current = stones.to_vec();
    for _ in 0..depth {
        current = blink(&current);
    }
    current
}

pub fn count_grouped(stones: &[u64], depth: u8) -> u64 {
    let mut counts: FxHashMap<u64, u64> = FxHashMap::default();
    for &stone in stones {
        *counts.entry(stone).or_default() += 1;
    }

    for _ in 0..depth {
        let mut next: FxHashMap<u64, u64> = FxHashMap::default();
        next.reserve(counts.len() * 2);
        for (stone, n) in counts {
            match successors(stone) {
                Successors::One(a) => *next.entry(a).or_default() += n,
                Successors::Two(a, b) => {
                    *next.entry(a).or_default() += n;
                    *next.entry(b).or_default() += n;
                }
            }
        }
        counts = next;
    }

    counts.values().sum()
}

#[test]
fn test_blink_sequence() {
    let steps: [&[u64]; 7] = [
        &[125, 17],
        &[253000, 1, 7],
        &[253, 0, 2024, 14168],
        &[512072, 1, 20, 24, 28676032],
        &[512, 72, 2024, 2, 0, 2, 4, 2867, 6032],
        &[1036288, 7, 2, 20, 24, 4048, 1, 4048, 8096, 28, 67, 60, 32],
        &[
            2097446912, 14168, 4048, 2, 0, 2, 4, 40, 48, 2024, 40, 48, 80, 96, 2, 8, 6, 7, 6, 0, 3,
            2,
        ],
    ];

    for pair in steps.windows(2) {
        assert_eq!(blink(pair[0]), pair[1]);
    }
    assert_eq!(simulate(steps[0], 6), steps[6]);
    assert_eq!(simulate(steps[0], 6).len(), 22);
}

#[test]
fn test_simulate_zero_depth() {
    assert_eq!(simulate(&[3, 0, 1000], 0), vec![3, 0, 1000]);
    assert_eq!(simulate(&[], 10), Vec::<u64>::new());
}

#[test]
fn test_grouped_matches_reference() {
    assert_eq!(count_grouped(&[125, 17], 6), 22);
    assert_eq!(count_grouped(&[125, 17], 25), 55312);
    assert_eq!(count_grouped(&[125, 17], 75), 65601038650482);
}

#[test]
fn test_strategies_agree() {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    for _ in 0..50 {
        let len = rng.gen_range(1..6);
        let stones: Vec<u64> = std::iter::repeat_with(|| rng.gen_range(0..100_000))
            .take(len)
            .collect();
        let depth = rng.gen_range(0..=15);

        let mut engine = crate::engine::Engine::with_capacity(1024);
        let memo = engine.total(depth, &stones);

        assert_eq!(simulate(&stones, depth).len() as u64, memo, "{stones:?} at {depth}");
        assert_eq!(count_grouped(&stones, depth), memo, "{stones:?} at {depth}");
    }
}
