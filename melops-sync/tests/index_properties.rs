//! Randomized checks of the interval index against a linear scan.

use melops_sync::index::{DEFAULT_EPSILON, IntervalIndex};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Intervals with clustered starts, shared starts and zero lengths.
fn random_intervals(rng: &mut SmallRng, n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|_| {
            let start = if rng.random_bool(0.2) {
                rng.random_range(0..20) as f64 * 0.5
            } else {
                rng.random_range(0.0..60.0)
            };
            let length = if rng.random_bool(0.1) {
                0.0
            } else {
                rng.random_range(0.0..3.0)
            };
            (start, start + length)
        })
        .collect()
}

/// Query points biased towards interval boundaries.
fn random_points(rng: &mut SmallRng, intervals: &[(f64, f64)], m: usize, epsilon: f64) -> Vec<f64> {
    (0..m)
        .map(|_| {
            if intervals.is_empty() || rng.random_bool(0.5) {
                return rng.random_range(-1.0..65.0);
            }

            let (start, end) = intervals[rng.random_range(0..intervals.len())];
            let bound = if rng.random_bool(0.5) { start } else { end };
            let offset = match rng.random_range(0..5) {
                0 => 0.0,
                1 => epsilon / 2.0,
                2 => -epsilon / 2.0,
                3 => epsilon * 2.0,
                _ => -epsilon * 2.0,
            };
            bound + offset
        })
        .collect()
}

fn build(intervals: &[(f64, f64)]) -> IntervalIndex {
    let mut index = IntervalIndex::new();
    for (id, &(start, end)) in intervals.iter().enumerate() {
        index.insert(id, start, end);
    }
    index
}

fn brute_force(intervals: &[(f64, f64)], point: f64, epsilon: f64) -> Vec<usize> {
    intervals
        .iter()
        .enumerate()
        .filter(|&(_, &(start, end))| start - epsilon <= point && point <= end + epsilon)
        .map(|(id, _)| id)
        .collect()
}

fn sorted(mut ids: Vec<usize>) -> Vec<usize> {
    ids.sort_unstable();
    ids
}

#[test]
fn pruned_query_matches_linear_scan() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);

    for n in [0, 1, 2, 7, 64, 500, 2000] {
        for m in [1, 50, 400] {
            for epsilon in [0.0, DEFAULT_EPSILON, 0.05] {
                let intervals = random_intervals(&mut rng, n);
                let index = build(&intervals);

                for point in random_points(&mut rng, &intervals, m, epsilon) {
                    assert_eq!(
                        sorted(index.query(point, epsilon)),
                        brute_force(&intervals, point, epsilon),
                        "n={n} m={m} epsilon={epsilon} point={point}"
                    );
                }
            }
        }
    }
}

#[test]
fn every_interval_contains_its_own_points() {
    let mut rng = SmallRng::seed_from_u64(17);
    let intervals = random_intervals(&mut rng, 300);
    let index = build(&intervals);

    for (id, &(start, end)) in intervals.iter().enumerate() {
        for point in [start, end, (start + end) / 2.0] {
            assert!(
                index.query(point, 0.0).contains(&id),
                "interval {id} [{start}, {end}] missing at {point}"
            );
        }
    }
}

#[test]
fn epsilon_boundary_holds_for_every_interval() {
    let mut rng = SmallRng::seed_from_u64(23);
    let epsilon = DEFAULT_EPSILON;
    let intervals = random_intervals(&mut rng, 300);
    let index = build(&intervals);

    for (id, &(_, end)) in intervals.iter().enumerate() {
        assert!(index.query(end + epsilon / 2.0, epsilon).contains(&id));
        assert!(!index.query(end + epsilon * 2.0, epsilon).contains(&id));
    }
}

#[test]
fn insertion_order_does_not_change_results() {
    let mut rng = SmallRng::seed_from_u64(42);
    let intervals = random_intervals(&mut rng, 800);
    let forward = build(&intervals);

    let mut shuffled: Vec<(usize, (f64, f64))> = intervals.iter().copied().enumerate().collect();
    shuffled.shuffle(&mut rng);

    let mut reordered = IntervalIndex::new();
    for &(id, (start, end)) in &shuffled {
        reordered.insert(id, start, end);
    }

    for point in random_points(&mut rng, &intervals, 1000, DEFAULT_EPSILON) {
        assert_eq!(
            sorted(forward.query(point, DEFAULT_EPSILON)),
            sorted(reordered.query(point, DEFAULT_EPSILON)),
            "point={point}"
        );
    }
}

#[test]
fn results_are_ordered_by_start() {
    let mut rng = SmallRng::seed_from_u64(99);
    let intervals = random_intervals(&mut rng, 500);
    let index = build(&intervals);

    for point in random_points(&mut rng, &intervals, 200, DEFAULT_EPSILON) {
        let starts: Vec<f64> = index
            .query(point, DEFAULT_EPSILON)
            .into_iter()
            .map(|id| intervals[id].0)
            .collect();

        assert!(starts.windows(2).all(|w| w[0] <= w[1]), "point={point}");
    }
}
