//! Integration tests exercising the `benchmark()` contract end to end with the
//! real clock of this build.
//!
//! These use self-timed operations (spinning until a fixed wall-clock cost has
//! been paid) so the expected cost is known regardless of processor speed. The
//! bounds are generous because wall-clock tests share the machine with
//! everything else running on it.

#![cfg(not(miri))]
#![cfg(not(any(feature = "cycles", feature = "no_timing")))]

use std::hint::black_box;
use std::time::{Duration, Instant};

use new_zealand::nz;
use seq_bench::benchmark;

/// Spins until a fixed wall-clock cost has been paid.
fn fixed_cost_operation(cost: Duration) {
    let start = Instant::now();

    while start.elapsed() < cost {
        black_box(0_u64);
    }
}

#[test]
fn per_invocation_estimate_is_approximately_invariant_to_iteration_count() {
    const COST: Duration = Duration::from_micros(200);

    let one = benchmark(nz!(3), nz!(1), || fixed_cost_operation(COST));
    let many = benchmark(nz!(3), nz!(20), || fixed_cost_operation(COST));

    // Both calls measure the same fixed-cost operation, so dividing a
    // 20-invocation run by 20 must land in the same range as timing a
    // single invocation directly.
    assert!(one >= COST.as_secs_f64() * 0.5);
    assert!(many >= COST.as_secs_f64() * 0.5);
    assert!(one < COST.as_secs_f64() * 50.0);
    assert!(many < COST.as_secs_f64() * 50.0);
}

#[test]
fn repeated_calls_are_stable_for_a_fixed_cost_operation() {
    const COST: Duration = Duration::from_micros(500);

    let first = benchmark(nz!(5), nz!(10), || fixed_cost_operation(COST));
    let second = benchmark(nz!(5), nz!(10), || fixed_cost_operation(COST));

    // The self-timed operation puts a hard floor under both results and the
    // minimum-taking reduction keeps scheduler noise out of the top.
    assert!(first >= COST.as_secs_f64() * 0.5);
    assert!(second >= COST.as_secs_f64() * 0.5);
    assert!((first - second).abs() < COST.as_secs_f64() * 10.0);
}
