use std::num::NonZero;

use precise_time::Clock;

/// Measures the best-case cost of one invocation of `op`.
///
/// Executes `samples` independent timing runs. Each run invokes `op` exactly
/// `iterations` times back to back, bracketed by a single pair of clock
/// readings, so nothing but the operation itself executes inside the timed
/// region. The result is the elapsed measurement of the fastest run divided
/// by `iterations`: the best observed cost of a single invocation.
///
/// The fastest run is reported, not an average, because external disturbances
/// can only slow a run down - the minimum is the estimate most robust to
/// scheduling jitter. Increase `samples` to give the minimum more chances to
/// land on an undisturbed run; increase `iterations` to amortize clock
/// granularity for cheap operations.
///
/// The unit of the result is a build-time property of [`precise_time`]:
/// seconds by default, raw processor cycles with the `cycles` feature, and
/// exactly `0.0` with the `no_timing` feature. The result is never negative
/// and, given that the counts are non-zero, always finite.
///
/// The cost of taking a clock reading is not subtracted from the measurement,
/// so for operations in the low-nanosecond range the boundary readings can
/// dominate unless `iterations` is large.
///
/// The operation is treated as an opaque, repeatable unit of work. Wrap its
/// inputs and outputs in [`std::hint::black_box`] to keep the optimizer from
/// deleting the work being measured.
///
/// # Panics
///
/// Panics if `op` panics; the panic propagates unmodified and no result is
/// produced for the interrupted call.
///
/// # Examples
///
/// ```
/// use std::hint::black_box;
///
/// use new_zealand::nz;
/// use seq_bench::benchmark;
///
/// fn checksum(data: &[u8]) -> u64 {
///     data.iter().copied().map(u64::from).sum()
/// }
///
/// let data = vec![7_u8; 4096];
///
/// let cost = benchmark(nz!(5), nz!(1000), || {
///     black_box(checksum(black_box(&data)));
/// });
///
/// println!("checksum cost per invocation: {cost} seconds");
/// ```
#[must_use]
#[cfg_attr(test, mutants::skip)] // Difficult to simulate time and therefore set expectations.
pub fn benchmark<F>(samples: NonZero<u64>, iterations: NonZero<u64>, mut op: F) -> f64
where
    F: FnMut(),
{
    // The clock (and with it the counter frequency, where the platform has
    // one) is set up once per call, outside the timed region.
    let mut clock = Clock::new();

    let mut best = f64::INFINITY;

    for _ in 0..samples.get() {
        let start = clock.read();

        for _ in 0..iterations.get() {
            op();
        }

        let end = clock.read();

        let elapsed = clock.elapsed(start, end);

        if elapsed < best {
            best = elapsed;
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "iteration counts of interest are far below 2^53"
    )]
    let iterations = iterations.get() as f64;

    best / iterations
}

#[cfg(test)]
mod tests {
    use std::hint::black_box;
    use std::time::Duration;

    use new_zealand::nz;

    use super::*;

    #[test]
    fn result_is_non_negative_and_finite() {
        let result = benchmark(nz!(3), nz!(10), || {
            black_box(42_u64.wrapping_mul(42));
        });

        assert!(result >= 0.0);
        assert!(result.is_finite());
    }

    #[test]
    fn operation_runs_samples_times_iterations_invocations() {
        let mut invocations = 0_u64;

        _ = benchmark(nz!(4), nz!(25), || {
            invocations += 1;
        });

        assert_eq!(invocations, 100);
    }

    #[test]
    #[cfg(not(miri))] // Miri cannot talk to the real platform.
    #[cfg(not(any(feature = "cycles", feature = "no_timing")))]
    fn single_sample_is_bounded_below_by_operation_cost() {
        // With one sample there is no reduction; the result is that run's
        // elapsed time divided by the iteration count, so a sleeping
        // operation puts a hard floor under it.
        let result = benchmark(nz!(1), nz!(2), || {
            std::thread::sleep(Duration::from_millis(5));
        });

        assert!(result >= 0.004);
        assert!(result < 100.0);
    }

    #[test]
    #[cfg(not(miri))] // Miri cannot talk to the real platform.
    #[cfg(not(any(feature = "cycles", feature = "no_timing")))]
    fn occasional_slow_runs_do_not_inflate_result() {
        let mut invocation = 0_u32;

        let result = benchmark(nz!(8), nz!(1), move || {
            invocation += 1;

            // Every fourth run is made drastically slower. A minimum-taking
            // reduction must report the cost of the undisturbed runs.
            if invocation % 4 == 0 {
                std::thread::sleep(Duration::from_millis(25));
            }
        });

        assert!(result < 0.01);
    }

    #[test]
    #[should_panic(expected = "deliberate failure")]
    fn operation_panic_propagates() {
        let mut invocation = 0_u32;

        _ = benchmark(nz!(1), nz!(5), move || {
            invocation += 1;

            assert!(invocation < 3, "deliberate failure");
        });
    }

    #[test]
    #[cfg(feature = "no_timing")]
    #[expect(
        clippy::float_cmp,
        reason = "zero is the exact contractual value, not an approximation"
    )]
    fn disabled_timing_reports_exactly_zero() {
        let result = benchmark(nz!(4), nz!(16), || {
            black_box(7_u64.pow(3));
        });

        assert_eq!(result, 0.0);
    }

    #[test]
    #[cfg(not(miri))] // Miri cannot execute target-specific counter reads.
    #[cfg(feature = "cycles")]
    fn cycle_counting_reports_non_negative_cycle_delta() {
        let result = benchmark(nz!(3), nz!(100), || {
            black_box((0..32_u64).fold(0_u64, |acc, x| acc.wrapping_add(x)));
        });

        assert!(result >= 0.0);
        assert!(result.is_finite());
    }
}
