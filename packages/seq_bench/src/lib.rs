//! Single-threaded micro-benchmark execution with a minimum-of-samples estimator.
//!
//! This package provides [`benchmark()`], which measures the best-case cost of one
//! invocation of a caller-supplied operation. The operation is executed in several
//! independent sampling runs of many back-to-back invocations each; the fastest run
//! determines the result. It is designed to be embedded in performance-sensitive test
//! code that needs a single reliable "cost of this operation" number.
//!
//! # Operating Principles
//!
//! ## Minimum, not average
//!
//! Transient noise - scheduling, interrupts, cache pollution from other processes - can
//! only ever make a run slower than the true cost of the operation, never faster. The
//! fastest observed run is therefore the most faithful estimate, and that is what this
//! package reports. There is no averaging and no outlier rejection; slow runs are simply
//! discarded by the reduction.
//!
//! ## Timing
//!
//! Time is measured with [`precise_time`], so the unit of the result is a build-time
//! property: seconds by default, raw processor cycles with the `cycles` feature, and a
//! constant zero with the `no_timing` feature (which turns a benchmark into a pure
//! repetition stress test). The two clock readings bracket the entire run of
//! consecutive invocations, so per-invocation timer overhead is amortized - but the
//! cost of the two boundary readings themselves is not subtracted from the result.
//!
//! # Basic Example
//!
//! ```
//! use std::hint::black_box;
//!
//! use new_zealand::nz;
//! use seq_bench::benchmark;
//!
//! // Best-case cost of summing a small range, measured over
//! // 5 sampling runs of 1000 invocations each.
//! let cost = benchmark(nz!(5), nz!(1000), || {
//!     black_box((0..100_u64).sum::<u64>());
//! });
//!
//! assert!(cost >= 0.0);
//! assert!(cost.is_finite());
//! ```

mod run;

pub use run::*;
