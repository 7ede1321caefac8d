//! Measures elapsed time with the best precision available on the host.
//!
//! This crate offers a [`Clock`] that captures opaque [`Reading`]s and converts a pair of
//! readings into the elapsed measurement between them. It is intended as the time source
//! for micro-benchmarking, where the cost of the measured region matters more than
//! calendar accuracy.
//!
//! # Time source selection
//!
//! Exactly one time source is compiled into any given build. Selection happens entirely
//! at build time; there is no runtime detection or fallback negotiation:
//!
//! | Configuration                           | Time source                    | Unit of [`Clock::elapsed`] |
//! |-----------------------------------------|--------------------------------|----------------------------|
//! | default, Windows target                 | OS performance counter         | seconds                    |
//! | default, any other target               | standard monotonic clock       | seconds                    |
//! | `cycles` feature (x86_64/aarch64 only)  | hardware cycle counter         | raw cycles                 |
//! | `no_timing` feature                     | none                           | always exactly `0.0`       |
//!
//! The numeric result carries no unit tag; callers must know which source their build
//! uses. Invalid combinations (`cycles` together with `no_timing`, or `cycles` on a
//! target without an accessible cycle counter) are rejected at compile time.
//!
//! # Degraded mode
//!
//! The `no_timing` feature compiles measurement out entirely. Every elapsed value is
//! exactly zero, which turns anything timed with this crate into a pure repetition
//! exercise. This is deliberate, for environments where wall-clock measurement is
//! unavailable or undesirable.
//!
//! # Trade-offs
//!
//! - Readings are meaningful only relative to another reading from the same clock;
//!   they are not timestamps and cannot be compared across source variants.
//! - Capturing a reading itself costs time. That cost is not subtracted from the
//!   measurements you derive, so extremely short regions are dominated by it.
//!
//! # Basic usage
//!
//! ```rust
//! use precise_time::Clock;
//!
//! let mut clock = Clock::new();
//!
//! let start = clock.read();
//! // ... the code being measured ...
//! let end = clock.read();
//!
//! let elapsed = clock.elapsed(start, end);
//! assert!(elapsed >= 0.0);
//! ```

#[cfg(all(feature = "cycles", feature = "no_timing"))]
compile_error!("the `cycles` and `no_timing` features are mutually exclusive - enable at most one");

#[cfg(all(
    feature = "cycles",
    not(any(target_arch = "x86_64", target_arch = "aarch64"))
))]
compile_error!(
    "the `cycles` feature requires a target with an accessible cycle counter (x86_64 or aarch64)"
);

mod pal;

mod clock;
mod reading;

pub use clock::*;
pub use reading::*;
