use std::time::Instant;

use crate::pal::{ClockSource, Platform};

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

/// The standard monotonic clock, used on targets without a dedicated
/// performance counter API.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

impl Platform for BuildTargetPlatform {
    type ClockSource = ClockSourceImpl;

    fn new_clock_source(&self) -> Self::ClockSource {
        ClockSourceImpl
    }
}

/// An opaque monotonic clock reading. Meaningful only relative to another
/// reading taken from the same clock.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ReadingRepr {
    instant: Instant,
}

impl ReadingRepr {
    pub(crate) fn new(instant: Instant) -> Self {
        Self { instant }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ClockSourceImpl;

impl ClockSource for ClockSourceImpl {
    #[cfg_attr(test, mutants::skip)] // Real timing logic in tests is not desirable.
    fn read(&mut self) -> ReadingRepr {
        ReadingRepr::new(Instant::now())
    }

    fn elapsed(&self, start: ReadingRepr, end: ReadingRepr) -> f64 {
        // A reversed pair clamps to zero instead of panicking.
        end.instant
            .saturating_duration_since(start.instant)
            .as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn elapsed_is_the_span_between_readings() {
        let base = Instant::now();
        let later = base
            .checked_add(Duration::from_millis(100))
            .expect("test instants are nowhere near the end of the representable range");

        let source = ClockSourceImpl;

        let elapsed = source.elapsed(ReadingRepr::new(base), ReadingRepr::new(later));
        assert!((elapsed - 0.1).abs() < 1e-12);
    }

    #[test]
    #[expect(
        clippy::float_cmp,
        reason = "zero is the exact contractual value, not an approximation"
    )]
    fn reversed_readings_clamp_to_zero() {
        let base = Instant::now();
        let later = base
            .checked_add(Duration::from_millis(100))
            .expect("test instants are nowhere near the end of the representable range");

        let source = ClockSourceImpl;

        let elapsed = source.elapsed(ReadingRepr::new(later), ReadingRepr::new(base));
        assert_eq!(elapsed, 0.0);
    }

    #[test]
    #[cfg(not(miri))] // Miri cannot talk to the real platform.
    fn consecutive_readings_are_approximately_equal() {
        let mut source = ClockSourceImpl;

        let first = source.read();
        let second = source.read();

        let elapsed = source.elapsed(first, second);

        assert!(elapsed >= 0.0);
        assert!(elapsed < 100.0);
    }
}
