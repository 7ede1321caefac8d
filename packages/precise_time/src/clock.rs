use crate::Reading;
use crate::pal::{ClockSource, ClockSourceFacade, Platform, PlatformFacade};

/// A clock that measures elapsed time with the best precision available
/// in the current build.
///
/// The clock captures opaque [`Reading`]s and converts a pair of readings into
/// the elapsed measurement between them. Which time source backs the clock is
/// decided entirely at build time - see the crate-level documentation for the
/// selection table and for what the numeric result means in each configuration.
///
/// # Examples
///
/// ```rust
/// use precise_time::Clock;
///
/// let mut clock = Clock::new();
///
/// let start = clock.read();
/// // ... the code being measured ...
/// let end = clock.read();
///
/// let elapsed = clock.elapsed(start, end);
/// assert!(elapsed >= 0.0);
/// ```
#[derive(Debug)]
pub struct Clock {
    inner: ClockSourceFacade,
}

impl Clock {
    /// Creates a clock backed by the time source compiled into this build.
    #[must_use]
    pub fn new() -> Self {
        Self::from_pal(&PlatformFacade::real())
    }

    pub(crate) fn from_pal(pal: &PlatformFacade) -> Self {
        Self {
            inner: pal.new_clock_source(),
        }
    }

    /// Captures a reading of the underlying time source.
    ///
    /// The reading is opaque - it only gains meaning when paired with another
    /// reading from the same clock via [`elapsed()`][Self::elapsed].
    #[must_use]
    pub fn read(&mut self) -> Reading {
        self.inner.read().into()
    }

    /// Converts two readings into the elapsed measurement between them.
    ///
    /// The result is in seconds for wall-clock builds, raw cycles with the
    /// `cycles` feature and exactly `0.0` with the `no_timing` feature. It is
    /// never negative: a reversed or equal pair of readings yields `0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use precise_time::Clock;
    ///
    /// let mut clock = Clock::new();
    ///
    /// let start = clock.read();
    /// let end = clock.read();
    ///
    /// assert!(clock.elapsed(start, end) >= 0.0);
    /// ```
    #[must_use]
    pub fn elapsed(&self, start: Reading, end: Reading) -> f64 {
        self.inner.elapsed(start.into(), end.into())
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
