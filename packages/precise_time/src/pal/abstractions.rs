use std::fmt::Debug;

use crate::pal::ReadingRepr;

pub(crate) trait Platform: Debug + Send + Sync + 'static {
    type ClockSource: ClockSource;

    fn new_clock_source(&self) -> Self::ClockSource;
}

/// The active time source of the build.
///
/// Produces opaque readings and converts a pair of readings into the elapsed
/// measurement between them. What the measurement means (seconds, cycles or
/// a constant zero) is a property of the compiled implementation.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait ClockSource: Debug + Send {
    fn read(&mut self) -> ReadingRepr;

    fn elapsed(&self, start: ReadingRepr, end: ReadingRepr) -> f64;
}
