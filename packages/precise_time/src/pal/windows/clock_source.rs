use crate::pal::ClockSource;
use crate::pal::windows::{Bindings, BindingsFacade};

/// A raw performance counter value. Meaningful only relative to another
/// reading taken from the same counter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ReadingRepr {
    ticks: i64,
}

impl ReadingRepr {
    pub(crate) fn new(ticks: i64) -> Self {
        Self { ticks }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ClockSourceImpl {
    // The counter frequency is fixed at boot, so we query it once per clock.
    ticks_per_second: i64,

    bindings: BindingsFacade,
}

impl ClockSourceImpl {
    pub(crate) fn new(bindings: BindingsFacade) -> Self {
        let ticks_per_second = bindings.query_performance_frequency();

        assert!(
            ticks_per_second > 0,
            "performance counter frequency must be a positive tick rate"
        );

        Self {
            ticks_per_second,
            bindings,
        }
    }
}

impl ClockSource for ClockSourceImpl {
    fn read(&mut self) -> ReadingRepr {
        ReadingRepr::new(self.bindings.query_performance_counter())
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "tick counts within realistic uptime ranges are exactly representable as f64"
    )]
    fn elapsed(&self, start: ReadingRepr, end: ReadingRepr) -> f64 {
        // The counter is monotonic; a reversed pair clamps to zero instead of
        // reporting a negative duration.
        let ticks = end.ticks.saturating_sub(start.ticks).max(0);

        ticks as f64 / self.ticks_per_second as f64
    }
}
