use std::fmt::Debug;
#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use crate::pal::MockClockSource;
use crate::pal::{ClockSource, ClockSourceImpl, ReadingRepr};

pub(crate) enum ClockSourceFacade {
    Real(ClockSourceImpl),

    #[cfg(test)]
    Mock(Arc<Mutex<MockClockSource>>),
}

impl From<ClockSourceImpl> for ClockSourceFacade {
    fn from(source: ClockSourceImpl) -> Self {
        Self::Real(source)
    }
}

#[cfg(test)]
impl From<MockClockSource> for ClockSourceFacade {
    fn from(source: MockClockSource) -> Self {
        Self::Mock(Arc::new(Mutex::new(source)))
    }
}

impl ClockSource for ClockSourceFacade {
    fn read(&mut self) -> ReadingRepr {
        match self {
            Self::Real(source) => source.read(),
            #[cfg(test)]
            Self::Mock(source) => source
                .lock()
                .expect("mock clock source does not support operation after panic in mock")
                .read(),
        }
    }

    fn elapsed(&self, start: ReadingRepr, end: ReadingRepr) -> f64 {
        match self {
            Self::Real(source) => source.elapsed(start, end),
            #[cfg(test)]
            Self::Mock(source) => source
                .lock()
                .expect("mock clock source does not support operation after panic in mock")
                .elapsed(start, end),
        }
    }
}

impl Debug for ClockSourceFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(source) => source.fmt(f),
            #[cfg(test)]
            Self::Mock(source) => source.fmt(f),
        }
    }
}
