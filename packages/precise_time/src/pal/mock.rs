use mockall::mock;

use crate::pal::{MockClockSource, Platform};

mock! {
    #[derive(Debug)]
    pub Platform {
    }

    impl Platform for Platform {
        type ClockSource = MockClockSource;

        fn new_clock_source(&self) -> MockClockSource;
    }
}
