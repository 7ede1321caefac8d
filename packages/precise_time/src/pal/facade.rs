mod clock_source;
mod platform;

pub(crate) use clock_source::*;
pub(crate) use platform::*;
