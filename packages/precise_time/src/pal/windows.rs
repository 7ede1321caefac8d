mod bindings;
mod clock_source;
mod platform;

pub(crate) use bindings::*;
pub(crate) use clock_source::*;
pub(crate) use platform::*;
