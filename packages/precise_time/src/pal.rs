mod abstractions;
mod facade;

pub(crate) use abstractions::*;
pub(crate) use facade::*;

#[cfg(all(windows, not(feature = "cycles"), not(feature = "no_timing")))]
mod windows;
#[cfg(all(windows, not(feature = "cycles"), not(feature = "no_timing")))]
pub(crate) use windows::*;

#[cfg(all(not(windows), not(feature = "cycles"), not(feature = "no_timing")))]
mod monotonic;
#[cfg(all(not(windows), not(feature = "cycles"), not(feature = "no_timing")))]
pub(crate) use monotonic::*;

#[cfg(all(
    feature = "cycles",
    not(feature = "no_timing"),
    any(target_arch = "x86_64", target_arch = "aarch64")
))]
mod cycles;
#[cfg(all(
    feature = "cycles",
    not(feature = "no_timing"),
    any(target_arch = "x86_64", target_arch = "aarch64")
))]
pub(crate) use cycles::*;

#[cfg(feature = "no_timing")]
mod null;
#[cfg(feature = "no_timing")]
pub(crate) use null::*;

#[cfg(test)]
mod mock;
#[cfg(test)]
pub(crate) use mock::*;
