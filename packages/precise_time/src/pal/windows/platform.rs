use crate::pal::windows::BindingsFacade;
use crate::pal::{ClockSourceImpl, Platform};

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform =
    BuildTargetPlatform::new(BindingsFacade::real());

/// The dedicated high-frequency performance counter exposed by the
/// operating system.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform {
    bindings: BindingsFacade,
}

impl BuildTargetPlatform {
    pub(crate) const fn new(bindings: BindingsFacade) -> Self {
        Self { bindings }
    }
}

impl Platform for BuildTargetPlatform {
    type ClockSource = ClockSourceImpl;

    fn new_clock_source(&self) -> Self::ClockSource {
        Self::ClockSource::new(self.bindings.clone())
    }
}
