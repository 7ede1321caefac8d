use crate::pal::{ClockSource, Platform};

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

/// Direct hardware cycle counter access. Measurements are raw cycle deltas,
/// never converted to seconds.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

impl Platform for BuildTargetPlatform {
    type ClockSource = ClockSourceImpl;

    fn new_clock_source(&self) -> Self::ClockSource {
        ClockSourceImpl
    }
}

/// A raw cycle counter value. Meaningful only relative to another reading
/// taken from the same counter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ReadingRepr {
    cycles: u64,
}

impl ReadingRepr {
    pub(crate) fn new(cycles: u64) -> Self {
        Self { cycles }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ClockSourceImpl;

impl ClockSource for ClockSourceImpl {
    fn read(&mut self) -> ReadingRepr {
        ReadingRepr::new(read_cycle_counter())
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "cycle deltas of interest are far below 2^53"
    )]
    fn elapsed(&self, start: ReadingRepr, end: ReadingRepr) -> f64 {
        // A reversed pair (possible after migration to another processor)
        // clamps to zero instead of producing a garbage delta.
        end.cycles.saturating_sub(start.cycles) as f64
    }
}

/// Reads the cycle counter, serialized so that instructions from the measured
/// region cannot drift past the read in either direction.
fn read_cycle_counter() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        read_cycle_counter_x86_64()
    }

    #[cfg(target_arch = "aarch64")]
    {
        read_cycle_counter_aarch64()
    }
}

#[cfg(target_arch = "x86_64")]
fn read_cycle_counter_x86_64() -> u64 {
    use std::sync::atomic::{Ordering, compiler_fence};

    compiler_fence(Ordering::SeqCst);

    let cycles: u64;

    // SAFETY: `lfence` and `rdtsc` have no memory or register preconditions;
    // the asm writes only the declared outputs.
    unsafe {
        std::arch::asm!(
            "lfence",
            "rdtsc",
            "shl rdx, 32",
            "or rax, rdx",
            out("rax") cycles,
            out("rdx") _,
            options(nostack, nomem),
        );
    }

    compiler_fence(Ordering::SeqCst);

    cycles
}

#[cfg(target_arch = "aarch64")]
fn read_cycle_counter_aarch64() -> u64 {
    use std::sync::atomic::{Ordering, compiler_fence};

    compiler_fence(Ordering::SeqCst);

    let cycles: u64;

    // SAFETY: `isb` and a read of `cntvct_el0` have no preconditions;
    // the asm writes only the declared output register.
    unsafe {
        std::arch::asm!(
            "isb",
            "mrs {}, cntvct_el0",
            out(reg) cycles,
            options(nostack, nomem),
        );
    }

    compiler_fence(Ordering::SeqCst);

    cycles
}
