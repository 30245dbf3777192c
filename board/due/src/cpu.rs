//! Cortex-M3 cpu abstraction.

#[cfg(target_arch = "arm")]
mod arm {
    use cortex_m::register::primask;
    use critical_section::{set_impl, Impl, RawRestoreState};

    /// Mask all maskable interrupts on the core.
    #[inline(always)]
    pub fn disable_interrupts() {
        cortex_m::interrupt::disable();
    }

    /// Single instruction, no effect.
    #[inline(always)]
    pub fn nop() {
        cortex_m::asm::nop();
    }

    struct SingleCoreCriticalSection;
    set_impl!(SingleCoreCriticalSection);

    unsafe impl Impl for SingleCoreCriticalSection {
        unsafe fn acquire() -> RawRestoreState {
            let was_active = primask::read().is_active();
            cortex_m::interrupt::disable();
            was_active
        }

        unsafe fn release(was_active: RawRestoreState) {
            if was_active {
                unsafe { cortex_m::interrupt::enable() }
            }
        }
    }
}

#[cfg(target_arch = "arm")]
pub use arm::*;

// Stubs so host builds of the board crate link.
#[cfg(not(target_arch = "arm"))]
mod host {
    pub fn disable_interrupts() {
        panic!("disable_interrupts not available on this platform");
    }

    pub fn nop() {}
}

#[cfg(not(target_arch = "arm"))]
pub use host::*;
