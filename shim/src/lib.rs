//! Adaptation shim binding a vendored FreeRTOS kernel to the Arduino Due.
//!
//! The kernel and the CPU vector table call into a fixed set of lifecycle
//! hooks; every unrecoverable one funnels into a never-returning LED blink
//! routine that identifies the fault class by pulse count. The scheduler,
//! synchronization primitives and allocator all live in the vendored
//! kernel, not here.

#![cfg_attr(not(test), no_std)]

/// Real-hardware binding and FFI symbol layer.
#[cfg(feature = "board_due")]
pub mod board;
/// Calibrated busy-wait.
pub mod delay;
/// Fault taxonomy.
pub mod fault;
/// Kernel lifecycle hooks.
pub mod hooks;
/// Hardware seam for the fault path.
pub mod platform;
/// System reset request register.
pub mod reset;
/// Blink signaler.
pub mod signal;

pub use fault::FaultKind;
pub use platform::Platform;
pub use signal::BlinkSignaler;
