//! Arduino Due (SAM3X8E) board api.

#![no_std]

/// CPU api.
pub mod cpu;
/// Parallel I/O controller api.
pub mod pio;
/// System control block api.
pub mod scb;
/// UART api.
pub mod uart;

/// Core clock as configured by the board startup code.
pub const CPU_HZ: u32 = 84_000_000;
