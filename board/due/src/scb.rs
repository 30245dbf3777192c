//! System control block access.

use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::registers::ReadWrite;

/// Application Interrupt and Reset Control Register. Fixed,
/// architecture-defined address.
const AIRCR_ADDR: usize = 0xE000_ED0C;

/// Raw AIRCR access.
///
/// The register's write-key and reset-request layout is the caller's
/// business; this handle only moves whole words.
pub struct Scb;

impl Scb {
    /// # Safety
    ///
    /// Caller must have exclusive use of the reset control register.
    pub const unsafe fn new() -> Scb {
        Scb
    }

    fn reg(&self) -> &ReadWrite<u32> {
        unsafe { &*(AIRCR_ADDR as *const ReadWrite<u32>) }
    }

    /// Read AIRCR.
    pub fn aircr(&self) -> u32 {
        self.reg().get()
    }

    /// Write AIRCR.
    pub fn set_aircr(&mut self, value: u32) {
        self.reg().set(value)
    }
}
