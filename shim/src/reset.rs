//! System reset request register.
//!
//! The AIRCR write composes the documented reset request; no hook invokes
//! it. Recovery from a fault is an operator-side device reset only.

/// Write key required in AIRCR bits 31..16.
pub const VECTKEY: u32 = 0x05FA_0000;
/// Bits preserved across a keyed write.
pub const VECTKEY_MASK: u32 = 0x0000_FFFF;
/// System reset request bit.
pub const SYSRESETREQ: u32 = 1 << 2;

/// Raw access to the reset control register.
pub trait AircrAccess {
    fn read(&self) -> u32;
    fn write(&mut self, value: u32);
}

/// Ask the processor for a full system reset.
///
/// Preserves the register bits under the key mask, stamps the write key
/// and sets the reset request bit.
pub fn request_system_reset<R: AircrAccess>(regs: &mut R) {
    let value = (regs.read() & VECTKEY_MASK) | VECTKEY | SYSRESETREQ;
    regs.write(value);
}
