//! SAM3X UART (the Due's programming port).

use core::fmt;
use core::ops;

use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::{register_bitfields, register_structs, registers::*};

//--------------------------------------------------------------------------------------------------
// Registers
//--------------------------------------------------------------------------------------------------

register_bitfields! {
    u32,

    /// Status Register.
    SR [
        /// Transmitter ready for a new character.
        TXRDY OFFSET(1) NUMBITS(1) [],

        /// Transmitter shift register and holding register empty.
        TXEMPTY OFFSET(9) NUMBITS(1) []
    ]
}

register_structs! {
    #[allow(non_snake_case)]
    pub RegisterBlock {
        (0x00 => CR: WriteOnly<u32>),
        (0x04 => MR: ReadWrite<u32>),
        (0x08 => _reserved0),
        (0x14 => SR: ReadOnly<u32, SR::Register>),
        (0x18 => RHR: ReadOnly<u32>),
        (0x1C => THR: WriteOnly<u32>),
        (0x20 => @END),
    }
}

/// UART base address.
const UART_BASE: usize = 0x400E_0800;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Transmit-only console handle.
///
/// Baud rate and pin multiplexing are set up by the application's startup
/// code; this handle only ever feeds the transmit holding register.
pub struct Uart;

impl ops::Deref for Uart {
    type Target = RegisterBlock;

    fn deref(&self) -> &Self::Target {
        unsafe { &*(UART_BASE as *const RegisterBlock) }
    }
}

impl Uart {
    /// # Safety
    ///
    /// Caller must have exclusive use of the transmitter.
    pub const unsafe fn new() -> Uart {
        Uart
    }

    /// Blocking write of one byte.
    pub fn write_byte(&mut self, byte: u8) {
        while !self.SR.is_set(SR::TXRDY) {}
        self.THR.set(byte as u32);
    }
}

impl fmt::Write for Uart {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}
