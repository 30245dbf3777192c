//! SAM3X parallel I/O controller.

use core::ops;

use tock_registers::interfaces::Writeable;
use tock_registers::{register_structs, registers::*};

//--------------------------------------------------------------------------------------------------
// Registers
//--------------------------------------------------------------------------------------------------

register_structs! {
    #[allow(non_snake_case)]
    pub RegisterBlock {
        (0x00 => PER: WriteOnly<u32>),
        (0x04 => _reserved0),
        (0x10 => OER: WriteOnly<u32>),
        (0x14 => _reserved1),
        (0x30 => SODR: WriteOnly<u32>),
        (0x34 => CODR: WriteOnly<u32>),
        (0x38 => ODSR: ReadWrite<u32>),
        (0x3C => @END),
    }
}

/// PIOB controller base address.
const PIOB_BASE: usize = 0x400E_1000;

/// Amber "L" led, PB27 (Arduino pin 13).
const LED_MASK: u32 = 1 << 27;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// The board led.
pub struct Led;

impl ops::Deref for Led {
    type Target = RegisterBlock;

    fn deref(&self) -> &Self::Target {
        unsafe { &*(PIOB_BASE as *const RegisterBlock) }
    }
}

impl Led {
    /// # Safety
    ///
    /// Caller must have exclusive use of PB27.
    pub const unsafe fn new() -> Led {
        Led
    }

    /// Give the pin to the PIO controller and enable its output driver.
    ///
    /// The output driver works without the peripheral clock; the clock is
    /// only needed for input sampling.
    pub fn set_output(&mut self) {
        self.PER.set(LED_MASK);
        self.OER.set(LED_MASK);
    }

    /// Drive the pin high.
    pub fn set_high(&mut self) {
        self.SODR.set(LED_MASK);
    }

    /// Drive the pin low.
    pub fn set_low(&mut self) {
        self.CODR.set(LED_MASK);
    }
}
