//! Hardware seam for the fault path.

use core::fmt;

/// Everything the fault path touches on the machine.
///
/// There is deliberately no way to re-enable interrupts: once a fault
/// handler has masked them, the halt state owns the processor until a
/// physical reset.
pub trait Platform {
    /// Mask interrupt delivery.
    fn disable_interrupts(&mut self);

    /// Configure the diagnostic pin as a digital output.
    fn led_output(&mut self);

    /// Drive the diagnostic pin level.
    fn led_write(&mut self, on: bool);

    /// Busy-wait for roughly `ms` milliseconds.
    fn pause_ms(&mut self, ms: u32);

    /// Emit one formatted diagnostic line.
    fn report(&mut self, args: fmt::Arguments);
}

impl<P: Platform> Platform for &mut P {
    fn disable_interrupts(&mut self) {
        (**self).disable_interrupts()
    }

    fn led_output(&mut self) {
        (**self).led_output()
    }

    fn led_write(&mut self, on: bool) {
        (**self).led_write(on)
    }

    fn pause_ms(&mut self, ms: u32) {
        (**self).pause_ms(ms)
    }

    fn report(&mut self, args: fmt::Arguments) {
        (**self).report(args)
    }
}
