//! Never-returning diagnostic blinker.

use crate::fault::FaultKind;
use crate::platform::Platform;

/// Pulse on-time.
pub const PULSE_ON_MS: u32 = 300;
/// Pulse off-time.
pub const PULSE_OFF_MS: u32 = 300;
/// Pause between bursts.
pub const CYCLE_GAP_MS: u32 = 2000;

/// Emits a fault's pulse code on the board led, forever.
///
/// The terminal state of the process. Allocation-free and lock-free so it
/// keeps working after a corrupted heap or stack; the only exit is a
/// physical reset.
pub struct BlinkSignaler<P: Platform> {
    platform: P,
}

impl<P: Platform> BlinkSignaler<P> {
    pub fn new(platform: P) -> BlinkSignaler<P> {
        BlinkSignaler { platform }
    }

    /// Mask interrupts and take the pin. Interrupts stay masked until
    /// reset.
    fn prepare(&mut self) {
        self.platform.disable_interrupts();
        self.platform.led_output();
    }

    /// Emit exactly `pulses` on/off pulses.
    pub fn burst(&mut self, pulses: u32) {
        for _ in 0..pulses {
            self.platform.led_write(true);
            self.platform.pause_ms(PULSE_ON_MS);
            self.platform.led_write(false);
            self.platform.pause_ms(PULSE_OFF_MS);
        }
    }

    /// One full blink cycle: the fault's burst, then the long gap.
    fn cycle(&mut self, fault: FaultKind) {
        self.burst(fault.pulses());
        self.platform.pause_ms(CYCLE_GAP_MS);
    }

    /// Enter the halt state. Never returns.
    pub fn halt(mut self, fault: FaultKind) -> ! {
        self.prepare();
        loop {
            self.cycle(fault);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{Event, MockPlatform};

    #[test]
    fn burst_emits_one_pulse_pair_per_count() {
        for fault in FaultKind::ALL.iter() {
            let mut mock = MockPlatform::new();
            BlinkSignaler::new(&mut mock).burst(fault.pulses());

            let expected: Vec<Event> = (0..fault.pulses())
                .flat_map(|_| {
                    vec![
                        Event::Led(true),
                        Event::Pause(PULSE_ON_MS),
                        Event::Led(false),
                        Event::Pause(PULSE_OFF_MS),
                    ]
                })
                .collect();
            assert_eq!(mock.events, expected);
        }
    }

    #[test]
    fn interrupts_are_masked_before_the_pin_is_touched() {
        let mut mock = MockPlatform::new();
        let mut signaler = BlinkSignaler::new(&mut mock);
        signaler.prepare();
        signaler.cycle(FaultKind::Assertion);
        drop(signaler);

        assert_eq!(mock.events[0], Event::IrqMasked);
        assert_eq!(mock.events[1], Event::LedOutput);
        // Masked exactly once; the Platform trait has no unmask operation,
        // so re-enabling is unrepresentable.
        assert_eq!(mock.irq_masks(), 1);
    }

    #[test]
    fn stack_overflow_cycle_is_three_pulses_then_the_gap() {
        let mut mock = MockPlatform::new();
        let mut signaler = BlinkSignaler::new(&mut mock);
        signaler.cycle(FaultKind::StackOverflow);
        drop(signaler);

        let on_pulses = mock
            .events
            .iter()
            .filter(|e| **e == Event::Led(true))
            .count();
        assert_eq!(on_pulses, 3);
        assert_eq!(mock.events.last(), Some(&Event::Pause(CYCLE_GAP_MS)));
    }
}
