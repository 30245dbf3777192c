//! Calibrated busy-wait.

use core::hint::spin_loop;

/// Divisor turning a core clock frequency into busy-wait iterations per
/// millisecond.
const CAL_DIVISOR: u32 = 7000;

/// Busy-wait delay calibrated from a compile-time clock frequency.
///
/// Approximate, not cycle-exact; it only paces human-visible blinking.
/// It must keep working with a corrupted heap or stack, so it touches
/// nothing but the loop counter.
#[derive(Clone, Copy)]
pub struct BusyWait {
    iters_per_ms: u32,
}

impl BusyWait {
    /// Calibrate for a core clock in Hz.
    pub const fn from_cpu_hz(cpu_hz: u32) -> BusyWait {
        BusyWait {
            iters_per_ms: cpu_hz / CAL_DIVISOR,
        }
    }

    /// Spin iterations performed by `delay_ms(ms)`.
    pub fn iterations(self, ms: u32) -> u64 {
        ms as u64 * self.iters_per_ms as u64
    }

    /// Burn cycles for roughly `ms` milliseconds.
    pub fn delay_ms(self, ms: u32) {
        let mut remaining = self.iterations(ms);
        while remaining > 0 {
            spin_loop();
            remaining -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delay_spins_zero_iterations() {
        let delay = BusyWait::from_cpu_hz(84_000_000);
        assert_eq!(delay.iterations(0), 0);
        delay.delay_ms(0);
    }

    #[test]
    fn iterations_increase_strictly_with_duration() {
        let delay = BusyWait::from_cpu_hz(84_000_000);
        let mut last = delay.iterations(0);
        for ms in 1..=10 {
            let next = delay.iterations(ms);
            assert!(next > last);
            last = next;
        }
    }

    #[test]
    fn due_calibration_matches_clock() {
        // 84 MHz / 7000 iterations per millisecond.
        let delay = BusyWait::from_cpu_hz(84_000_000);
        assert_eq!(delay.iterations(1), 12_000);
        assert_eq!(delay.iterations(300), 3_600_000);
    }

    #[test]
    fn short_delay_returns() {
        // One iteration per millisecond; must terminate promptly.
        BusyWait::from_cpu_hz(CAL_DIVISOR).delay_ms(3);
    }
}
