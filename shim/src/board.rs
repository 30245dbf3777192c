//! Real-hardware binding and the FFI symbols the kernel build and the
//! vector table link against.

use core::fmt;
use core::fmt::Write;

use crate::delay::BusyWait;
use crate::platform::Platform;
use crate::reset::AircrAccess;

/// The Due hardware behind the [`Platform`] seam.
pub struct DueBoard {
    led: board::pio::Led,
    console: board::uart::Uart,
    delay: BusyWait,
}

impl DueBoard {
    /// # Safety
    ///
    /// The fault path owns the machine once entered; nothing else runs
    /// afterwards, so taking the peripherals unchecked is sound there.
    /// Any other caller must guarantee exclusive use of the led pin and
    /// the UART transmitter.
    pub unsafe fn steal() -> DueBoard {
        DueBoard {
            led: board::pio::Led::new(),
            console: board::uart::Uart::new(),
            delay: BusyWait::from_cpu_hz(board::CPU_HZ),
        }
    }
}

impl Platform for DueBoard {
    fn disable_interrupts(&mut self) {
        board::cpu::disable_interrupts()
    }

    fn led_output(&mut self) {
        self.led.set_output()
    }

    fn led_write(&mut self, on: bool) {
        if on {
            self.led.set_high()
        } else {
            self.led.set_low()
        }
    }

    fn pause_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms)
    }

    fn report(&mut self, args: fmt::Arguments) {
        // Best effort; the console may not be initialized yet.
        let _ = self.console.write_fmt(args);
        let _ = self.console.write_str("\n");
    }
}

impl AircrAccess for board::scb::Scb {
    fn read(&self) -> u32 {
        self.aircr()
    }

    fn write(&mut self, value: u32) {
        self.set_aircr(value)
    }
}

/// Symbols with externally-mandated names.
///
/// The FreeRTOS build links against the `vApplication*` hooks and the
/// runtime-stats stubs; the startup code's vector table expects the
/// `*_Handler` names, with the `*_isr` spellings kept as legacy aliases.
#[allow(non_snake_case)]
pub mod ffi {
    use core::ffi::{c_char, c_void, CStr};

    use super::DueBoard;
    use crate::fault::FaultKind;
    use crate::hooks;

    /// Opaque FreeRTOS task handle.
    pub type TaskHandle = *mut c_void;

    fn fatal(fault: FaultKind) -> ! {
        let platform = unsafe { DueBoard::steal() };
        hooks::fail(platform, fault)
    }

    /// configASSERT failure: one pulse.
    #[no_mangle]
    pub extern "C" fn assertBlink() {
        fatal(FaultKind::Assertion)
    }

    /// pvPortMalloc failure: two pulses.
    #[no_mangle]
    pub extern "C" fn vApplicationMallocFailedHook() {
        fatal(FaultKind::AllocationFailure)
    }

    /// Stack overflow detected by the kernel: three pulses.
    ///
    /// # Safety
    ///
    /// `pcTaskName` must be null or point at a nul-terminated string; the
    /// kernel guarantees this.
    #[no_mangle]
    pub unsafe extern "C" fn vApplicationStackOverflowHook(
        pxTask: TaskHandle,
        pcTaskName: *const c_char,
    ) {
        let _ = pxTask;
        let name = if pcTaskName.is_null() {
            None
        } else {
            CStr::from_ptr(pcTaskName).to_str().ok()
        };
        let platform = DueBoard::steal();
        hooks::fail_stack_overflow(platform, name)
    }

    /// Idle-task iteration. Must return promptly.
    #[no_mangle]
    pub extern "C" fn vApplicationIdleHook() {
        hooks::on_idle()
    }

    /// Tick interrupt. Interrupt context; the default is a no-op.
    #[no_mangle]
    pub extern "C" fn vApplicationTickHook() {
        hooks::on_tick()
    }

    /// Hard fault vector: four pulses.
    #[no_mangle]
    pub extern "C" fn HardFault_Handler() {
        fatal(FaultKind::HardFault)
    }

    /// Legacy hard fault name.
    #[no_mangle]
    pub extern "C" fn hard_fault_isr() {
        fatal(FaultKind::HardFault)
    }

    /// Bus fault vector: five pulses.
    #[no_mangle]
    pub extern "C" fn BusFault_Handler() {
        fatal(FaultKind::BusFault)
    }

    /// Legacy bus fault name.
    #[no_mangle]
    pub extern "C" fn bus_fault_isr() {
        fatal(FaultKind::BusFault)
    }

    /// Usage fault vector: six pulses.
    #[no_mangle]
    pub extern "C" fn UsageFault_Handler() {
        fatal(FaultKind::UsageFault)
    }

    /// Legacy usage fault name.
    #[no_mangle]
    pub extern "C" fn usage_fault_isr() {
        fatal(FaultKind::UsageFault)
    }

    /// Runtime-stats timer setup stub.
    #[no_mangle]
    pub extern "C" fn vMainConfigureTimerForRunTimeStats() {
        hooks::configure_runtime_stats_timer()
    }

    /// Runtime-stats counter stub. `unsigned long` is 32 bits on this
    /// target.
    #[no_mangle]
    pub extern "C" fn ulMainGetRunTimeCounterValue() -> u32 {
        hooks::runtime_stats_counter()
    }
}
