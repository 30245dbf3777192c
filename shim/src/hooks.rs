//! Kernel lifecycle hooks.
//!
//! The fault-class entry points print one diagnostic line and hand the
//! machine to the [`BlinkSignaler`]; they never return. The idle and tick
//! entry points do the opposite: they always return promptly, forwarding
//! to application callbacks registered at init time. Injected callbacks
//! replace the weak symbols of the usual C shims so the indirection is
//! explicit and testable.

use core::cell::Cell;

use critical_section::Mutex;

use crate::fault::FaultKind;
use crate::platform::Platform;
use crate::signal::BlinkSignaler;

type HookSlot = Mutex<Cell<Option<fn()>>>;

static IDLE_HOOK: HookSlot = Mutex::new(Cell::new(None));
static TICK_HOOK: HookSlot = Mutex::new(Cell::new(None));

//--------------------------------------------------------------------------------------------------
// Fault-class entry points
//--------------------------------------------------------------------------------------------------

fn report_fault<P: Platform>(platform: &mut P, fault: FaultKind, task_name: Option<&str>) {
    match (fault, task_name) {
        (FaultKind::StackOverflow, Some(name)) => {
            platform.report(format_args!("Stack overflow in task [{}]", name))
        }
        _ => platform.report(format_args!("{}", fault.describe())),
    }
}

/// Report `fault` on the diagnostic sink, then blink its pulse code
/// forever.
pub fn fail<P: Platform>(mut platform: P, fault: FaultKind) -> ! {
    report_fault(&mut platform, fault, None);
    BlinkSignaler::new(platform).halt(fault)
}

/// Stack-overflow entry point, naming the offending task when the kernel
/// supplies one.
pub fn fail_stack_overflow<P: Platform>(mut platform: P, task_name: Option<&str>) -> ! {
    report_fault(&mut platform, FaultKind::StackOverflow, task_name);
    BlinkSignaler::new(platform).halt(FaultKind::StackOverflow)
}

//--------------------------------------------------------------------------------------------------
// Idle, tick and runtime-stats entry points
//--------------------------------------------------------------------------------------------------

/// Register (or with `None` clear) the application's idle-time polling
/// routine.
///
/// It runs on every iteration of the kernel's idle task, which is also
/// responsible for reclaiming deleted-task memory, so the routine must
/// return promptly and never block.
pub fn set_idle_hook(hook: Option<fn()>) {
    critical_section::with(|cs| IDLE_HOOK.borrow(cs).set(hook));
}

/// Register (or with `None` clear) a tick callback.
///
/// It runs in interrupt context on every timer tick and must not call
/// anything that can block.
pub fn set_tick_hook(hook: Option<fn()>) {
    critical_section::with(|cs| TICK_HOOK.borrow(cs).set(hook));
}

/// Called by the kernel on every idle-task iteration. Always returns.
pub fn on_idle() {
    if let Some(hook) = critical_section::with(|cs| IDLE_HOOK.borrow(cs).get()) {
        hook();
    }
}

/// Called from the tick interrupt. No-op unless a callback is registered.
pub fn on_tick() {
    if let Some(hook) = critical_section::with(|cs| TICK_HOOK.borrow(cs).get()) {
        hook();
    }
}

/// Runtime-statistics timer setup stub. The stats feature is unused; this
/// only keeps the kernel's linker happy.
pub fn configure_runtime_stats_timer() {}

/// Runtime-statistics counter stub.
pub fn runtime_stats_counter() -> u32 {
    0
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::platform::mock::MockPlatform;

    #[test]
    fn idle_forwards_to_the_registered_callback_and_returns() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn bump() {
            CALLS.fetch_add(1, Ordering::SeqCst);
        }

        // Default behavior: nothing registered, returns immediately.
        set_idle_hook(None);
        on_idle();
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);

        set_idle_hook(Some(bump));
        on_idle();
        on_idle();
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);

        set_idle_hook(None);
        on_idle();
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn tick_is_a_no_op_by_default() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn bump() {
            CALLS.fetch_add(1, Ordering::SeqCst);
        }

        set_tick_hook(None);
        on_tick();
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);

        set_tick_hook(Some(bump));
        on_tick();
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);

        set_tick_hook(None);
    }

    #[test]
    fn runtime_stats_stubs_do_nothing() {
        configure_runtime_stats_timer();
        assert_eq!(runtime_stats_counter(), 0);
    }

    #[test]
    fn each_fault_class_reports_its_own_line() {
        for fault in FaultKind::ALL.iter() {
            let mut mock = MockPlatform::new();
            report_fault(&mut mock, *fault, None);
            assert!(mock.reports().contains(fault.describe()));
        }
    }

    #[test]
    fn stack_overflow_report_names_the_task() {
        let mut mock = MockPlatform::new();
        report_fault(&mut mock, FaultKind::StackOverflow, Some("Task1"));
        let line = mock.reports();
        assert!(line.contains("Stack overflow"));
        assert!(line.contains("Task1"));
    }

    #[test]
    fn stack_overflow_report_without_a_name_still_identifies_the_fault() {
        let mut mock = MockPlatform::new();
        report_fault(&mut mock, FaultKind::StackOverflow, None);
        assert!(mock.reports().contains("Stack overflow"));
    }
}
