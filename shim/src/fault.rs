//! The six unrecoverable condition classes.

/// Fault classes the shim can signal, each with a distinct blink code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaultKind {
    /// A kernel consistency check (configASSERT) failed.
    Assertion,
    /// The kernel's allocator could not satisfy a request.
    AllocationFailure,
    /// A task overran its stack.
    StackOverflow,
    /// The hard fault exception vector fired.
    HardFault,
    /// The bus fault exception vector fired.
    BusFault,
    /// The usage fault exception vector fired.
    UsageFault,
}

impl FaultKind {
    /// All fault classes, in pulse-code order.
    pub const ALL: [FaultKind; 6] = [
        FaultKind::Assertion,
        FaultKind::AllocationFailure,
        FaultKind::StackOverflow,
        FaultKind::HardFault,
        FaultKind::BusFault,
        FaultKind::UsageFault,
    ];

    /// Number of short pulses identifying this class.
    ///
    /// The pulse codes are the externally observable fault identity and
    /// never change.
    pub fn pulses(self) -> u32 {
        match self {
            FaultKind::Assertion => 1,
            FaultKind::AllocationFailure => 2,
            FaultKind::StackOverflow => 3,
            FaultKind::HardFault => 4,
            FaultKind::BusFault => 5,
            FaultKind::UsageFault => 6,
        }
    }

    /// One-line description for the diagnostic sink.
    pub fn describe(self) -> &'static str {
        match self {
            FaultKind::Assertion => "Assertion failed",
            FaultKind::AllocationFailure => "Malloc failed",
            FaultKind::StackOverflow => "Stack overflow",
            FaultKind::HardFault => "Hard fault",
            FaultKind::BusFault => "Bus fault",
            FaultKind::UsageFault => "Usage fault",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_codes_are_one_through_six() {
        for (i, fault) in FaultKind::ALL.iter().enumerate() {
            assert_eq!(fault.pulses(), i as u32 + 1);
        }
    }

    #[test]
    fn descriptions_name_the_fault() {
        assert!(FaultKind::StackOverflow.describe().contains("Stack overflow"));
        assert!(FaultKind::HardFault.describe().contains("Hard fault"));
        assert!(FaultKind::BusFault.describe().contains("Bus fault"));
        assert!(FaultKind::UsageFault.describe().contains("Usage fault"));
        assert!(FaultKind::AllocationFailure.describe().contains("Malloc"));
        assert!(FaultKind::Assertion.describe().contains("Assert"));
    }
}
