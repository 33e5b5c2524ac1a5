//! Mock fail-safe timer implementation for testing

use crate::platform::{
    traits::{ResetCause, WatchdogInterface, WatchdogPeriod},
    Result,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

#[derive(Debug)]
struct WatchdogLog {
    acknowledgements: u32,
    armed: Vec<WatchdogPeriod>,
    cause: ResetCause,
    self_reset_flag: bool,
}

/// Mock fail-safe timer
///
/// Records acknowledgements and re-arm requests instead of counting down,
/// and carries the settable reset cause and the persistent self-reset flag
/// so startup triage can be tested on the host.
#[derive(Debug, Clone)]
pub struct MockWatchdog {
    log: Rc<RefCell<WatchdogLog>>,
}

impl MockWatchdog {
    /// Create a new mock watchdog reporting a power-on reset
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(WatchdogLog {
                acknowledgements: 0,
                armed: Vec::new(),
                cause: ResetCause::PowerOn,
                self_reset_flag: false,
            })),
        }
    }

    /// Set the reset cause reported to the station (test setup)
    pub fn set_reset_cause(&mut self, cause: ResetCause) {
        self.log.borrow_mut().cause = cause;
    }

    /// Pre-set the self-reset flag, as a prior `force_reset` would have
    pub fn preset_self_reset_flag(&mut self, set: bool) {
        self.log.borrow_mut().self_reset_flag = set;
    }

    /// Number of acknowledgements seen so far
    pub fn acknowledgements(&self) -> u32 {
        self.log.borrow().acknowledgements
    }

    /// Most recent re-arm request, if any
    pub fn last_armed(&self) -> Option<WatchdogPeriod> {
        self.log.borrow().armed.last().copied()
    }
}

impl Default for MockWatchdog {
    fn default() -> Self {
        Self::new()
    }
}

impl WatchdogInterface for MockWatchdog {
    fn arm(&mut self, period: WatchdogPeriod) -> Result<()> {
        self.log.borrow_mut().armed.push(period);
        Ok(())
    }

    fn acknowledge(&mut self) {
        self.log.borrow_mut().acknowledgements += 1;
    }

    fn reset_cause(&self) -> ResetCause {
        self.log.borrow().cause
    }

    fn set_self_reset_flag(&mut self, set: bool) {
        self.log.borrow_mut().self_reset_flag = set;
    }

    fn self_reset_flag(&self) -> bool {
        self.log.borrow().self_reset_flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_watchdog_acknowledge() {
        let mut wdt = MockWatchdog::new();
        assert_eq!(wdt.acknowledgements(), 0);
        wdt.acknowledge();
        wdt.acknowledge();
        assert_eq!(wdt.acknowledgements(), 2);
    }

    #[test]
    fn test_mock_watchdog_arm() {
        let mut wdt = MockWatchdog::new();
        assert_eq!(wdt.last_armed(), None);
        wdt.arm(WatchdogPeriod::Minimum).unwrap();
        assert_eq!(wdt.last_armed(), Some(WatchdogPeriod::Minimum));
    }

    #[test]
    fn test_mock_watchdog_flag_and_cause() {
        let mut wdt = MockWatchdog::new();
        assert_eq!(wdt.reset_cause(), ResetCause::PowerOn);
        assert!(!wdt.self_reset_flag());

        wdt.set_reset_cause(ResetCause::FailsafeTimer);
        wdt.set_self_reset_flag(true);
        assert_eq!(wdt.reset_cause(), ResetCause::FailsafeTimer);
        assert!(wdt.self_reset_flag());
    }
}
