//! Mock Timer implementation for testing

use crate::platform::{traits::TimerInterface, Result};
use std::cell::Cell;
use std::rc::Rc;

/// Mock Timer implementation
///
/// Delays advance a simulated clock instead of sleeping, so tests can assert
/// on elapsed time (the modem power-up sequence is ~43 s of pure delay).
#[derive(Debug, Clone)]
pub struct MockTimer {
    now_us: Rc<Cell<u64>>,
}

impl MockTimer {
    /// Create a new mock timer at t = 0
    pub fn new() -> Self {
        Self {
            now_us: Rc::new(Cell::new(0)),
        }
    }
}

impl Default for MockTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.now_us.set(self.now_us.get().wrapping_add(us as u64));
        Ok(())
    }

    fn now_us(&self) -> u64 {
        self.now_us.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_timer_delay_us() {
        let mut timer = MockTimer::new();
        assert_eq!(timer.now_us(), 0);

        timer.delay_us(1000).unwrap();
        assert_eq!(timer.now_us(), 1000);

        timer.delay_us(500).unwrap();
        assert_eq!(timer.now_us(), 1500);
    }

    #[test]
    fn test_mock_timer_delay_ms() {
        let mut timer = MockTimer::new();
        timer.delay_ms(5).unwrap();
        assert_eq!(timer.now_us(), 5000);
    }

    #[test]
    fn test_mock_timer_clone_shares_clock() {
        let mut timer = MockTimer::new();
        let observer = timer.clone();
        timer.delay_ms(256).unwrap();
        assert_eq!(observer.now_us(), 256_000);
    }
}
