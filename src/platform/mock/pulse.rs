//! Mock pulse counter implementation for testing

use crate::platform::traits::PulseCounterInterface;
use std::cell::Cell;
use std::rc::Rc;

/// Mock pulse counter implementation
#[derive(Debug, Clone)]
pub struct MockPulseCounter {
    count: Rc<Cell<u8>>,
}

impl MockPulseCounter {
    /// Create a new mock counter at zero
    pub fn new() -> Self {
        Self {
            count: Rc::new(Cell::new(0)),
        }
    }

    /// Simulate accumulated pulses
    pub fn set_count(&mut self, count: u8) {
        self.count.set(count);
    }
}

impl Default for MockPulseCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl PulseCounterInterface for MockPulseCounter {
    fn read(&self) -> u8 {
        self.count.get()
    }

    fn reset(&mut self) {
        self.count.set(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_pulse_counter() {
        let mut counter = MockPulseCounter::new();
        assert_eq!(counter.read(), 0);

        counter.set_count(17);
        assert_eq!(counter.read(), 17);

        counter.reset();
        assert_eq!(counter.read(), 0);
    }
}
