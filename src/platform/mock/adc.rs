//! Mock ADC implementation for testing

use crate::platform::{traits::AdcInterface, Result};
use std::cell::Cell;
use std::rc::Rc;

/// Mock ADC implementation
///
/// Returns a test-settable value on every conversion.
#[derive(Debug, Clone)]
pub struct MockAdc {
    value: Rc<Cell<u8>>,
}

impl MockAdc {
    /// Create a new mock ADC reading 0
    pub fn new() -> Self {
        Self {
            value: Rc::new(Cell::new(0)),
        }
    }

    /// Set the value returned by subsequent conversions
    pub fn set_value(&mut self, value: u8) {
        self.value.set(value);
    }
}

impl Default for MockAdc {
    fn default() -> Self {
        Self::new()
    }
}

impl AdcInterface for MockAdc {
    fn read(&mut self) -> Result<u8> {
        Ok(self.value.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_adc_value() {
        let mut adc = MockAdc::new();
        assert_eq!(adc.read().unwrap(), 0);

        adc.set_value(0x7f);
        assert_eq!(adc.read().unwrap(), 0x7f);
        assert_eq!(adc.read().unwrap(), 0x7f);
    }
}
