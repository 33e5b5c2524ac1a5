//! Mock UART implementation for testing

use crate::platform::{
    traits::{UartConfig, UartInterface},
    Result,
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

/// Mock UART implementation
///
/// Provides in-memory buffers for transmit and receive data, allowing unit
/// tests to verify serial traffic without hardware. Clones share the same
/// buffers, so a test can keep one clone while the station owns the other.
///
/// # Example
///
/// ```
/// use wind_station::platform::mock::MockUart;
/// use wind_station::platform::traits::UartInterface;
///
/// let mut uart = MockUart::new(Default::default());
/// let observer = uart.clone();
///
/// uart.write_byte(b'A').unwrap();
/// assert_eq!(observer.tx_bytes(), b"A");
///
/// uart.inject_rx_data(b"OK");
/// assert_eq!(uart.read_byte(), Some(b'O'));
/// ```
#[derive(Debug, Clone)]
pub struct MockUart {
    config: Rc<Cell<UartConfig>>,
    tx: Rc<RefCell<Vec<u8>>>,
    rx: Rc<RefCell<VecDeque<u8>>>,
    cts: Rc<Cell<bool>>,
    rx_enabled: Rc<Cell<bool>>,
}

impl MockUart {
    /// Create a new mock UART with CTS asserted (ready)
    pub fn new(config: UartConfig) -> Self {
        Self {
            config: Rc::new(Cell::new(config)),
            tx: Rc::new(RefCell::new(Vec::new())),
            rx: Rc::new(RefCell::new(VecDeque::new())),
            cts: Rc::new(Cell::new(true)),
            rx_enabled: Rc::new(Cell::new(false)),
        }
    }

    /// Get transmitted data (for test verification)
    pub fn tx_bytes(&self) -> Vec<u8> {
        self.tx.borrow().clone()
    }

    /// Clear the transmit log
    pub fn clear_tx(&mut self) {
        self.tx.borrow_mut().clear();
    }

    /// Inject receive data (for test setup)
    pub fn inject_rx_data(&mut self, data: &[u8]) {
        self.rx.borrow_mut().extend(data.iter().copied());
    }

    /// Drive the flow-control input
    pub fn set_cts(&mut self, ready: bool) {
        self.cts.set(ready);
    }

    /// Get current baud rate
    pub fn baud_rate(&self) -> u32 {
        self.config.get().baud_rate
    }
}

impl UartInterface for MockUart {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.tx.borrow_mut().push(byte);
        Ok(())
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.rx.borrow_mut().pop_front()
    }

    fn clear_to_send(&self) -> bool {
        self.cts.get()
    }

    fn tx_idle(&self) -> bool {
        // The mock transmit register drains instantly
        true
    }

    fn set_rx_enabled(&mut self, enabled: bool) {
        self.rx_enabled.set(enabled);
    }

    fn rx_enabled(&self) -> bool {
        self.rx_enabled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_uart_write() {
        let mut uart = MockUart::new(UartConfig::default());
        uart.write_byte(b'H').unwrap();
        uart.write_byte(b'i').unwrap();
        assert_eq!(uart.tx_bytes(), b"Hi");
    }

    #[test]
    fn test_mock_uart_read() {
        let mut uart = MockUart::new(UartConfig::default());
        uart.inject_rx_data(b"AB");
        assert_eq!(uart.read_byte(), Some(b'A'));
        assert_eq!(uart.read_byte(), Some(b'B'));
        assert_eq!(uart.read_byte(), None);
    }

    #[test]
    fn test_mock_uart_flow_control() {
        let mut uart = MockUart::new(UartConfig::default());
        assert!(uart.clear_to_send());
        uart.set_cts(false);
        assert!(!uart.clear_to_send());
    }

    #[test]
    fn test_mock_uart_rx_gate() {
        let mut uart = MockUart::new(UartConfig::default());
        assert!(!uart.rx_enabled());
        uart.set_rx_enabled(true);
        assert!(uart.rx_enabled());
    }

    #[test]
    fn test_mock_uart_clone_shares_buffers() {
        let mut uart = MockUart::new(UartConfig::default());
        let observer = uart.clone();
        uart.write_byte(0x42).unwrap();
        assert_eq!(observer.tx_bytes(), [0x42]);
    }
}
