//! UART interface trait
//!
//! This module defines the byte-level serial interface to the modem,
//! including the modem-driven flow-control input (CTS) and receive gating.

use crate::platform::Result;

/// UART configuration
#[derive(Debug, Clone, Copy)]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baud_rate: u32,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baud_rate: 19_200, // fixed rate negotiated with the modem
        }
    }
}

/// UART interface trait
///
/// Platform implementations must provide this interface for serial
/// communication with the modem.
///
/// The transport layer never writes a byte unless [`clear_to_send`] and
/// [`tx_idle`] both report ready; a permanently stalled flow-control line
/// therefore hangs the caller, and the fail-safe timer is the only escape.
///
/// [`clear_to_send`]: UartInterface::clear_to_send
/// [`tx_idle`]: UartInterface::tx_idle
pub trait UartInterface {
    /// Write one byte to the transmit register
    ///
    /// The caller is responsible for checking [`tx_idle`] first; platforms
    /// may overwrite an in-flight byte otherwise.
    ///
    /// [`tx_idle`]: UartInterface::tx_idle
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart(UartError::WriteFailed)` if the
    /// peripheral rejects the write.
    fn write_byte(&mut self, byte: u8) -> Result<()>;

    /// Read one received byte, if any is buffered
    ///
    /// Returns `None` when the receive buffer is empty. Reading while
    /// reception is disabled drains whatever the hardware still holds.
    fn read_byte(&mut self) -> Option<u8>;

    /// Whether the remote end is ready to accept a byte (CTS asserted)
    fn clear_to_send(&self) -> bool;

    /// Whether the transmit register is empty
    fn tx_idle(&self) -> bool;

    /// Enable or disable reception
    ///
    /// Disabling reception also clears any pending overrun condition, the
    /// way re-enabling the receiver does on the underlying peripheral.
    fn set_rx_enabled(&mut self, enabled: bool);

    /// Whether reception is currently enabled
    fn rx_enabled(&self) -> bool;
}
