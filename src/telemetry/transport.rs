//! Flow-controlled serial transport
//!
//! Byte and string transmission toward the modem. Every byte waits for the
//! modem's flow-control line and an idle transmit register, then pads a
//! short guard delay so the modem's buffering is never overrun.
//!
//! There is no retry and no error signaling here: blocking on flow control
//! is the only backpressure. A permanently stalled line hangs the caller,
//! and the fail-safe timer is the designed escape.

use crate::platform::{Result, TimerInterface, UartInterface};

/// Guard delay after each byte, microseconds
const INTER_BYTE_GUARD_US: u32 = 50;

/// Send one byte with flow control and the inter-byte guard delay
pub fn send_byte<U, T>(uart: &mut U, timer: &mut T, byte: u8) -> Result<()>
where
    U: UartInterface,
    T: TimerInterface,
{
    while !uart.clear_to_send() || !uart.tx_idle() {
        core::hint::spin_loop();
    }
    uart.write_byte(byte)?;
    timer.delay_us(INTER_BYTE_GUARD_US)
}

/// Send a byte sequence, one flow-controlled byte at a time
pub fn send_bytes<U, T>(uart: &mut U, timer: &mut T, bytes: &[u8]) -> Result<()>
where
    U: UartInterface,
    T: TimerInterface,
{
    for &b in bytes {
        send_byte(uart, timer, b)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockTimer, MockUart};

    #[test]
    fn send_byte_writes_and_pads() {
        let mut uart = MockUart::new(Default::default());
        let mut timer = MockTimer::new();

        send_byte(&mut uart, &mut timer, b'A').unwrap();
        assert_eq!(uart.tx_bytes(), b"A");
        assert_eq!(timer.now_us(), INTER_BYTE_GUARD_US as u64);
    }

    #[test]
    fn send_bytes_preserves_order() {
        let mut uart = MockUart::new(Default::default());
        let mut timer = MockTimer::new();

        send_bytes(&mut uart, &mut timer, b"AT+CIPSEND=9\r").unwrap();
        assert_eq!(uart.tx_bytes(), b"AT+CIPSEND=9\r");
        assert_eq!(timer.now_us(), 13 * INTER_BYTE_GUARD_US as u64);
    }

    #[test]
    fn empty_sequence_is_a_no_op() {
        let mut uart = MockUart::new(Default::default());
        let mut timer = MockTimer::new();

        send_bytes(&mut uart, &mut timer, b"").unwrap();
        assert!(uart.tx_bytes().is_empty());
        assert_eq!(timer.now_us(), 0);
    }
}
