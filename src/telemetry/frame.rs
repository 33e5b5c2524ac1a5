//! Outgoing report frame
//!
//! One report per 5-second cycle: uptime (big-endian u16, in 5 s units),
//! one speed byte (pulse count for the prior cycle), five direction bytes
//! in chronological order (newest last), and the checksum. 9 bytes total,
//! assembled fresh each cycle and never persisted.

use super::checksum::Crc8;

/// Report frame length in bytes
pub const FRAME_LEN: usize = 9;

/// Direction samples carried per frame
pub const DIRECTION_SAMPLES: usize = 5;

/// One cycle's report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    /// Uptime in 5-second cycles, wrapping
    pub uptime: u16,
    /// Speed pulses counted over the prior cycle
    pub speed: u8,
    /// Direction readings, oldest first
    pub directions: [u8; DIRECTION_SAMPLES],
}

impl Report {
    /// Encode the frame, checksum included
    pub fn encode(&self) -> [u8; FRAME_LEN] {
        let mut frame = [0u8; FRAME_LEN];
        frame[0] = (self.uptime >> 8) as u8;
        frame[1] = self.uptime as u8;
        frame[2] = self.speed;
        frame[3..8].copy_from_slice(&self.directions);

        let mut crc = Crc8::new();
        for &b in &frame[..FRAME_LEN - 1] {
            crc.update(b);
        }
        frame[FRAME_LEN - 1] = crc.value();
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_uptime_big_endian() {
        let report = Report {
            uptime: 0x1234,
            speed: 7,
            directions: [1, 2, 3, 4, 5],
        };
        let frame = report.encode();
        assert_eq!(frame[0], 0x12);
        assert_eq!(frame[1], 0x34);
        assert_eq!(frame[2], 7);
        assert_eq!(&frame[3..8], &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn golden_frame() {
        let report = Report {
            uptime: 9,
            speed: 0,
            directions: [0; 5],
        };
        let frame = report.encode();
        assert_eq!(frame, [0x00, 0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xcc]);
    }

    #[test]
    fn checksum_covers_all_payload_bytes() {
        let a = Report {
            uptime: 0,
            speed: 0,
            directions: [0, 0, 0, 0, 0],
        };
        let mut b = a;
        b.directions[4] = 1;
        assert_ne!(a.encode()[8], b.encode()[8]);
    }
}
