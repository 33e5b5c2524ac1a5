//! Report checksum engine
//!
//! An 8-bit running checksum folded byte by byte over the outgoing frame.
//! The update rule XORs together a fixed basis constant for every set bit of
//! `accumulator ^ input`; this is the standard CRC-8/MAXIM reduction
//! expressed as a sum of basis contributions instead of a 256-entry table
//! (the two are equivalent because CRC tables are linear over GF(2)).
//!
//! The basis constants must not change: the deployed receivers verify
//! reports against exactly this polynomial.

/// Basis contributions for bits 0..7 of `accumulator ^ input`.
const BASIS: [u8; 8] = [0x5e, 0xbc, 0x61, 0xc2, 0x9d, 0x23, 0x46, 0x8c];

/// Running 8-bit checksum over one frame
///
/// Stateless between frames: `reset` (or a fresh value) starts a new frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Crc8 {
    acc: u8,
}

impl Crc8 {
    /// Create a checksum engine with a zeroed accumulator
    pub const fn new() -> Self {
        Self { acc: 0 }
    }

    /// Zero the accumulator for a new frame
    pub fn reset(&mut self) {
        self.acc = 0;
    }

    /// Fold one byte into the accumulator and return the new value
    pub fn update(&mut self, input: u8) -> u8 {
        let selector = self.acc ^ input;
        let mut folded = 0u8;
        for (bit, basis) in BASIS.iter().enumerate() {
            if selector & (1 << bit) != 0 {
                folded ^= basis;
            }
        }
        self.acc = folded;
        self.acc
    }

    /// Current accumulator value (the checksum byte once all data is folded)
    pub fn value(&self) -> u8 {
        self.acc
    }
}
