//! Pulse counter interface trait

/// Pulse counter interface trait
///
/// The anemometer's speed output is a pulse train counted by a free-running
/// hardware counter. The sampler reads and resets it once per cycle; pulses
/// arriving between the read and the reset are lost, which the report format
/// tolerates (one pulse per cycle of error at most).
pub trait PulseCounterInterface {
    /// Current count since the last reset
    fn read(&self) -> u8;

    /// Reset the counter to zero
    fn reset(&mut self);
}
