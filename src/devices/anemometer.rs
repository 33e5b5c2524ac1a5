//! Anemometer sampling
//!
//! Wind direction comes from a potentiometer on the ADC channel, sampled
//! once per tick; wind speed is a pulse train counted by hardware and
//! captured once per cycle at the cycle boundary, before any pulses for the
//! new cycle accumulate.

use crate::platform::{AdcInterface, PulseCounterInterface, Result, TimerInterface};

/// Pre-conversion settling time for the direction channel, microseconds.
/// The pot's source impedance needs at least ~25 us of acquisition.
const SETTLE_US: u32 = 25;

/// Number of direction readings per report cycle
pub const SAMPLES_PER_CYCLE: usize = 5;

/// One cycle's direction readings, oldest first
///
/// The reading captured at phase `p` is stored at index `(p + 4) % 5`, so
/// the buffer is chronological across the transmit window: indices 0..3
/// hold phases 1..4 of the finished cycle and index 4 holds the phase-0
/// reading taken the same tick the frame goes out (the newest).
///
/// Overwritten in place each cycle; no history is retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirectionSamples {
    samples: [u8; SAMPLES_PER_CYCLE],
}

impl DirectionSamples {
    /// Create a zeroed sample buffer
    pub const fn new() -> Self {
        Self {
            samples: [0; SAMPLES_PER_CYCLE],
        }
    }

    /// Store the reading captured at the given cycle phase
    pub fn record(&mut self, phase: u8, value: u8) {
        debug_assert!((phase as usize) < SAMPLES_PER_CYCLE);
        let index = ((phase as usize) + SAMPLES_PER_CYCLE - 1) % SAMPLES_PER_CYCLE;
        self.samples[index] = value;
    }

    /// The buffer contents, oldest reading first
    pub fn as_array(&self) -> [u8; SAMPLES_PER_CYCLE] {
        self.samples
    }
}

/// Capture one direction reading
///
/// Applies the settling delay, then runs a single conversion.
pub fn sample_direction<A, T>(adc: &mut A, timer: &mut T) -> Result<u8>
where
    A: AdcInterface,
    T: TimerInterface,
{
    timer.delay_us(SETTLE_US)?;
    adc.read()
}

/// Capture and reset the speed pulse count at the cycle boundary
///
/// The returned value is the prior cycle's pulse count.
pub fn capture_speed<C>(counter: &mut C) -> u8
where
    C: PulseCounterInterface,
{
    let pulses = counter.read();
    counter.reset();
    pulses
}
