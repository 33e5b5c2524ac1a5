//! Time base and cycle scheduler
//!
//! A periodic one-second hardware tick drives the whole station. Each tick
//! advances the cycle phase (0..4); every fifth tick wraps the phase and
//! increments the uptime counter, so uptime counts 5-second macro cycles.
//!
//! The clock is owned by the interrupt context (the tick handler mutates
//! it); the main loop only reads snapshots through [`SharedState`] and reads
//! the (phase, uptime) pair immediately after observing a tick boundary,
//! never concurrently with the rollover.
//!
//! [`SharedState`]: crate::core::traits::SharedState

/// Ticks per macro cycle (seconds per report)
pub const TICKS_PER_CYCLE: u8 = 5;

/// Cycle clock state
///
/// Invariants: `phase` is always in `0..TICKS_PER_CYCLE`; `uptime`
/// increments exactly once per `TICKS_PER_CYCLE` ticks and wraps silently
/// at the 16-bit boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleClock {
    phase: u8,
    uptime: u16,
}

impl CycleClock {
    /// Create a clock at phase 0, uptime 0
    pub const fn new() -> Self {
        Self { phase: 0, uptime: 0 }
    }

    /// Advance by one tick (interrupt context only)
    pub fn tick(&mut self) {
        self.phase += 1;
        if self.phase == TICKS_PER_CYCLE {
            self.phase = 0;
            self.uptime = self.uptime.wrapping_add(1);
        }
    }

    /// Current phase within the macro cycle (0..4)
    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// Elapsed macro cycles since the last counter reset (wrapping u16)
    pub fn uptime(&self) -> u16 {
        self.uptime
    }

    /// Reset phase and uptime to zero
    ///
    /// Done once after startup initialization completes, so uptime measures
    /// time in normal operation only.
    pub fn reset(&mut self) {
        self.phase = 0;
        self.uptime = 0;
    }

    /// Rewind the phase to the start of the current cycle, keeping uptime
    ///
    /// Used when a cycle's readings are discarded after an unexpected modem
    /// power-up: the cycle restarts without transmitting.
    pub fn restart_cycle(&mut self) {
        self.phase = 0;
    }
}

impl Default for CycleClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_and_uptime_follow_tick_count() {
        let mut clock = CycleClock::new();
        for n in 1u32..=1000 {
            clock.tick();
            assert_eq!(clock.phase() as u32, n % 5);
            assert_eq!(clock.uptime() as u32, n / 5);
        }
    }

    #[test]
    fn uptime_wraps_silently() {
        let mut clock = CycleClock::new();
        // 5 * 65536 ticks wrap uptime back to 0
        for _ in 0..5u32 * 65536 {
            clock.tick();
        }
        assert_eq!(clock.uptime(), 0);
        assert_eq!(clock.phase(), 0);
    }

    #[test]
    fn restart_cycle_keeps_uptime() {
        let mut clock = CycleClock::new();
        for _ in 0..12 {
            clock.tick();
        }
        assert_eq!(clock.uptime(), 2);
        assert_eq!(clock.phase(), 2);

        clock.restart_cycle();
        assert_eq!(clock.phase(), 0);
        assert_eq!(clock.uptime(), 2);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut clock = CycleClock::new();
        for _ in 0..17 {
            clock.tick();
        }
        clock.reset();
        assert_eq!(clock.phase(), 0);
        assert_eq!(clock.uptime(), 0);
    }
}
