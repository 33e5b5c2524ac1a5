//! Timer interface trait
//!
//! This module defines the delay/timing interface that platform implementations must provide.

use crate::platform::Result;

/// Timer interface trait
///
/// Provides fixed-duration blocking delays and a monotonic microsecond
/// clock. All "suspension" in the control loop outside the tick poll goes
/// through these delays.
pub trait TimerInterface {
    /// Block for the given number of microseconds
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Block for the given number of milliseconds
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    /// Monotonic time since boot in microseconds
    fn now_us(&self) -> u64;
}
