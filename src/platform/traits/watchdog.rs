//! Fail-safe timer (watchdog) interface trait
//!
//! The fail-safe timer is the system's sole guarantee of forward progress:
//! it must be acknowledged every loop iteration and during any delay longer
//! than its period, and it is deliberately re-armed short to force a full
//! controller restart.

use crate::platform::Result;

/// Cause of the most recent controller reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetCause {
    /// True power-on reset
    PowerOn,
    /// Fail-safe timer expired (deliberately or on its own)
    FailsafeTimer,
}

/// Fail-safe timer period selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchdogPeriod {
    /// Normal operating period (~67 s on the reference hardware)
    Normal,
    /// Minimum period (~8 s), armed when a deliberate reset is wanted
    Minimum,
}

/// Fail-safe timer interface trait
///
/// Also carries the single persistent reset-cause bit: a flag that survives
/// a controller reset (but not power loss) meaning "the upcoming reset is
/// self-inflicted and the modem is already known to be off".
pub trait WatchdogInterface {
    /// Arm or re-arm the timer with the given period
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Watchdog` if the period is not supported.
    fn arm(&mut self, period: WatchdogPeriod) -> Result<()>;

    /// Acknowledge the timer, restarting its countdown
    fn acknowledge(&mut self);

    /// Cause of the most recent reset
    ///
    /// Stable for the lifetime of this boot; platforms latch it at startup.
    fn reset_cause(&self) -> ResetCause;

    /// Set or clear the self-inflicted-reset flag
    fn set_self_reset_flag(&mut self, set: bool);

    /// Read the self-inflicted-reset flag
    fn self_reset_flag(&self) -> bool;
}
