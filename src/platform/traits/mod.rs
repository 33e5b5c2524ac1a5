//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod adc;
pub mod gpio;
pub mod platform;
pub mod probe;
pub mod pulse;
pub mod timer;
pub mod uart;
pub mod watchdog;

// Re-export trait interfaces
pub use adc::AdcInterface;
pub use gpio::{GpioInterface, GpioMode};
pub use platform::Platform;
pub use probe::PresenceProbeInterface;
pub use pulse::PulseCounterInterface;
pub use timer::TimerInterface;
pub use uart::{UartConfig, UartInterface};
pub use watchdog::{ResetCause, WatchdogInterface, WatchdogPeriod};
