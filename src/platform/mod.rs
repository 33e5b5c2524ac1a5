//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the wind station's
//! peripherals. Register-level configuration (clock sources, timer/ADC/UART
//! setup, GPIO direction switching, the presence comparator) lives behind
//! these traits; the control core never touches registers directly.

pub mod error;
pub mod traits;

// Mock implementations for hardware-free testing
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{
    AdcInterface, GpioInterface, GpioMode, Platform, PresenceProbeInterface,
    PulseCounterInterface, ResetCause, TimerInterface, UartConfig, UartInterface,
    WatchdogInterface, WatchdogPeriod,
};
