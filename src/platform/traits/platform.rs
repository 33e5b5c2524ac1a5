//! Root platform trait
//!
//! This module defines the root Platform trait that aggregates all peripheral interfaces.

use super::{
    AdcInterface, GpioInterface, PresenceProbeInterface, PulseCounterInterface, TimerInterface,
    UartConfig, UartInterface, WatchdogInterface,
};
use crate::platform::Result;

/// Root platform trait
///
/// This trait aggregates all platform-specific peripheral interfaces and
/// provides platform initialization. Implementations provide concrete types
/// for each peripheral via associated types, enabling compile-time dispatch.
///
/// The control core obtains each peripheral once at startup through the
/// `create_*` constructors and owns it from then on; no peripheral is shared
/// between the main loop and the interrupt context through this trait.
pub trait Platform: Sized {
    /// UART peripheral type (modem serial link)
    type Uart: UartInterface;

    /// GPIO pin type (modem power key, status LED)
    type Gpio: GpioInterface;

    /// ADC type (wind-direction potentiometer channel)
    type Adc: AdcInterface;

    /// Pulse counter type (wind-speed pulses)
    type PulseCounter: PulseCounterInterface;

    /// Timer type (blocking delays)
    type Timer: TimerInterface;

    /// Fail-safe timer type
    type Watchdog: WatchdogInterface;

    /// Modem presence probe type (comparator on the DTR line)
    type Probe: PresenceProbeInterface;

    /// Initialize the platform
    ///
    /// Performs clock configuration and baseline peripheral setup.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InitializationFailed` if initialization fails.
    fn init() -> Result<Self>;

    /// Create the modem UART
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if already created.
    fn create_uart(&mut self, config: UartConfig) -> Result<Self::Uart>;

    /// Create a GPIO peripheral instance
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if the pin is already in
    /// use or the pin number is invalid.
    fn create_gpio(&mut self, pin: u8) -> Result<Self::Gpio>;

    /// Create the wind-direction ADC channel
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if already created.
    fn create_adc(&mut self) -> Result<Self::Adc>;

    /// Create the wind-speed pulse counter
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if already created.
    fn create_pulse_counter(&mut self) -> Result<Self::PulseCounter>;

    /// Create the delay timer
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if already created.
    fn create_timer(&mut self) -> Result<Self::Timer>;

    /// Create the fail-safe timer handle
    ///
    /// The hardware timer itself runs from reset; this hands out the handle
    /// used to acknowledge and re-arm it.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if already created.
    fn create_watchdog(&mut self) -> Result<Self::Watchdog>;

    /// Create the modem presence probe
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if already created.
    fn create_presence_probe(&mut self) -> Result<Self::Probe>;
}
