//! Mock Platform implementation for testing

use crate::platform::{
    error::PlatformError,
    traits::{Platform, UartConfig},
    Result,
};
use std::vec::Vec;

use super::{
    MockAdc, MockGpio, MockPresenceProbe, MockPulseCounter, MockTimer, MockUart, MockWatchdog,
};

/// Mock Platform implementation
///
/// Provides mock peripheral implementations for hardware-free testing. The
/// platform retains a clone of every peripheral it hands out, so tests can
/// keep driving and observing them after the station takes ownership.
///
/// # Example
///
/// ```
/// use wind_station::platform::mock::MockPlatform;
/// use wind_station::platform::traits::{Platform, UartInterface};
///
/// let mut platform = MockPlatform::new();
/// let mut uart = platform.create_uart(Default::default()).unwrap();
/// uart.write_byte(b'X').unwrap();
/// assert_eq!(platform.uart().tx_bytes(), b"X");
/// ```
#[derive(Debug)]
pub struct MockPlatform {
    uart: MockUart,
    timer: MockTimer,
    adc: MockAdc,
    pulse_counter: MockPulseCounter,
    probe: MockPresenceProbe,
    watchdog: MockWatchdog,
    gpios: Vec<(u8, MockGpio)>,
}

impl MockPlatform {
    /// Maximum GPIO pin number
    pub const MAX_GPIO: u8 = 15;

    /// Create a new mock platform
    pub fn new() -> Self {
        Self {
            uart: MockUart::new(UartConfig::default()),
            timer: MockTimer::new(),
            adc: MockAdc::new(),
            pulse_counter: MockPulseCounter::new(),
            probe: MockPresenceProbe::new(),
            watchdog: MockWatchdog::new(),
            gpios: Vec::new(),
        }
    }

    /// Test handle to the modem UART
    pub fn uart(&self) -> MockUart {
        self.uart.clone()
    }

    /// Test handle to the delay timer
    pub fn timer(&self) -> MockTimer {
        self.timer.clone()
    }

    /// Test handle to the direction ADC
    pub fn adc(&self) -> MockAdc {
        self.adc.clone()
    }

    /// Test handle to the speed pulse counter
    pub fn pulse_counter(&self) -> MockPulseCounter {
        self.pulse_counter.clone()
    }

    /// Test handle to the modem presence probe
    pub fn probe(&self) -> MockPresenceProbe {
        self.probe.clone()
    }

    /// Test handle to the fail-safe timer
    pub fn watchdog(&self) -> MockWatchdog {
        self.watchdog.clone()
    }

    /// Test handle to a GPIO pin handed out earlier, if any
    pub fn gpio(&self, pin: u8) -> Option<MockGpio> {
        self.gpios
            .iter()
            .find(|(p, _)| *p == pin)
            .map(|(_, g)| g.clone())
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for MockPlatform {
    type Uart = MockUart;
    type Gpio = MockGpio;
    type Adc = MockAdc;
    type PulseCounter = MockPulseCounter;
    type Timer = MockTimer;
    type Watchdog = MockWatchdog;
    type Probe = MockPresenceProbe;

    fn init() -> Result<Self> {
        Ok(Self::new())
    }

    fn create_uart(&mut self, _config: UartConfig) -> Result<Self::Uart> {
        Ok(self.uart.clone())
    }

    fn create_gpio(&mut self, pin: u8) -> Result<Self::Gpio> {
        if pin > Self::MAX_GPIO {
            return Err(PlatformError::ResourceUnavailable);
        }
        if self.gpios.iter().any(|(p, _)| *p == pin) {
            return Err(PlatformError::ResourceUnavailable);
        }
        let gpio = MockGpio::new_output();
        self.gpios.push((pin, gpio.clone()));
        Ok(gpio)
    }

    fn create_adc(&mut self) -> Result<Self::Adc> {
        Ok(self.adc.clone())
    }

    fn create_pulse_counter(&mut self) -> Result<Self::PulseCounter> {
        Ok(self.pulse_counter.clone())
    }

    fn create_timer(&mut self) -> Result<Self::Timer> {
        Ok(self.timer.clone())
    }

    fn create_watchdog(&mut self) -> Result<Self::Watchdog> {
        Ok(self.watchdog.clone())
    }

    fn create_presence_probe(&mut self) -> Result<Self::Probe> {
        Ok(self.probe.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::traits::{GpioInterface, TimerInterface, UartInterface};

    #[test]
    fn test_mock_platform_init() {
        let platform = MockPlatform::init().unwrap();
        assert_eq!(platform.timer().now_us(), 0);
    }

    #[test]
    fn test_mock_platform_gpio_allocation() {
        let mut platform = MockPlatform::new();
        let mut gpio0 = platform.create_gpio(0).unwrap();
        gpio0.set_high().unwrap();
        assert!(platform.gpio(0).unwrap().read());

        // Same GPIO should not be allocatable twice
        assert!(platform.create_gpio(0).is_err());

        // Invalid GPIO should fail
        assert!(platform.create_gpio(100).is_err());
    }

    #[test]
    fn test_mock_platform_uart_observed_via_handle() {
        let mut platform = MockPlatform::new();
        let mut uart = platform.create_uart(UartConfig::default()).unwrap();
        uart.write_byte(b'Z').unwrap();
        assert_eq!(platform.uart().tx_bytes(), b"Z");
    }

    #[test]
    fn test_mock_platform_timer_shared() {
        let mut platform = MockPlatform::new();
        let mut timer = platform.create_timer().unwrap();
        timer.delay_ms(10).unwrap();
        assert_eq!(platform.timer().now_us(), 10_000);
    }
}
