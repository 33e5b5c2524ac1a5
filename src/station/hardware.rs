//! Station peripheral set
//!
//! The fixed set of peripherals the station owns, obtained once from the
//! platform at startup. Pin assignments follow the reference board.

use crate::platform::{GpioInterface, GpioMode, Platform, Result, UartConfig};

/// Modem power-key pin
pub const MODEM_POWER_PIN: u8 = 1;

/// Status indicator pin
pub const STATUS_LED_PIN: u8 = 9;

/// All peripherals the station drives
pub struct StationHardware<P: Platform> {
    pub uart: P::Uart,
    pub modem_power: P::Gpio,
    pub status_led: P::Gpio,
    pub direction_adc: P::Adc,
    pub speed_counter: P::PulseCounter,
    pub timer: P::Timer,
    pub watchdog: P::Watchdog,
    pub probe: P::Probe,
}

impl<P: Platform> StationHardware<P> {
    /// Claim every peripheral from the platform
    ///
    /// The modem power key idles as a high-impedance input (the modem pulls
    /// it up itself); it is only driven low during power pulses.
    pub fn new(platform: &mut P) -> Result<Self> {
        let uart = platform.create_uart(UartConfig::default())?;
        let mut modem_power = platform.create_gpio(MODEM_POWER_PIN)?;
        modem_power.set_mode(GpioMode::Input)?;
        let mut status_led = platform.create_gpio(STATUS_LED_PIN)?;
        status_led.set_mode(GpioMode::OutputPushPull)?;
        status_led.set_low()?;

        Ok(Self {
            uart,
            modem_power,
            status_led,
            direction_adc: platform.create_adc()?,
            speed_counter: platform.create_pulse_counter()?,
            timer: platform.create_timer()?,
            watchdog: platform.create_watchdog()?,
            probe: platform.create_presence_probe()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockPlatform;

    #[test]
    fn claims_every_peripheral_once() {
        let mut platform = MockPlatform::new();
        let _hw = StationHardware::new(&mut platform).unwrap();

        // Both pins are taken; claiming again must fail
        assert!(platform.create_gpio(MODEM_POWER_PIN).is_err());
        assert!(platform.create_gpio(STATUS_LED_PIN).is_err());
    }

    #[test]
    fn power_key_idles_as_input() {
        let mut platform = MockPlatform::new();
        let _hw = StationHardware::new(&mut platform).unwrap();

        let power = platform.gpio(MODEM_POWER_PIN).unwrap();
        assert_eq!(power.mode(), GpioMode::Input);

        let led = platform.gpio(STATUS_LED_PIN).unwrap();
        assert_eq!(led.mode(), GpioMode::OutputPushPull);
        assert!(!led.read());
    }
}
