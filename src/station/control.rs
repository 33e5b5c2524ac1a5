//! Main control loop
//!
//! One pass per second, driven by the tick interrupt through the shared
//! mailbox. Every tick samples wind direction; phase 2 evaluates the
//! previous transmit's response and feeds the fault cascade; phase 0
//! captures wind speed, makes sure the modem is up and transmits the
//! cycle's report.
//!
//! The loop's only suspension points are the cooperative busy-wait on the
//! tick value and fixed blocking delays. The fail-safe timer is
//! acknowledged on every pass and inside every long delay; a stuck
//! flow-control line or a wedged modem is recovered by letting it fire.

use crate::core::traits::sync::SharedState;
use crate::devices::{anemometer, DirectionSamples, ModemManager, PowerUp};
use crate::devices::modem::ModemLink;
use crate::log_info;
use crate::platform::{
    GpioInterface, Platform, Result, TimerInterface, UartInterface, WatchdogInterface,
    WatchdogPeriod,
};
use crate::station::config::{ConfigError, StationConfig};
use crate::station::fault::{force_reset, startup_reset_triage, FaultManager, Restart};
use crate::station::hardware::StationHardware;
use crate::station::irq::IrqShared;
use crate::telemetry::transport;
use crate::telemetry::{Report, FRAME_LEN};

/// Phase at which the previous transmit's response is evaluated (~3 s after
/// the frame went out)
const RESPONSE_PHASE: u8 = 2;

/// Transmit command: announces exactly one frame's worth of payload
const SEND_COMMAND: &[u8] = b"AT+CIPSEND=9\r";

/// Settle delay between the transmit command and the payload, milliseconds
const SEND_SETTLE_MS: u32 = 256;

/// Status indicator hold after a transmit, milliseconds
const LED_HOLD_MS: u32 = 64;

/// Settle delay between startup triage and modem bring-up, milliseconds
const STARTUP_SETTLE_MS: u32 = 256;

/// The station's orchestration core
///
/// Owns every peripheral and driver; shares only the interrupt mailbox
/// with the interrupt context.
pub struct ControlStation<'a, P: Platform, S: SharedState<IrqShared>> {
    hw: StationHardware<P>,
    shared: &'a S,
    modem: ModemManager,
    faults: FaultManager,
    samples: DirectionSamples,
    speed: u8,
}

impl<'a, P, S> ControlStation<'a, P, S>
where
    P: Platform,
    S: SharedState<IrqShared>,
{
    /// Assemble the station from its peripherals and configuration
    ///
    /// Fails on an invalid build-time configuration; nothing is started
    /// yet.
    pub fn new(
        hw: StationHardware<P>,
        shared: &'a S,
        config: StationConfig,
    ) -> core::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            hw,
            shared,
            modem: ModemManager::new(config.endpoint()),
            faults: FaultManager::new(),
            samples: DirectionSamples::new(),
            speed: 0,
        })
    }

    /// One-time startup: triage the previous reset, bring the modem up and
    /// zero the cycle counters
    ///
    /// The status indicator blinks for the whole startup and goes dark when
    /// normal operation begins.
    pub fn startup(&mut self) -> Result<()> {
        log_info!("station: starting");
        self.shared.with_mut(|s| s.startup_blink = true);
        self.hw.watchdog.arm(WatchdogPeriod::Normal)?;

        startup_reset_triage(&mut self.modem, &mut self.hw)?;

        self.hw.watchdog.acknowledge();
        self.hw.timer.delay_ms(STARTUP_SETTLE_MS)?;
        self.ensure_modem_ready()?;

        // Uptime measures normal operation only; discard pulses that
        // accumulated during bring-up.
        anemometer::capture_speed(&mut self.hw.speed_counter);
        self.shared.with_mut(|s| {
            s.clock.reset();
            s.startup_blink = false;
        });
        self.hw.status_led.set_low()?;
        self.hw.watchdog.acknowledge();
        log_info!("station: ready");
        Ok(())
    }

    /// Run forever (or until a restart is committed)
    ///
    /// On `Ok(Restart)` the caller must stop acknowledging the fail-safe
    /// timer and spin until it fires.
    pub fn run(&mut self) -> Result<Restart> {
        self.startup()?;
        let mut last_phase = self.shared.with(|s| s.clock.phase());
        loop {
            loop {
                if self.shared.with(|s| s.reset_pending) {
                    break;
                }
                let phase = self.shared.with(|s| s.clock.phase());
                if phase != last_phase {
                    last_phase = phase;
                    break;
                }
                core::hint::spin_loop();
            }
            if let Some(restart) = self.service_tick()? {
                return Ok(restart);
            }
        }
    }

    /// One tick's worth of work
    ///
    /// Returns `Some(Restart)` when the fault cascade or an external reset
    /// request committed to a controller restart.
    pub fn service_tick(&mut self) -> Result<Option<Restart>> {
        if self.take_reset_request() {
            log_info!("station: external reset request");
            return force_reset(&mut self.modem, &mut self.hw).map(Some);
        }

        let (phase, uptime) = self.shared.with(|s| (s.clock.phase(), s.clock.uptime()));
        self.hw.watchdog.acknowledge();

        let direction =
            anemometer::sample_direction(&mut self.hw.direction_adc, &mut self.hw.timer)?;
        self.samples.record(phase, direction);

        if phase == RESPONSE_PHASE {
            self.hw.uart.set_rx_enabled(false);
            while self.hw.uart.read_byte().is_some() {}

            let found = self.shared.with(|s| s.matcher.found());
            if self.faults.record_response(found) {
                return force_reset(&mut self.modem, &mut self.hw).map(Some);
            }
        } else if phase == 0 {
            self.speed = anemometer::capture_speed(&mut self.hw.speed_counter);
            self.hw.status_led.set_high()?;
            self.hw.watchdog.acknowledge();

            if self.ensure_modem_ready()? == PowerUp::PoweredUp {
                // The modem was down, so this cycle's readings are stale.
                // Restart the cycle without transmitting; no failure counted.
                log_info!("station: cycle discarded after modem bring-up");
                anemometer::capture_speed(&mut self.hw.speed_counter);
                self.shared.with_mut(|s| s.clock.restart_cycle());
                self.hw.status_led.set_low()?;
                return Ok(None);
            }

            self.transmit_report(uptime)?;
            self.hw.timer.delay_ms(LED_HOLD_MS)?;
            self.hw.status_led.set_low()?;
        }

        Ok(None)
    }

    /// Stream one report frame to the modem
    ///
    /// The response matcher is armed while the last payload byte is still
    /// in flight, so its window spans the whole modem turnaround.
    fn transmit_report(&mut self, uptime: u16) -> Result<()> {
        let report = Report {
            uptime,
            speed: self.speed,
            directions: self.samples.as_array(),
        };
        let frame = report.encode();

        transport::send_bytes(&mut self.hw.uart, &mut self.hw.timer, &[b'\r'; FRAME_LEN])?;
        transport::send_bytes(&mut self.hw.uart, &mut self.hw.timer, SEND_COMMAND)?;
        self.hw.timer.delay_ms(SEND_SETTLE_MS)?;

        transport::send_bytes(&mut self.hw.uart, &mut self.hw.timer, &frame[..FRAME_LEN - 1])?;

        self.shared.with_mut(|s| s.matcher.arm());
        while self.hw.uart.read_byte().is_some() {}
        self.hw.uart.set_rx_enabled(true);

        transport::send_byte(&mut self.hw.uart, &mut self.hw.timer, frame[FRAME_LEN - 1])?;
        log_info!("station: report sent, uptime {}", uptime);
        Ok(())
    }

    fn ensure_modem_ready(&mut self) -> Result<PowerUp> {
        let shared = self.shared;
        let mut link = ModemLink {
            uart: &mut self.hw.uart,
            power_key: &mut self.hw.modem_power,
            status_led: &mut self.hw.status_led,
            timer: &mut self.hw.timer,
            watchdog: &mut self.hw.watchdog,
            probe: &mut self.hw.probe,
        };
        self.modem.ensure_ready(
            &mut link,
            |on| shared.with_mut(|s| s.modem_initializing = on),
            |on| shared.with_mut(|s| s.startup_blink = on),
        )
    }

    fn take_reset_request(&mut self) -> bool {
        self.shared.with_mut(|s| core::mem::take(&mut s.reset_pending))
    }
}
