//! Fault and reset cascade
//!
//! Three layers of recovery: per-cycle retry (a missed success marker just
//! counts), the consecutive-failure ceiling (exhaustion forces a full
//! controller restart through the fail-safe timer), and startup triage that
//! disambiguates why the controller last restarted.

use crate::devices::ModemManager;
use crate::platform::{
    GpioInterface, Platform, PresenceProbeInterface, ResetCause, Result, WatchdogInterface,
    WatchdogPeriod,
};
use crate::station::hardware::StationHardware;
use crate::{log_info, log_warn};

/// Report cycles without a success marker before a forced restart
pub const MAX_CONSECUTIVE_FAILURES: u8 = 24;

/// Defensive power-off settle time during startup triage, milliseconds
const TRIAGE_SETTLE_MS: u32 = 5_000;

/// Proof that a controller restart has been committed
///
/// [`force_reset`] arms the fail-safe timer at its minimum period and
/// returns this token; the caller's only remaining duty is to stop
/// acknowledging the timer and spin until it fires. Constructed nowhere
/// else, so a `Restart` in hand means the cascade ran to completion.
#[derive(Debug)]
#[must_use]
pub struct Restart(());

/// Consecutive-failure countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultManager {
    remaining: u8,
}

impl FaultManager {
    pub const fn new() -> Self {
        Self {
            remaining: MAX_CONSECUTIVE_FAILURES,
        }
    }

    /// Record one cycle's response verdict
    ///
    /// A success refills the countdown. A failure decrements it; returns
    /// true when the ceiling is exhausted, refilling the countdown for the
    /// run after the restart.
    pub fn record_response(&mut self, found: bool) -> bool {
        if found {
            self.remaining = MAX_CONSECUTIVE_FAILURES;
            return false;
        }
        self.remaining -= 1;
        log_warn!("fault: no response, {} cycles remain", self.remaining);
        if self.remaining == 0 {
            self.remaining = MAX_CONSECUTIVE_FAILURES;
            return true;
        }
        false
    }

    /// Cycles left before a forced restart
    pub fn remaining(&self) -> u8 {
        self.remaining
    }
}

impl Default for FaultManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Commit to a full controller restart
///
/// Powers the modem off if it is present, marks the upcoming reset as
/// self-inflicted and arms the fail-safe timer at its minimum period. The
/// caller must stop acknowledging the timer and spin until it fires.
pub fn force_reset<P: Platform>(
    modem: &mut ModemManager,
    hw: &mut StationHardware<P>,
) -> Result<Restart> {
    log_warn!("fault: forcing controller restart");
    hw.status_led.set_high()?;

    if hw.probe.is_present()? {
        modem.power_off(&mut hw.modem_power, &mut hw.timer, &mut hw.watchdog)?;
    }

    hw.watchdog.set_self_reset_flag(true);
    hw.watchdog.acknowledge();
    hw.watchdog.arm(WatchdogPeriod::Minimum)?;
    Ok(Restart(()))
}

/// Startup reset-cause triage
///
/// A true power-on needs nothing. After a fail-safe-timer reset the modem
/// state depends on who armed the timer: a deliberate restart already
/// powered the modem off (the self-reset flag says so), while an
/// uncontrolled one left it in an unknown state, so it is powered off
/// defensively if present. The flag is cleared in every non-power-on case.
pub fn startup_reset_triage<P: Platform>(
    modem: &mut ModemManager,
    hw: &mut StationHardware<P>,
) -> Result<()> {
    match hw.watchdog.reset_cause() {
        ResetCause::PowerOn => {
            log_info!("startup: power-on reset");
        }
        ResetCause::FailsafeTimer => {
            if hw.watchdog.self_reset_flag() {
                log_info!("startup: deliberate restart, modem already off");
            } else if hw.probe.is_present()? {
                log_warn!("startup: uncontrolled restart, powering modem off");
                modem.power_off(&mut hw.modem_power, &mut hw.timer, &mut hw.watchdog)?;
                crate::devices::modem::guarded_delay_ms(
                    &mut hw.timer,
                    &mut hw.watchdog,
                    TRIAGE_SETTLE_MS,
                )?;
            } else {
                log_info!("startup: uncontrolled restart, modem absent");
            }
            hw.watchdog.set_self_reset_flag(false);
        }
    }
    Ok(())
}
