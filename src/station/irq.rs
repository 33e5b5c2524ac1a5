//! Interrupt mailbox and entry points
//!
//! One preemptive interrupt context serves three hardware events: the
//! periodic 1 s tick, inbound-byte-available and the external ring signal.
//! The interrupt context owns and mutates the mailbox; the main loop reads
//! snapshots and flips the control flags between ticks. Every entry point
//! is bounded constant-time and returns an instruction for the hardware
//! vector (toggle the LED, gate reception) instead of touching peripherals
//! itself, so the mailbox logic stays host-testable.

use crate::core::clock::CycleClock;
use crate::core::traits::sync::SharedState;
use crate::telemetry::{ResponseMatcher, RxControl};

/// State shared between the interrupt context and the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrqShared {
    /// Cycle time base, mutated only by the tick handler
    pub clock: CycleClock,
    /// Transmit-response matcher, fed by the receive handler
    pub matcher: ResponseMatcher,
    /// Toggle the status indicator on every tick (startup and long waits)
    pub startup_blink: bool,
    /// Modem power state is ambiguous; drop external reset requests
    pub modem_initializing: bool,
    /// An external reset request was accepted and awaits the main loop
    pub reset_pending: bool,
}

impl IrqShared {
    pub const fn new() -> Self {
        Self {
            clock: CycleClock::new(),
            matcher: ResponseMatcher::new(),
            startup_blink: false,
            modem_initializing: false,
            reset_pending: false,
        }
    }
}

impl Default for IrqShared {
    fn default() -> Self {
        Self::new()
    }
}

/// Instruction to the tick vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedAction {
    None,
    Toggle,
}

/// Instruction to the ring vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RingAction {
    /// Request dropped (modem initialization in progress)
    Ignore,
    /// Request accepted; the main loop will force a restart
    ForceReset,
}

/// Periodic tick handler
///
/// Advances the cycle time base. The phase rollover and the uptime
/// increment happen inside one mailbox access, so the main loop never
/// observes them apart.
pub fn on_tick<S: SharedState<IrqShared>>(shared: &S) -> LedAction {
    shared.with_mut(|s| {
        s.clock.tick();
        if s.startup_blink {
            LedAction::Toggle
        } else {
            LedAction::None
        }
    })
}

/// Inbound-byte handler
pub fn on_rx_byte<S: SharedState<IrqShared>>(shared: &S, byte: u8) -> RxControl {
    shared.with_mut(|s| s.matcher.feed(byte))
}

/// External ring-indicator handler
///
/// Accepted requests are latched for the main loop rather than acted on
/// here; a restart involves the modem power sequence and cannot run in
/// interrupt context.
pub fn on_ring<S: SharedState<IrqShared>>(shared: &S) -> RingAction {
    shared.with_mut(|s| {
        if s.modem_initializing {
            RingAction::Ignore
        } else {
            s.reset_pending = true;
            RingAction::ForceReset
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::sync::MockState;
    use crate::telemetry::SEND_OK_MARKER;

    #[test]
    fn tick_advances_the_clock() {
        let shared = MockState::new(IrqShared::new());
        for _ in 0..7 {
            on_tick(&shared);
        }
        let (phase, uptime) = shared.with(|s| (s.clock.phase(), s.clock.uptime()));
        assert_eq!((phase, uptime), (2, 1));
    }

    #[test]
    fn tick_requests_blink_only_during_startup() {
        let shared = MockState::new(IrqShared::new());
        assert_eq!(on_tick(&shared), LedAction::None);

        shared.with_mut(|s| s.startup_blink = true);
        assert_eq!(on_tick(&shared), LedAction::Toggle);

        shared.with_mut(|s| s.startup_blink = false);
        assert_eq!(on_tick(&shared), LedAction::None);
    }

    #[test]
    fn rx_bytes_reach_the_matcher() {
        let shared = MockState::new(IrqShared::new());
        shared.with_mut(|s| s.matcher.arm());

        for &b in SEND_OK_MARKER {
            on_rx_byte(&shared, b);
        }
        assert!(shared.with(|s| s.matcher.found()));
    }

    #[test]
    fn ring_latches_a_reset_request() {
        let shared = MockState::new(IrqShared::new());
        assert_eq!(on_ring(&shared), RingAction::ForceReset);
        assert!(shared.with(|s| s.reset_pending));
    }

    #[test]
    fn ring_is_dropped_during_modem_initialization() {
        let shared = MockState::new(IrqShared::new());
        shared.with_mut(|s| s.modem_initializing = true);

        assert_eq!(on_ring(&shared), RingAction::Ignore);
        assert!(!shared.with(|s| s.reset_pending));
    }
}
