//! Response matcher (interrupt context)
//!
//! A streaming substring match over inbound modem bytes, run byte by byte
//! inside the receive interrupt. It watches for the success marker the
//! modem prints after a transmit, and disarms itself on the first verdict
//! (match or mismatch) so the interrupt handler stays constant-time and the
//! line noise after a verdict is ignored.
//!
//! The matcher is re-armed exactly once per transmit cycle, immediately
//! before the checksum byte of the outgoing frame is sent; its window spans
//! "last payload byte in flight" through the evaluation point 3 s later.

/// Success marker printed by the modem after an accepted transmit
pub const SEND_OK_MARKER: &[u8] = b"\r\nSEND OK";

/// Instruction to the receive path after feeding a byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxControl {
    /// Keep reception enabled
    KeepListening,
    /// Disable reception until the next re-arm
    Disable,
}

/// Streaming matcher state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResponseMatcher {
    next_index: usize,
    found: bool,
    armed: bool,
}

impl ResponseMatcher {
    /// Create a disarmed matcher
    pub const fn new() -> Self {
        Self {
            next_index: 0,
            found: false,
            armed: false,
        }
    }

    /// Arm for a new transmit-response window
    ///
    /// Clears any previous verdict and restarts the match from the first
    /// marker byte.
    pub fn arm(&mut self) {
        self.next_index = 0;
        self.found = false;
        self.armed = true;
    }

    /// Whether the matcher is currently consuming bytes
    pub fn armed(&self) -> bool {
        self.armed
    }

    /// Whether the full marker was seen in the current window
    pub fn found(&self) -> bool {
        self.found
    }

    /// Feed one inbound byte (interrupt context)
    ///
    /// Exact-prefix bytes advance the match; the final marker byte records
    /// success and disarms; any mismatch records failure and disarms. Bytes
    /// fed while disarmed are ignored.
    pub fn feed(&mut self, byte: u8) -> RxControl {
        if !self.armed {
            return RxControl::Disable;
        }

        if byte == SEND_OK_MARKER[self.next_index] {
            self.next_index += 1;
            if self.next_index == SEND_OK_MARKER.len() {
                self.found = true;
                self.next_index = 0;
                self.armed = false;
                return RxControl::Disable;
            }
            RxControl::KeepListening
        } else {
            self.found = false;
            self.next_index = 0;
            self.armed = false;
            RxControl::Disable
        }
    }
}

impl Default for ResponseMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_marker_sets_found_once_and_disarms() {
        let mut m = ResponseMatcher::new();
        m.arm();

        let (last, head) = SEND_OK_MARKER.split_last().unwrap();
        for &b in head {
            assert_eq!(m.feed(b), RxControl::KeepListening);
        }
        assert_eq!(m.feed(*last), RxControl::Disable);
        assert!(m.found());
        assert!(!m.armed());
    }

    #[test]
    fn mismatch_after_prefix_resets_and_disarms() {
        let mut m = ResponseMatcher::new();
        m.arm();

        m.feed(b'\r');
        m.feed(b'\n');
        m.feed(b'S');
        assert_eq!(m.feed(b'X'), RxControl::Disable);
        assert!(!m.found());
        assert!(!m.armed());
    }

    #[test]
    fn bytes_after_disarm_are_ignored() {
        let mut m = ResponseMatcher::new();
        m.arm();
        for &b in SEND_OK_MARKER {
            m.feed(b);
        }
        assert!(m.found());

        // Trailing line noise must not clear the verdict
        m.feed(b'!');
        m.feed(b'\r');
        assert!(m.found());
        assert!(!m.armed());
    }

    #[test]
    fn immediate_mismatch_disarms() {
        let mut m = ResponseMatcher::new();
        m.arm();
        assert_eq!(m.feed(b'E'), RxControl::Disable);
        assert!(!m.found());
    }

    #[test]
    fn rearm_clears_previous_verdict() {
        let mut m = ResponseMatcher::new();
        m.arm();
        for &b in SEND_OK_MARKER {
            m.feed(b);
        }
        assert!(m.found());

        m.arm();
        assert!(!m.found());
        assert!(m.armed());
    }

    #[test]
    fn unarmed_matcher_consumes_nothing() {
        let mut m = ResponseMatcher::new();
        assert_eq!(m.feed(b'\r'), RxControl::Disable);
        assert!(!m.found());
    }
}
