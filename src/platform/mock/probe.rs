//! Mock presence probe implementation for testing

use crate::platform::{traits::PresenceProbeInterface, Result};
use std::cell::Cell;
use std::rc::Rc;

/// Mock modem presence probe
///
/// Presence is test-settable; the station sees whatever the test last set.
#[derive(Debug, Clone)]
pub struct MockPresenceProbe {
    present: Rc<Cell<bool>>,
}

impl MockPresenceProbe {
    /// Create a new probe reporting "absent"
    pub fn new() -> Self {
        Self {
            present: Rc::new(Cell::new(false)),
        }
    }

    /// Set the probed presence state
    pub fn set_present(&mut self, present: bool) {
        self.present.set(present);
    }
}

impl Default for MockPresenceProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl PresenceProbeInterface for MockPresenceProbe {
    fn is_present(&mut self) -> Result<bool> {
        Ok(self.present.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_probe() {
        let mut probe = MockPresenceProbe::new();
        assert!(!probe.is_present().unwrap());

        probe.set_present(true);
        assert!(probe.is_present().unwrap());
    }
}
