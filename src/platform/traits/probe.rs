//! Modem presence probe interface trait

use crate::platform::Result;

/// Modem presence probe interface trait
///
/// The modem's DTR line sits near 2.8 V while the modem is powered and well
/// below that when it is off; the platform compares it against a reference
/// voltage (analog comparator) to answer "electrically present or not".
///
/// The probe does not distinguish "alive but unconfigured" from "alive and
/// ready" - it is a purely electrical check.
pub trait PresenceProbeInterface {
    /// Whether the modem is electrically present
    ///
    /// Implementations handle comparator setup and settling internally and
    /// leave the probe line in its idle (driven-low) state afterwards.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError` if the comparator cannot be read.
    fn is_present(&mut self) -> Result<bool>;
}
