//! ADC interface trait

use crate::platform::Result;

/// ADC interface trait
///
/// One conversion on the wind-direction channel. The result is the
/// left-justified high byte of the conversion (8 significant bits), which is
/// all the report format carries.
///
/// The sampler applies the pre-conversion settling delay itself; platform
/// implementations only switch the converter on, run one conversion, block
/// until it completes and switch the converter off again.
pub trait AdcInterface {
    /// Run one conversion and return the 8-bit result
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Adc(AdcError::ConversionFailed)` if the
    /// conversion does not complete.
    fn read(&mut self) -> Result<u8>;
}
