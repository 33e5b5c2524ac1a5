//! Device drivers using platform abstraction

pub mod anemometer;
pub mod modem;

pub use anemometer::DirectionSamples;
pub use modem::{ModemEndpoint, ModemManager, ModemState, PowerUp};
