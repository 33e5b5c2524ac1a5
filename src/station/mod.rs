//! Station orchestration
//!
//! Ties the platform, drivers and telemetry together: build-time
//! configuration, the owned peripheral set, the interrupt mailbox and its
//! entry points, the fault and reset cascade, and the main control loop.

pub mod config;
pub mod control;
pub mod fault;
pub mod hardware;
pub mod irq;

pub use config::{ConfigError, StationConfig};
pub use control::ControlStation;
pub use fault::{FaultManager, Restart, MAX_CONSECUTIVE_FAILURES};
pub use hardware::StationHardware;
pub use irq::{IrqShared, LedAction, RingAction};
