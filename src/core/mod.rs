//! Core infrastructure
//!
//! Cross-cutting pieces shared by the rest of the firmware: the cycle
//! clock, logging macros and the shared-state synchronization abstraction.

pub mod clock;
pub mod logging;
pub mod traits;
