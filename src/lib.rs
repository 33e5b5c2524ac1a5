#![cfg_attr(not(test), no_std)]

//! wind-station - control firmware core for an autonomous wind station
//!
//! This library provides the control and protocol logic of an unattended,
//! battery/solar-powered weather station that samples wind speed and
//! direction and reports them over a cellular modem: the cycle clock, the
//! sensor sampling cadence, the modem lifecycle state machine, the
//! flow-controlled report transport, the interrupt-driven response matcher,
//! and the layered fault-recovery cascade.
//!
//! Register-level peripheral setup is not implemented here; it is consumed
//! through the traits in [`platform`], with mock implementations for
//! hardware-free testing.

#[cfg(any(test, feature = "mock"))]
extern crate std;

// Platform abstraction layer (hardware is an external collaborator)
pub mod platform;

// Cross-cutting infrastructure: logging, shared-state access, cycle clock
pub mod core;

// Report protocol: checksum, frame, transport, response matcher
pub mod telemetry;

// Device drivers using platform abstraction
pub mod devices;

// Station orchestration: config, fault management, interrupt glue, main loop
pub mod station;
