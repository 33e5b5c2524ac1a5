//! Mock platform implementations for testing
//!
//! Every mock peripheral stores its state behind `Rc` handles and is
//! cheaply cloneable, so a test can hand the peripheral to the station and
//! keep a handle (via [`MockPlatform`]) to observe or drive it afterwards.

pub mod adc;
pub mod gpio;
pub mod platform;
pub mod probe;
pub mod pulse;
pub mod timer;
pub mod uart;
pub mod watchdog;

pub use adc::MockAdc;
pub use gpio::MockGpio;
pub use platform::MockPlatform;
pub use probe::MockPresenceProbe;
pub use pulse::MockPulseCounter;
pub use timer::MockTimer;
pub use uart::MockUart;
pub use watchdog::MockWatchdog;
