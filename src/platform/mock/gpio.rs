//! Mock GPIO implementation for testing

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};
use std::cell::Cell;
use std::rc::Rc;

/// Mock GPIO implementation
///
/// Tracks pin state (high/low) and mode behind shared handles; clones
/// observe the same pin.
#[derive(Debug, Clone)]
pub struct MockGpio {
    state: Rc<Cell<bool>>,
    mode: Rc<Cell<GpioMode>>,
}

impl MockGpio {
    /// Create a new mock GPIO in output mode
    pub fn new_output() -> Self {
        Self {
            state: Rc::new(Cell::new(false)),
            mode: Rc::new(Cell::new(GpioMode::OutputPushPull)),
        }
    }

    /// Create a new mock GPIO in input mode
    pub fn new_input() -> Self {
        Self {
            state: Rc::new(Cell::new(false)),
            mode: Rc::new(Cell::new(GpioMode::Input)),
        }
    }

    /// Set the input state (for simulating input pin reads)
    pub fn set_input_state(&mut self, high: bool) {
        self.state.set(high);
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        match self.mode.get() {
            GpioMode::OutputPushPull | GpioMode::OutputOpenDrain => {
                self.state.set(true);
                Ok(())
            }
            _ => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }

    fn set_low(&mut self) -> Result<()> {
        match self.mode.get() {
            GpioMode::OutputPushPull | GpioMode::OutputOpenDrain => {
                self.state.set(false);
                Ok(())
            }
            _ => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }

    fn toggle(&mut self) -> Result<()> {
        match self.mode.get() {
            GpioMode::OutputPushPull | GpioMode::OutputOpenDrain => {
                self.state.set(!self.state.get());
                Ok(())
            }
            _ => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }

    fn read(&self) -> bool {
        self.state.get()
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        self.mode.set(mode);
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode.get()
    }
}
