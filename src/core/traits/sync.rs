//! Synchronized state abstraction for the interrupt/main-loop mailbox.
//!
//! The interrupt context owns and mutates the tick clock and the response
//! matcher; the main loop reads snapshots. This module provides the
//! `SharedState` trait that abstracts the synchronization mechanism
//! (critical-section mutex on hardware, `RefCell` for host tests) so the
//! core logic can be exercised without embedded dependencies.

/// Platform-agnostic synchronized state access.
///
/// Implementations:
/// - [`CriticalSectionState<T>`] for embedded targets, using Embassy's
///   critical-section blocking mutex (interrupt-safe)
/// - [`MockState<T>`] for host testing, using `RefCell` (single-threaded)
///
/// Accesses are closures over the whole inner value, which makes a
/// multi-field update (phase rollover incrementing uptime) indivisible as
/// seen from the other context.
pub trait SharedState<T> {
    /// Access state immutably.
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R;

    /// Access state mutably.
    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;
}

// ============================================================================
// Embassy Implementation
// ============================================================================

#[cfg(feature = "embassy")]
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

/// Critical-section synchronized state for embedded targets.
///
/// The critical section ensures atomic access even from interrupt context,
/// so the tick handler and the main loop can share one instance placed in a
/// `static`.
#[cfg(feature = "embassy")]
pub struct CriticalSectionState<T> {
    inner: Mutex<CriticalSectionRawMutex, core::cell::RefCell<T>>,
}

#[cfg(feature = "embassy")]
impl<T> CriticalSectionState<T> {
    /// Creates a new `CriticalSectionState` wrapping the given value.
    ///
    /// This is a const fn, allowing static initialization.
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(core::cell::RefCell::new(value)),
        }
    }
}

#[cfg(feature = "embassy")]
impl<T> SharedState<T> for CriticalSectionState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.lock(|cell| f(&cell.borrow()))
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock synchronized state using RefCell for single-threaded testing.
///
/// # Panics
///
/// Panics if borrowing rules are violated (e.g., calling `with_mut` while
/// `with` is active). This indicates a bug in the test code.
///
/// # Example
///
/// ```
/// use wind_station::core::traits::sync::{MockState, SharedState};
///
/// let state = MockState::new(42u32);
/// state.with_mut(|v| *v += 1);
/// assert_eq!(state.with(|v| *v), 43);
/// ```
pub struct MockState<T> {
    inner: core::cell::RefCell<T>,
}

impl<T> MockState<T> {
    /// Creates a new `MockState` wrapping the given value.
    pub fn new(value: T) -> Self {
        Self {
            inner: core::cell::RefCell::new(value),
        }
    }
}

impl<T> SharedState<T> for MockState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.borrow())
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.inner.borrow_mut())
    }
}
