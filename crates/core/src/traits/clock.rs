//! Clock abstraction for platform-agnostic timer evaluation.
//!
//! This module provides the `Clock` trait that abstracts over different
//! millisecond counters (Embassy, `std::time`, mock) so the timer state
//! machine can be tested on host without embedded dependencies.

use core::cell::Cell;

/// Millisecond counter width shared by clock readings, timestamps and periods.
///
/// All three must have the same width for wrapping subtraction to yield the
/// correct elapsed time across a counter overflow.
pub type Millis = u32;

/// Monotonic millisecond clock that wraps to zero after `Millis::MAX`.
///
/// Implementations:
/// - `EmbassyClock` (in the `pico_timer` crate) for embedded targets
/// - [`MockClock`] for host testing with controllable time
/// - [`FnClock`] for wrapping any `Fn() -> Millis`
///
/// # Example
///
/// ```
/// use pico_timer_core::traits::{Clock, MockClock};
///
/// let clock = MockClock::with_initial(u32::MAX - 4);
/// let start = clock.now_ms();
/// clock.advance(10);
/// assert_eq!(clock.now_ms(), 5);
/// assert_eq!(clock.elapsed_since(start), 10);
/// ```
pub trait Clock {
    /// Returns milliseconds since an arbitrary epoch.
    fn now_ms(&self) -> Millis;

    /// Returns milliseconds elapsed since `reference_ms`.
    ///
    /// Uses wrapping subtraction, so the result is correct across one
    /// counter overflow.
    fn elapsed_since(&self, reference_ms: Millis) -> Millis {
        self.now_ms().wrapping_sub(reference_ms)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }
}

/// Adapter turning a closure into a [`Clock`].
///
/// ```
/// use pico_timer_core::traits::{Clock, FnClock};
///
/// let clock = FnClock(|| 42);
/// assert_eq!(clock.now_ms(), 42);
/// ```
#[derive(Clone, Copy)]
pub struct FnClock<F>(pub F);

impl<F: Fn() -> Millis> Clock for FnClock<F> {
    fn now_ms(&self) -> Millis {
        (self.0)()
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock clock with controllable time advancement.
///
/// Advancing past `Millis::MAX` wraps, mirroring a hardware millisecond
/// counter, which makes overflow scenarios easy to set up.
#[derive(Clone, Default)]
pub struct MockClock {
    current_ms: Cell<Millis>,
}

impl MockClock {
    /// Creates a new `MockClock` starting at time 0.
    pub const fn new() -> Self {
        Self {
            current_ms: Cell::new(0),
        }
    }

    /// Creates a new `MockClock` starting at the specified time.
    pub const fn with_initial(ms: Millis) -> Self {
        Self {
            current_ms: Cell::new(ms),
        }
    }

    /// Sets the current time to an absolute value.
    pub fn set(&self, ms: Millis) {
        self.current_ms.set(ms);
    }

    /// Advances the current time, wrapping at `Millis::MAX`.
    pub fn advance(&self, ms: Millis) {
        self.current_ms.set(self.current_ms.get().wrapping_add(ms));
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> Millis {
        self.current_ms.get()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
