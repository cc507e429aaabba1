//! Platform clock implementations.
//!
//! - [`TickCounter`]: millisecond counter advanced from a 1 kHz interrupt
//!   (SysTick or a hardware timer), usable without any async runtime
//! - `EmbassyClock` (feature `embassy`): reads the Embassy time driver

use core::sync::atomic::{AtomicU32, Ordering};

use pico_timer_core::traits::{Clock, Millis};

/// Millisecond counter incremented from a periodic interrupt.
///
/// Place it in a `static`, call [`TickCounter::tick`] from the 1 ms
/// interrupt handler and hand `&COUNTER` to the registry. Only loads and
/// stores are used, so it also works on cores without atomic
/// read-modify-write (Cortex-M0). That requires the interrupt to be the
/// only caller of `tick`.
///
/// # Example
///
/// ```
/// use pico_timer::platform::TickCounter;
/// use pico_timer::{Clock, TimerRegistry};
///
/// static MILLIS: TickCounter = TickCounter::new();
///
/// let timers: TimerRegistry<'_, _, 1> = TimerRegistry::new(&MILLIS);
/// timers.begin(0, 2, None, false);
///
/// MILLIS.tick();
/// assert!(!timers.poll(0));
/// MILLIS.tick();
/// assert!(timers.poll(0));
/// assert_eq!(MILLIS.now_ms(), 2);
/// ```
#[derive(Debug, Default)]
pub struct TickCounter {
    millis: AtomicU32,
}

impl TickCounter {
    pub const fn new() -> Self {
        Self {
            millis: AtomicU32::new(0),
        }
    }

    /// Advance by one millisecond, wrapping at `Millis::MAX`.
    pub fn tick(&self) {
        let next = self.millis.load(Ordering::Relaxed).wrapping_add(1);
        self.millis.store(next, Ordering::Release);
    }
}

impl Clock for TickCounter {
    fn now_ms(&self) -> Millis {
        self.millis.load(Ordering::Acquire)
    }
}

/// Embassy-based clock using the Embassy time driver.
///
/// `embassy_time::Instant` counts in 64 bits; truncating to `Millis` yields
/// the wrapping counter the timer arithmetic expects.
///
/// # Example
///
/// ```ignore
/// use pico_timer::platform::EmbassyClock;
/// use pico_timer::TimerRegistry;
///
/// let timers: TimerRegistry<'_, _, 4> = TimerRegistry::new(EmbassyClock);
/// ```
#[cfg(feature = "embassy")]
#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl Clock for EmbassyClock {
    fn now_ms(&self) -> Millis {
        embassy_time::Instant::now().as_millis() as Millis
    }
}
