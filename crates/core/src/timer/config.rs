//! Per-slot timer configuration

use crate::traits::Millis;

/// Default slot count for hosts that do not need a specific capacity.
pub const DEFAULT_TIMER_COUNT: usize = 4;

/// Period and start behaviour for one registry slot
///
/// The handler is passed separately because it is a borrow, not plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotConfig {
    /// Repeat interval in milliseconds (0 disables the slot)
    pub period_ms: Millis,

    /// Fire on the first sweep after configuration instead of after one period
    pub start_immediately: bool,
}

impl SlotConfig {
    /// Slot firing every `period_ms`, first fire one period from now.
    pub const fn new(period_ms: Millis) -> Self {
        Self {
            period_ms,
            start_immediately: false,
        }
    }

    /// Slot firing on the next sweep and then every `period_ms`.
    pub const fn immediate(period_ms: Millis) -> Self {
        Self {
            period_ms,
            start_immediately: true,
        }
    }

    /// Dormant slot that never fires.
    pub const fn disabled() -> Self {
        Self {
            period_ms: 0,
            start_immediately: false,
        }
    }

    /// Slot firing at `rate_hz`, rounded down to whole milliseconds.
    ///
    /// Rates above 1000 Hz cannot be expressed at millisecond resolution and
    /// clamp to a 1 ms period. A rate of 0 gives a disabled slot.
    pub const fn from_rate_hz(rate_hz: u32) -> Self {
        let period_ms = match rate_hz {
            0 => 0,
            1..=1000 => 1000 / rate_hz,
            _ => 1,
        };
        Self::new(period_ms)
    }

    /// Same period, with the immediate-start flag set.
    pub const fn starting_now(self) -> Self {
        Self {
            start_immediately: true,
            ..self
        }
    }

    /// Whether this configuration can ever fire.
    #[inline]
    pub const fn is_enabled(&self) -> bool {
        self.period_ms != 0
    }
}
