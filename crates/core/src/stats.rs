//! Fire interval and sweep statistics
//!
//! These types hold no clock or registry references. The monitoring layer
//! feeds them measurements after each sweep.

use crate::traits::Millis;

/// Runtime statistics for a single timer slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FireStats {
    /// Total number of fires
    pub fire_count: u32,

    /// Interval between the last two fires in milliseconds
    pub last_interval_ms: Millis,

    /// Average interval (exponential moving average, alpha = 0.1)
    pub avg_interval_ms: Millis,

    /// Longest interval observed
    pub max_interval_ms: Millis,

    /// Average absolute deviation of the interval from the period
    pub avg_jitter_ms: Millis,

    /// Whole periods lost to coalescing
    ///
    /// A window that ran `k` periods before its fire produces one fire, so
    /// `k - 1` fires are lost.
    pub coalesced_periods: u32,
}

impl FireStats {
    /// Record the first fire of a slot, which has no preceding interval.
    pub fn record_first(&mut self) {
        self.fire_count = self.fire_count.saturating_add(1);
    }

    /// Update statistics with the interval since the previous fire
    ///
    /// # Arguments
    ///
    /// * `interval_ms` - Time between this fire and the previous one
    /// * `period_ms` - Configured period of the slot at this fire
    pub fn update(&mut self, interval_ms: Millis, period_ms: Millis) {
        self.fire_count = self.fire_count.saturating_add(1);
        self.last_interval_ms = interval_ms;

        // EMA: avg_new = (value + 9 * avg_old) / 10, widened to avoid overflow
        self.avg_interval_ms = if self.avg_interval_ms == 0 {
            interval_ms
        } else {
            ((interval_ms as u64 + 9 * self.avg_interval_ms as u64) / 10) as Millis
        };

        if interval_ms > self.max_interval_ms {
            self.max_interval_ms = interval_ms;
        }

        let jitter = interval_ms.abs_diff(period_ms);
        self.avg_jitter_ms = if self.avg_jitter_ms == 0 {
            jitter
        } else {
            ((jitter as u64 + 9 * self.avg_jitter_ms as u64) / 10) as Millis
        };
    }

    /// Count periods lost by a fire whose window ran `elapsed_ms`.
    ///
    /// `elapsed_ms` is the window length at the fire, not the interval since
    /// the previous fire: time spent halted or before a window restart is not
    /// lateness. Returns the number of periods lost by this fire.
    pub fn record_lateness(&mut self, elapsed_ms: Millis, period_ms: Millis) -> u32 {
        let lost = match period_ms {
            0 => 0,
            _ => (elapsed_ms / period_ms).saturating_sub(1),
        };
        self.coalesced_periods = self.coalesced_periods.saturating_add(lost);
        lost
    }

    /// Reset all statistics to initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Registry-wide sweep statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Number of sweeps run
    pub sweep_count: u64,

    /// Total fires across all slots
    pub total_fires: u64,

    /// Duration of the last sweep in milliseconds
    pub last_sweep_ms: Millis,

    /// Longest sweep observed
    pub max_sweep_ms: Millis,
}

impl SweepStats {
    /// Record one sweep that fired `fired` slots and took `duration_ms`.
    pub fn update(&mut self, fired: usize, duration_ms: Millis) {
        self.sweep_count = self.sweep_count.saturating_add(1);
        self.total_fires = self.total_fires.saturating_add(fired as u64);
        self.last_sweep_ms = duration_ms;
        if duration_ms > self.max_sweep_ms {
            self.max_sweep_ms = duration_ms;
        }
    }

    /// Reset all statistics to initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
