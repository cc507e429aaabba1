//! Sweep monitoring for timer health and timing accuracy
//!
//! The monitor is fed after each sweep and tracks, per slot:
//! - Fire count
//! - Interval between fires and its jitter against the period
//! - Periods lost to coalescing (the loop polled too slowly), taken from
//!   how long the window ran before its fire
//!
//! plus registry-wide sweep counts and durations. It reports through the
//! `log_*` macros.

use pico_timer_core::stats::{FireStats, SweepStats};
use pico_timer_core::timer::TimerRegistry;
use pico_timer_core::traits::{Clock, Millis};

/// Monitoring thresholds and report cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonitorConfig {
    /// Interval between periodic summaries, 0 disables them
    pub report_interval_ms: Millis,

    /// Warn when a single fire coalesces at least this many periods, 0 disables
    pub coalesce_warn_periods: u32,

    /// Warn when one sweep takes at least this long, 0 disables
    pub slow_sweep_warn_ms: Millis,
}

impl MonitorConfig {
    pub const fn new() -> Self {
        Self {
            report_interval_ms: 10_000,
            coalesce_warn_periods: 1,
            slow_sweep_warn_ms: 0,
        }
    }

    /// Collect statistics but never log from `tick`.
    pub const fn silent() -> Self {
        Self {
            report_interval_ms: 0,
            coalesce_warn_periods: 0,
            slow_sweep_warn_ms: 0,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-slot and per-sweep statistics for one registry of `N` slots
#[derive(Debug, Clone)]
pub struct SweepMonitor<const N: usize> {
    config: MonitorConfig,
    slots: [FireStats; N],
    last_fire: [Option<Millis>; N],
    sweep: SweepStats,
    last_report: Option<Millis>,
}

impl<const N: usize> SweepMonitor<N> {
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            slots: [FireStats::default(); N],
            last_fire: [None; N],
            sweep: SweepStats::default(),
            last_report: None,
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Statistics for slot `index`, `None` if out of range.
    pub fn slot_stats(&self, index: usize) -> Option<FireStats> {
        self.slots.get(index).copied()
    }

    pub fn sweep_stats(&self) -> SweepStats {
        self.sweep
    }

    /// Drop the history of slot `index` after it was redefined.
    pub fn forget(&mut self, index: usize) {
        if let Some(stats) = self.slots.get_mut(index) {
            stats.reset();
        }
        if let Some(last) = self.last_fire.get_mut(index) {
            *last = None;
        }
    }

    /// Record one sweep
    ///
    /// # Arguments
    ///
    /// * `registry` - Registry the sweep ran on, read for fire times and periods
    /// * `fired` - Indices returned by the sweep
    /// * `started` - Clock reading before the sweep
    /// * `finished` - Clock reading after the sweep
    pub fn record_sweep<C: Clock>(
        &mut self,
        registry: &TimerRegistry<'_, C, N>,
        fired: &[usize],
        started: Millis,
        finished: Millis,
    ) {
        let duration = finished.wrapping_sub(started);
        self.sweep.update(fired.len(), duration);

        if self.config.slow_sweep_warn_ms != 0 && duration >= self.config.slow_sweep_warn_ms {
            crate::log_warn!("Slow sweep: {}ms ({} fired)", duration, fired.len());
        }

        for &index in fired {
            let Some(slot) = registry.get(index) else {
                continue;
            };
            // Window start equals the fire time right after a fire
            let fired_at = slot.timestamp();
            let period = slot.period();

            match self.last_fire[index] {
                Some(previous) => self.slots[index].update(fired_at.wrapping_sub(previous), period),
                None => self.slots[index].record_first(),
            }
            self.last_fire[index] = Some(fired_at);

            // Halted time and restarted windows do not count as lateness
            let lost = self.slots[index].record_lateness(slot.fire_elapsed(), period);

            if self.config.coalesce_warn_periods != 0 && lost >= self.config.coalesce_warn_periods
            {
                crate::log_warn!(
                    "Timer {}: {} period(s) of {}ms coalesced into one fire",
                    index,
                    lost,
                    period
                );
            }
        }
    }

    /// Whether a periodic summary is due at `now`.
    pub fn report_due(&self, now: Millis) -> bool {
        if self.config.report_interval_ms == 0 {
            return false;
        }
        match self.last_report {
            Some(last) => now.wrapping_sub(last) >= self.config.report_interval_ms,
            None => true,
        }
    }

    /// Log a summary and per-slot statistics.
    pub fn report<C: Clock>(&mut self, registry: &TimerRegistry<'_, C, N>, now: Millis) {
        self.last_report = Some(now);
        log_summary(&self.sweep);
        self.report_slot_stats(registry);
    }

    #[allow(unused_variables)]
    fn report_slot_stats<C: Clock>(&self, registry: &TimerRegistry<'_, C, N>) {
        for (index, slot) in registry.iter() {
            let stats = &self.slots[index];
            if stats.fire_count == 0 {
                continue;
            }
            crate::log_info!(
                "  timer {}: period={}ms fires={} interval={}ms (avg={}ms, max={}ms) jitter={}ms coalesced={}",
                index,
                slot.period(),
                stats.fire_count,
                stats.last_interval_ms,
                stats.avg_interval_ms,
                stats.max_interval_ms,
                stats.avg_jitter_ms,
                stats.coalesced_periods
            );
        }
    }
}

impl<const N: usize> Default for SweepMonitor<N> {
    fn default() -> Self {
        Self::new(MonitorConfig::default())
    }
}

/// Log sweep summary
#[allow(unused_variables)]
fn log_summary(sweep: &SweepStats) {
    crate::log_info!(
        "Timers: sweeps={} fires={} last_sweep={}ms max_sweep={}ms",
        sweep.sweep_count,
        sweep.total_fires,
        sweep.last_sweep_ms,
        sweep.max_sweep_ms
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pico_timer_core::traits::MockClock;

    #[test]
    fn test_record_sweep_tracks_intervals() {
        let clock = MockClock::new();
        let timers: TimerRegistry<'_, _, 2> = TimerRegistry::new(&clock);
        timers.begin(0, 100, None, false);
        let mut monitor = SweepMonitor::<2>::new(MonitorConfig::silent());

        for _ in 0..3 {
            clock.advance(100);
            let fired = timers.run();
            monitor.record_sweep(&timers, &fired, clock.now_ms(), clock.now_ms());
        }

        let stats = monitor.slot_stats(0).unwrap();
        assert_eq!(stats.fire_count, 3);
        assert_eq!(stats.last_interval_ms, 100);
        assert_eq!(stats.avg_jitter_ms, 0);
        assert_eq!(monitor.slot_stats(1).unwrap().fire_count, 0);
        assert!(monitor.slot_stats(2).is_none());

        let sweep = monitor.sweep_stats();
        assert_eq!(sweep.sweep_count, 3);
        assert_eq!(sweep.total_fires, 3);
    }

    #[test]
    fn test_record_sweep_counts_coalesced_periods() {
        let clock = MockClock::new();
        let timers: TimerRegistry<'_, _, 1> = TimerRegistry::new(&clock);
        timers.begin(0, 10, None, true);
        let mut monitor = SweepMonitor::<1>::default();

        let fired = timers.run();
        monitor.record_sweep(&timers, &fired, 0, 0);

        // Loop stalled for 45 ms
        clock.set(45);
        let fired = timers.run();
        monitor.record_sweep(&timers, &fired, 45, 45);

        let stats = monitor.slot_stats(0).unwrap();
        assert_eq!(stats.fire_count, 2);
        assert_eq!(stats.last_interval_ms, 45);
        assert_eq!(stats.coalesced_periods, 3);
    }

    #[test]
    fn test_halted_time_is_not_coalescing() {
        let clock = MockClock::new();
        let timers: TimerRegistry<'_, _, 1> = TimerRegistry::new(&clock);
        timers.begin(0, 10, None, false);
        let mut monitor = SweepMonitor::<1>::default();

        clock.set(10);
        let fired = timers.run();
        monitor.record_sweep(&timers, &fired, 10, 10);

        timers.halt(0);
        for _ in 0..100 {
            clock.advance(10);
            let fired = timers.run();
            monitor.record_sweep(&timers, &fired, clock.now_ms(), clock.now_ms());
        }
        timers.resume(0);
        clock.advance(10);
        let fired = timers.run();
        monitor.record_sweep(&timers, &fired, clock.now_ms(), clock.now_ms());

        let stats = monitor.slot_stats(0).unwrap();
        assert_eq!(stats.fire_count, 2);
        assert_eq!(stats.last_interval_ms, 1_010);
        assert_eq!(stats.coalesced_periods, 0);
    }

    #[test]
    fn test_reset_window_is_not_coalescing() {
        let clock = MockClock::new();
        let timers: TimerRegistry<'_, _, 1> = TimerRegistry::new(&clock);
        timers.begin(0, 10, None, true);
        let mut monitor = SweepMonitor::<1>::default();

        let fired = timers.run();
        monitor.record_sweep(&timers, &fired, 0, 0);

        // Watchdog-style kicks hold the fire off for 25 ms
        for _ in 0..5 {
            clock.advance(5);
            timers.reset(0);
            let fired = timers.run();
            monitor.record_sweep(&timers, &fired, clock.now_ms(), clock.now_ms());
        }
        clock.advance(10);
        let fired = timers.run();
        assert_eq!(fired.as_slice(), &[0]);
        monitor.record_sweep(&timers, &fired, clock.now_ms(), clock.now_ms());

        let stats = monitor.slot_stats(0).unwrap();
        assert_eq!(stats.fire_count, 2);
        assert_eq!(stats.last_interval_ms, 35);
        assert_eq!(stats.coalesced_periods, 0);
    }

    #[test]
    fn test_config_accessor() {
        let config = MonitorConfig {
            coalesce_warn_periods: 3,
            ..MonitorConfig::new()
        };
        let monitor = SweepMonitor::<2>::new(config);
        assert_eq!(monitor.config(), &config);
        assert_eq!(SweepMonitor::<2>::default().config(), &MonitorConfig::new());
    }

    #[test]
    fn test_forget_resets_slot_history() {
        let clock = MockClock::new();
        let timers: TimerRegistry<'_, _, 1> = TimerRegistry::new(&clock);
        timers.begin(0, 10, None, true);
        let mut monitor = SweepMonitor::<1>::new(MonitorConfig::silent());

        let fired = timers.run();
        monitor.record_sweep(&timers, &fired, 0, 0);
        monitor.forget(0);
        monitor.forget(5);

        assert_eq!(monitor.slot_stats(0), Some(FireStats::default()));
    }

    #[test]
    fn test_sweep_duration_wraps() {
        let clock = MockClock::new();
        let timers: TimerRegistry<'_, _, 1> = TimerRegistry::new(&clock);
        let mut monitor = SweepMonitor::<1>::new(MonitorConfig {
            slow_sweep_warn_ms: 5,
            ..MonitorConfig::silent()
        });

        monitor.record_sweep(&timers, &[], Millis::MAX - 2, 4);
        assert_eq!(monitor.sweep_stats().last_sweep_ms, 7);
    }

    #[test]
    fn test_report_due() {
        let clock = MockClock::new();
        let timers: TimerRegistry<'_, _, 1> = TimerRegistry::new(&clock);
        let mut monitor = SweepMonitor::<1>::new(MonitorConfig {
            report_interval_ms: 1_000,
            ..MonitorConfig::silent()
        });

        assert!(monitor.report_due(0));
        monitor.report(&timers, 0);
        assert!(!monitor.report_due(999));
        assert!(monitor.report_due(1_000));

        assert!(!SweepMonitor::<1>::new(MonitorConfig::silent()).report_due(5_000));
    }
}
