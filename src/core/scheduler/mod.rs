//! Timer loop driver for cooperative control loops
//!
//! [`TimerLoop`] couples a [`TimerRegistry`] with a [`SweepMonitor`]. The
//! host calls [`TimerLoop::tick`] on every iteration of its main loop; each
//! tick runs one sweep, feeds the monitor and emits a periodic summary.
//!
//! All registry operations are available on the loop through `Deref`.
//!
//! # Example
//!
//! ```
//! use core::cell::Cell;
//! use pico_timer::core::scheduler::{MonitorConfig, TimerLoop};
//! use pico_timer::{MockClock, SlotConfig, DEFAULT_TIMER_COUNT};
//!
//! let clock = MockClock::new();
//! let samples = Cell::new(0);
//! let mut sample = || samples.set(samples.get() + 1);
//!
//! let timers: TimerLoop<'_, _, DEFAULT_TIMER_COUNT> = TimerLoop::with_config(&clock, MonitorConfig::silent());
//! timers.configure(0, SlotConfig::from_rate_hz(50), Some(&mut sample)).unwrap();
//!
//! for _ in 0..100 {
//!     clock.advance(1);
//!     timers.tick();
//! }
//! assert_eq!(samples.get(), 5);
//! ```

pub mod monitor;

use core::cell::RefCell;
use core::ops::Deref;

use pico_timer_core::stats::{FireStats, SweepStats};
use pico_timer_core::timer::{Fired, Handler, SlotConfig, TimerRegistry};
use pico_timer_core::traits::Clock;
use pico_timer_core::Result;

pub use monitor::{MonitorConfig, SweepMonitor};

/// Registry plus monitoring, driven by the host loop
pub struct TimerLoop<'a, C: Clock, const N: usize> {
    registry: TimerRegistry<'a, C, N>,
    monitor: RefCell<SweepMonitor<N>>,
}

impl<'a, C: Clock, const N: usize> TimerLoop<'a, C, N> {
    /// Create a loop with the default monitoring configuration.
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, MonitorConfig::default())
    }

    pub fn with_config(clock: C, config: MonitorConfig) -> Self {
        crate::log_debug!(
            "Timer loop: {} slots, report every {}ms",
            N,
            config.report_interval_ms
        );
        Self {
            registry: TimerRegistry::new(clock),
            monitor: RefCell::new(SweepMonitor::new(config)),
        }
    }

    pub fn registry(&self) -> &TimerRegistry<'a, C, N> {
        &self.registry
    }

    /// Define slot `index`, reporting an out-of-range index.
    ///
    /// Unlike [`TimerRegistry::begin_with`], the slot's statistics restart
    /// so intervals from the previous definition do not leak in.
    pub fn configure(
        &self,
        index: usize,
        config: SlotConfig,
        handler: Option<Handler<'a>>,
    ) -> Result<()> {
        if let Err(err) = self.registry.slot(index) {
            crate::log_warn!("Ignoring timer {}: only {} slots", index, N);
            return Err(err);
        }

        self.registry.begin_with(index, config, handler);
        // Never held across `run`, so handlers can reach this
        self.monitor.borrow_mut().forget(index);
        crate::log_debug!(
            "Timer {}: period={}ms immediate={}",
            index,
            config.period_ms,
            config.start_immediately
        );
        Ok(())
    }

    /// Run one sweep and record it.
    ///
    /// Handlers run before the monitor is touched, so a handler may call
    /// `tick` itself; that nested sweep is recorded on its own.
    pub fn tick(&self) -> Fired<N> {
        let started = self.registry.clock().now_ms();
        let fired = self.registry.run();
        let finished = self.registry.clock().now_ms();

        let mut monitor = self.monitor.borrow_mut();
        monitor.record_sweep(&self.registry, &fired, started, finished);
        if monitor.report_due(finished) {
            monitor.report(&self.registry, finished);
        }
        fired
    }

    /// Log a summary now, regardless of the report interval.
    pub fn report(&self) {
        let now = self.registry.clock().now_ms();
        self.monitor.borrow_mut().report(&self.registry, now);
    }

    pub fn monitor_config(&self) -> MonitorConfig {
        *self.monitor.borrow().config()
    }

    pub fn slot_stats(&self, index: usize) -> Option<FireStats> {
        self.monitor.borrow().slot_stats(index)
    }

    pub fn sweep_stats(&self) -> SweepStats {
        self.monitor.borrow().sweep_stats()
    }
}

impl<'a, C: Clock, const N: usize> Deref for TimerLoop<'a, C, N> {
    type Target = TimerRegistry<'a, C, N>;

    fn deref(&self) -> &Self::Target {
        &self.registry
    }
}
