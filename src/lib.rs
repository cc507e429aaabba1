#![cfg_attr(not(test), no_std)]

//! pico_timer - Cooperative software timers for single-threaded control loops
//!
//! A fixed set of periodic actions (sensor sampling, display refresh,
//! protocol heartbeats) is interleaved by polling a timer registry from the
//! main loop, with no allocation, threads or interrupts required.
//!
//! The timer state machine and registry live in [`pico_timer_core`] and are
//! re-exported here. This crate adds:
//!
//! - [`core::logging`](crate::core::logging): `log_*` macros (defmt on target, stdout in tests)
//! - [`core::scheduler`](crate::core::scheduler): [`TimerLoop`], a registry driver with sweep monitoring
//! - [`platform`]: clock sources for real targets
//!
//! # Example
//!
//! ```
//! use core::cell::Cell;
//! use pico_timer::{MockClock, TimerRegistry};
//!
//! let clock = MockClock::new();
//! let refreshed = Cell::new(false);
//! let mut refresh = || refreshed.set(true);
//!
//! let timers: TimerRegistry<'_, _, 2> = TimerRegistry::new(&clock);
//! timers.begin(0, 100, Some(&mut refresh), false);
//!
//! clock.advance(100);
//! timers.run();
//! assert!(refreshed.get());
//! ```

// Logging, scheduler driver and monitoring
pub mod core;

// Platform clock sources
pub mod platform;

// Note: Logging macros (log_info!, log_warn!, log_error!, log_debug!, log_trace!)
// are exported at crate root via #[macro_export] in core::logging

pub use crate::core::scheduler::{MonitorConfig, TimerLoop};
pub use pico_timer_core::error::{Result, TimerError};
pub use pico_timer_core::stats::{FireStats, SweepStats};
pub use pico_timer_core::timer::{
    Fired, Handler, SlotConfig, TimerHandler, TimerRecord, TimerRegistry, TimerState,
    DEFAULT_TIMER_COUNT,
};
pub use pico_timer_core::traits::{Clock, FnClock, Millis, MockClock};
