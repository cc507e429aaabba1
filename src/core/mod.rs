//! Loop-level timer infrastructure
//!
//! This module provides the logging macros and the timer loop driver, and
//! re-exports the pure timer types from `pico_timer_core`.

pub mod logging;
pub mod scheduler;

// Re-export pure modules from pico_timer_core for compatibility
// This allows code to use crate::core::X where X is from the core library
pub use pico_timer_core::error;
pub use pico_timer_core::stats;
pub use pico_timer_core::timer;
pub use pico_timer_core::traits;
