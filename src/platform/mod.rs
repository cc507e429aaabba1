//! Platform clock sources
//!
//! This module provides `Clock` implementations for real targets. All
//! platform-specific code must be isolated to this module.

pub mod time;

#[cfg(feature = "embassy")]
pub use time::EmbassyClock;
pub use time::TickCounter;
