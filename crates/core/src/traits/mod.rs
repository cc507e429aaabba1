//! Core traits for platform-agnostic timer functionality.
//!
//! This module provides trait abstractions that decouple the timer state
//! machine from platform-specific clock sources.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations (Embassy) live in the `pico_timer` crate

pub mod clock;

pub use clock::{Clock, FnClock, Millis, MockClock};
