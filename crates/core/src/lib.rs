//! pico_timer_core - Pure no_std timer multiplexing
//!
//! This crate contains the platform-agnostic timer state machine and the
//! fixed-capacity registry that sweeps it, testable on host without any
//! feature flags or embedded dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies, no allocation
//! - **Trait abstractions**: The clock is injected via [`traits::Clock`]
//!
//! # Modules
//!
//! - [`traits`]: Platform-agnostic clock abstraction (Clock, MockClock)
//! - [`timer`]: Timer records, registry and slot configuration
//! - [`stats`]: Fire interval and sweep statistics
//! - [`error`]: Error type for checked slot access

#![no_std]

pub mod error;
pub mod stats;
pub mod timer;
pub mod traits;

pub use error::{Result, TimerError};
pub use timer::{SlotConfig, TimerHandler, TimerRecord, TimerRegistry, TimerState};
pub use traits::{Clock, Millis};
