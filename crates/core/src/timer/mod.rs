//! Cooperative periodic timers
//!
//! # Components
//!
//! - [`record`]: Single timer state machine ([`TimerRecord`])
//! - [`registry`]: Fixed-capacity, index-addressed collection with a sweep
//! - [`handler`]: Callback trait implemented by every `FnMut()`
//! - [`config`]: Per-slot configuration ([`SlotConfig`])
//!
//! Per-slot lifecycle:
//!
//! ```text
//!            begin                halt
//! Disabled ─────────▶ Active ─────────▶ Halted
//!    ▲                  ▲ ◀─────────────  │
//!    │  begin(period 0) │     resume      │
//!    └──────────────────┴─────────────────┘
//!                       begin (from any state)
//! ```

pub mod config;
pub mod handler;
pub mod record;
pub mod registry;

pub use config::{SlotConfig, DEFAULT_TIMER_COUNT};
pub use handler::TimerHandler;
pub use record::{Handler, TimerRecord, TimerState};
pub use registry::{Fired, TimerRegistry};
