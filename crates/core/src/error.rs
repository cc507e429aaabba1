//! Timer error types
//!
//! The timer state machine itself has no failure modes. The only thing a
//! caller can get wrong is addressing a slot that does not exist, and the
//! registry mutators ignore that silently. Checked accessors report it here.

use core::fmt;

/// Result type for checked timer operations
pub type Result<T> = core::result::Result<T, TimerError>;

/// Timer-level errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// Slot index outside `0..capacity`
    InvalidIndex {
        /// Requested index
        index: usize,
        /// Number of slots in the registry
        capacity: usize,
    },
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::InvalidIndex { index, capacity } => {
                write!(f, "Invalid timer index {} (capacity {})", index, capacity)
            }
        }
    }
}
