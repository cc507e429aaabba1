//! Single timer state machine
//!
//! A [`TimerRecord`] holds one optional handler, a period, the timestamp at
//! which the current period window began, and two flags (active and
//! start-pending). Every operation takes the current clock reading so the
//! record stays a pure state machine; [`TimerRegistry`](super::TimerRegistry)
//! supplies readings from its clock.
//!
//! Fields live in `Cell`s so that all operations work through a shared
//! reference. A handler may therefore hold `&TimerRegistry` and reconfigure
//! other slots while a sweep is in progress.

use core::cell::Cell;

use super::handler::TimerHandler;
use crate::traits::Millis;

/// Borrowed timer callback stored in a slot
pub type Handler<'a> = &'a mut (dyn TimerHandler + 'a);

/// Externally observable timer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Period is 0, the timer never fires
    Disabled,
    /// Counting towards the next fire
    Active,
    /// Suspended by `halt`, the window start follows the clock
    Halted,
}

/// One periodic timer
pub struct TimerRecord<'a> {
    handler: Cell<Option<Handler<'a>>>,
    period: Cell<Millis>,
    timestamp: Cell<Millis>,
    active: Cell<bool>,
    start_pending: Cell<bool>,
    /// Window length measured by the most recent fire
    fire_elapsed: Cell<Millis>,
    /// Bumped by `begin`, lets `fire` detect a handler redefining its own slot
    generation: Cell<u32>,
}

impl<'a> TimerRecord<'a> {
    /// Disabled record: period 0, no handler, active, no start pending.
    pub const fn new() -> Self {
        Self {
            handler: Cell::new(None),
            period: Cell::new(0),
            timestamp: Cell::new(0),
            active: Cell::new(true),
            start_pending: Cell::new(false),
            fire_elapsed: Cell::new(0),
            generation: Cell::new(0),
        }
    }

    /// Define or redefine the timer.
    ///
    /// Overwrites any previous configuration, restarts the period window at
    /// `now` and makes the timer active. With `start_immediately` the next
    /// `poll` fires regardless of elapsed time.
    pub fn begin(
        &self,
        now: Millis,
        period: Millis,
        handler: Option<Handler<'a>>,
        start_immediately: bool,
    ) {
        self.generation.set(self.generation.get().wrapping_add(1));
        self.handler.set(handler);
        self.period.set(period);
        self.start_pending.set(start_immediately);
        self.active.set(true);
        self.fire_elapsed.set(0);
        self.reset(now);
    }

    /// Restart the current period window at `now`.
    pub fn reset(&self, now: Millis) {
        self.timestamp.set(now);
    }

    /// Suspend the timer.
    pub fn halt(&self) {
        self.active.set(false);
    }

    /// Reactivate a halted timer with a fresh window starting at `now`.
    ///
    /// A pending immediate start is dropped. Resuming an active timer does
    /// nothing, in particular it does not extend the running window.
    pub fn resume(&self, now: Millis) {
        if !self.active.get() {
            self.active.set(true);
            self.start_pending.set(false);
            self.reset(now);
        }
    }

    /// Make the timer active and restart its window even if it was running.
    pub fn restart(&self, now: Millis) {
        self.resume(now);
        self.reset(now);
    }

    /// Change the period, keeping the current window start.
    ///
    /// Shrinking below the already elapsed time fires on the next poll.
    pub fn set_period(&self, period: Millis) {
        self.period.set(period);
    }

    /// Evaluate the timer at `now`, firing it if due.
    ///
    /// Returns `true` when the timer fired, whether or not a handler is
    /// attached. A disabled or halted timer never fires and its window start
    /// tracks `now`, so reactivation does not see stale elapsed time.
    pub fn poll(&self, now: Millis) -> bool {
        if self.period.get() == 0 || !self.active.get() {
            self.timestamp.set(now);
            return false;
        }

        let elapsed = now.wrapping_sub(self.timestamp.get());
        if elapsed < self.period.get() && !self.start_pending.get() {
            return false;
        }

        self.fire_elapsed.set(elapsed);
        self.timestamp.set(now);
        self.start_pending.set(false);
        self.fire();
        true
    }

    fn fire(&self) {
        let generation = self.generation.get();
        // Out of the cell while running, so a re-entrant sweep cannot call it
        if let Some(handler) = self.handler.take() {
            handler.on_timer();
            if self.generation.get() == generation {
                self.handler.set(Some(handler));
            }
        }
    }

    pub fn period(&self) -> Millis {
        self.period.get()
    }

    /// Start of the current period window.
    pub fn timestamp(&self) -> Millis {
        self.timestamp.get()
    }

    /// Elapsed window length at the most recent fire, 0 before any fire.
    ///
    /// Unlike the interval between two fires, this excludes time spent
    /// halted and windows restarted by `reset`, `resume` or `restart`, so
    /// `fire_elapsed / period` counts the periods that one fire stood for.
    pub fn fire_elapsed(&self) -> Millis {
        self.fire_elapsed.get()
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn is_halted(&self) -> bool {
        !self.active.get()
    }

    pub fn is_start_pending(&self) -> bool {
        self.start_pending.get()
    }

    pub fn has_handler(&self) -> bool {
        let handler = self.handler.take();
        let present = handler.is_some();
        self.handler.set(handler);
        present
    }

    pub fn state(&self) -> TimerState {
        if self.period.get() == 0 {
            TimerState::Disabled
        } else if self.active.get() {
            TimerState::Active
        } else {
            TimerState::Halted
        }
    }

    /// Time since the current window began.
    pub fn elapsed(&self, now: Millis) -> Millis {
        now.wrapping_sub(self.timestamp.get())
    }

    /// Time until the next fire, `None` if the timer cannot fire.
    ///
    /// Returns `Some(0)` when the timer is overdue or has a start pending.
    pub fn remaining(&self, now: Millis) -> Option<Millis> {
        match self.state() {
            TimerState::Active if self.start_pending.get() => Some(0),
            TimerState::Active => Some(self.period.get().saturating_sub(self.elapsed(now))),
            TimerState::Disabled | TimerState::Halted => None,
        }
    }
}

impl Default for TimerRecord<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for TimerRecord<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TimerRecord")
            .field("period", &self.period.get())
            .field("timestamp", &self.timestamp.get())
            .field("active", &self.active.get())
            .field("start_pending", &self.start_pending.get())
            .field("has_handler", &self.has_handler())
            .finish()
    }
}
