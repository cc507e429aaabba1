//! Fixed-capacity timer registry
//!
//! The registry owns `N` [`TimerRecord`] slots and the clock they are
//! evaluated against. Slots are addressed by index, the caller decides which
//! index means what, and redefining a slot is just another `begin`.
//!
//! Mutators silently ignore an out-of-range index. Use [`TimerRegistry::slot`]
//! when a bad index should be detected.

use heapless::Vec;

use super::config::SlotConfig;
use super::record::{Handler, TimerRecord};
use crate::error::{Result, TimerError};
use crate::traits::{Clock, Millis};

/// Indices of the slots that fired during one sweep, in index order
pub type Fired<const N: usize> = Vec<usize, N>;

/// `N` independent periodic timers evaluated by one sweep
///
/// All operations take `&self`, so a handler can hold a reference to the
/// registry and halt, resume or redefine slots while a sweep runs. The
/// registry is `!Sync`; it belongs to a single control loop.
///
/// # Example
///
/// ```
/// use core::cell::Cell;
/// use pico_timer_core::timer::TimerRegistry;
/// use pico_timer_core::traits::MockClock;
///
/// let clock = MockClock::new();
/// let blinks = Cell::new(0);
/// let mut blink = || blinks.set(blinks.get() + 1);
///
/// let timers: TimerRegistry<'_, _, 2> = TimerRegistry::new(&clock);
/// timers.begin(0, 500, Some(&mut blink), true);
///
/// assert_eq!(timers.run().as_slice(), &[0]);
/// clock.advance(500);
/// timers.run();
/// assert_eq!(blinks.get(), 2);
/// ```
pub struct TimerRegistry<'a, C: Clock, const N: usize> {
    clock: C,
    slots: [TimerRecord<'a>; N],
}

impl<'a, C: Clock, const N: usize> TimerRegistry<'a, C, N> {
    /// Create a registry with every slot disabled.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            slots: core::array::from_fn(|_| TimerRecord::new()),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of slots.
    pub const fn timer_count(&self) -> usize {
        N
    }

    /// Checked access to a slot.
    pub fn slot(&self, index: usize) -> Result<&TimerRecord<'a>> {
        self.slots.get(index).ok_or(TimerError::InvalidIndex {
            index,
            capacity: N,
        })
    }

    pub fn get(&self, index: usize) -> Option<&TimerRecord<'a>> {
        self.slots.get(index)
    }

    /// Iterate over `(index, record)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &TimerRecord<'a>)> {
        self.slots.iter().enumerate()
    }

    /// Define or redefine the timer in slot `index`.
    pub fn begin(
        &self,
        index: usize,
        period: Millis,
        handler: Option<Handler<'a>>,
        start_immediately: bool,
    ) {
        if let Some(slot) = self.slots.get(index) {
            slot.begin(self.clock.now_ms(), period, handler, start_immediately);
        }
    }

    /// [`begin`](Self::begin) taking the period and start flag from a config.
    pub fn begin_with(&self, index: usize, config: SlotConfig, handler: Option<Handler<'a>>) {
        self.begin(index, config.period_ms, handler, config.start_immediately);
    }

    /// Restart the period window of slot `index`.
    pub fn reset(&self, index: usize) {
        if let Some(slot) = self.slots.get(index) {
            slot.reset(self.clock.now_ms());
        }
    }

    /// Suspend slot `index`.
    pub fn halt(&self, index: usize) {
        if let Some(slot) = self.slots.get(index) {
            slot.halt();
        }
    }

    /// Reactivate slot `index` if halted, with a window starting now.
    pub fn resume(&self, index: usize) {
        if let Some(slot) = self.slots.get(index) {
            slot.resume(self.clock.now_ms());
        }
    }

    /// Activate slot `index` and restart its window unconditionally.
    pub fn restart(&self, index: usize) {
        if let Some(slot) = self.slots.get(index) {
            slot.restart(self.clock.now_ms());
        }
    }

    /// Change the period of slot `index` without moving its window start.
    pub fn set_period(&self, index: usize, period: Millis) {
        if let Some(slot) = self.slots.get(index) {
            slot.set_period(period);
        }
    }

    /// Evaluate slot `index` alone. Out-of-range indices never fire.
    pub fn poll(&self, index: usize) -> bool {
        match self.slots.get(index) {
            Some(slot) => slot.poll(self.clock.now_ms()),
            None => false,
        }
    }

    /// Sweep all slots in index order, firing those that are due.
    ///
    /// The clock is read once per slot, so time spent in one handler counts
    /// towards the slots after it. Changes a handler makes to later slots
    /// take effect within the same sweep.
    pub fn run(&self) -> Fired<N> {
        let mut fired = Fired::new();
        for (index, slot) in self.slots.iter().enumerate() {
            if slot.poll(self.clock.now_ms()) {
                // At most one entry per slot, capacity N cannot overflow
                let _ = fired.push(index);
            }
        }
        fired
    }

    /// Shortest time until any slot can fire, `None` if none can.
    pub fn next_due_in(&self) -> Option<Millis> {
        let now = self.clock.now_ms();
        self.slots.iter().filter_map(|slot| slot.remaining(now)).min()
    }
}

impl<C: Clock, const N: usize> core::fmt::Debug for TimerRegistry<'_, C, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TimerRegistry")
            .field("slots", &self.slots)
            .finish()
    }
}
