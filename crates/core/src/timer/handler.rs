//! Timer handler abstraction

/// Callback invoked when a timer fires.
///
/// Any `FnMut()` closure is a handler, so per-timer context is captured by
/// the closure instead of living in globals. Types that prefer a named
/// callback can implement the trait directly.
///
/// ```
/// use pico_timer_core::timer::TimerHandler;
///
/// struct Heartbeat {
///     beats: u32,
/// }
///
/// impl TimerHandler for Heartbeat {
///     fn on_timer(&mut self) {
///         self.beats += 1;
///     }
/// }
///
/// let mut heartbeat = Heartbeat { beats: 0 };
/// heartbeat.on_timer();
/// assert_eq!(heartbeat.beats, 1);
/// ```
pub trait TimerHandler {
    /// Called inline from the sweep each time the timer fires.
    ///
    /// Must return promptly: later slots wait until it does.
    fn on_timer(&mut self);
}

impl<F: FnMut()> TimerHandler for F {
    fn on_timer(&mut self) {
        self()
    }
}
