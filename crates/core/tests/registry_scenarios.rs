//! End-to-end sweep scenarios driven through the public API only.

use std::cell::{Cell, RefCell};

use pico_timer_core::timer::{SlotConfig, TimerHandler, TimerRegistry, TimerState};
use pico_timer_core::traits::{FnClock, Millis, MockClock};

/// Handler type recording the times it was called at.
struct Recorder<'c> {
    clock: &'c MockClock,
    fired_at: Vec<Millis>,
}

impl TimerHandler for Recorder<'_> {
    fn on_timer(&mut self) {
        use pico_timer_core::traits::Clock;
        self.fired_at.push(self.clock.now_ms());
    }
}

#[test]
fn three_slots_fire_on_their_own_boundaries() {
    let clock = MockClock::new();
    let mut slot0 = Recorder {
        clock: &clock,
        fired_at: Vec::new(),
    };
    let mut slot1 = Recorder {
        clock: &clock,
        fired_at: Vec::new(),
    };

    {
        let timers: TimerRegistry<'_, _, 3> = TimerRegistry::new(&clock);
        timers.begin_with(0, SlotConfig::new(100), Some(&mut slot0));
        timers.begin_with(1, SlotConfig::immediate(50), Some(&mut slot1));

        assert_eq!(timers.run().as_slice(), &[1]);
        for _ in 0..8 {
            clock.advance(25);
            timers.run();
        }
        assert_eq!(timers.slot(2).map(|s| s.state()), Ok(TimerState::Disabled));
    }

    assert_eq!(slot0.fired_at, vec![100, 200]);
    assert_eq!(slot1.fired_at, vec![0, 50, 100, 150, 200]);
}

#[test]
fn wraparound_fires_at_the_right_moment() {
    let clock = MockClock::with_initial(Millis::MAX - 149);
    let mut recorder = Recorder {
        clock: &clock,
        fired_at: Vec::new(),
    };

    {
        let timers: TimerRegistry<'_, _, 1> = TimerRegistry::new(&clock);
        timers.begin(0, 100, Some(&mut recorder), false);

        // Step 10 ms at a time through the overflow point
        for _ in 0..30 {
            clock.advance(10);
            timers.run();
        }
    }

    // MAX - 149 + 100 = MAX - 49, then + 100 wraps to 50, then 150
    assert_eq!(recorder.fired_at, vec![Millis::MAX - 49, 50, 150]);
}

#[test]
fn halted_slot_does_not_burst_on_resume() {
    let clock = MockClock::new();
    let count = Cell::new(0u32);
    let mut handler = || count.set(count.get() + 1);

    let timers: TimerRegistry<'_, _, 1> = TimerRegistry::new(&clock);
    timers.begin(0, 10, Some(&mut handler), false);
    timers.halt(0);

    for _ in 0..100 {
        clock.advance(10);
        assert!(timers.run().is_empty());
    }

    timers.resume(0);
    assert!(timers.run().is_empty());
    clock.advance(10);
    assert_eq!(timers.run().as_slice(), &[0]);
    assert_eq!(count.get(), 1);
}

#[test]
fn handlers_reconfigure_each_other() {
    let clock = MockClock::new();
    let log = RefCell::new(Vec::new());
    let mut blink = || log.borrow_mut().push("blink");

    let timers: TimerRegistry<'_, _, 2> = TimerRegistry::new(&clock);
    // Slot 0 toggles slot 1 every 100 ms
    let mut toggle = || {
        log.borrow_mut().push("toggle");
        match timers.get(1).map(|s| s.state()) {
            Some(TimerState::Active) => timers.halt(1),
            _ => timers.resume(1),
        }
    };

    timers.begin(0, 100, Some(&mut toggle), false);
    timers.begin(1, 30, Some(&mut blink), false);

    for _ in 0..30 {
        clock.advance(10);
        timers.run();
    }

    assert_eq!(
        log.borrow().as_slice(),
        &[
            "blink", "blink", "blink", "toggle", "toggle", "blink", "blink", "blink", "toggle"
        ]
    );
}

#[test]
fn fn_clock_drives_registry() {
    let ticks = Cell::new(0u32);
    let timers: TimerRegistry<'_, _, 1> = TimerRegistry::new(FnClock(|| ticks.get()));
    timers.begin(0, 5, None, false);

    ticks.set(4);
    assert!(!timers.poll(0));
    ticks.set(5);
    assert!(timers.poll(0));
}
