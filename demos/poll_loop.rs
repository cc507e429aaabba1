//! Bare poll loop demonstration
//!
//! This example drives three timers from a host main loop using
//! `std::time::Instant` as the millisecond clock. It shows:
//! - A sampling timer firing at a fixed rate
//! - A display timer that starts immediately
//! - A heartbeat slot with no handler, polled as an elapsed-time flag
//! - Halting and resuming a timer from another timer's handler
//!
//! # Usage
//!
//! ```bash
//! cargo run --example poll_loop
//! ```

use std::cell::Cell;
use std::time::{Duration, Instant};

use pico_timer::{Clock, FnClock, MonitorConfig, SlotConfig, TimerLoop};

const SAMPLE: usize = 0;
const DISPLAY: usize = 1;
const HEARTBEAT: usize = 2;

fn main() {
    let epoch = Instant::now();
    let clock = FnClock(move || epoch.elapsed().as_millis() as u32);

    let samples = Cell::new(0u32);
    let mut sample = || samples.set(samples.get() + 1);

    let timers: TimerLoop<'_, _, 3> = TimerLoop::with_config(clock, MonitorConfig::silent());

    let mut display = || {
        println!("[display] samples so far: {}", samples.get());
        // Pause sampling for one display period out of every two
        if timers.get(SAMPLE).is_some_and(|s| s.is_active()) {
            timers.halt(SAMPLE);
        } else {
            timers.resume(SAMPLE);
        }
    };

    timers
        .configure(SAMPLE, SlotConfig::from_rate_hz(50), Some(&mut sample))
        .expect("sample slot");
    timers
        .configure(DISPLAY, SlotConfig::immediate(250), Some(&mut display))
        .expect("display slot");
    timers
        .configure(HEARTBEAT, SlotConfig::new(400), None)
        .expect("heartbeat slot");

    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        let fired = timers.tick();
        if fired.contains(&HEARTBEAT) {
            println!("[heartbeat] t={}ms", timers.clock().now_ms());
        }

        // Sleep until the next timer is due instead of spinning
        let idle = timers.next_due_in().unwrap_or(1).max(1);
        std::thread::sleep(Duration::from_millis(u64::from(idle)));
    }

    let sweep = timers.sweep_stats();
    println!(
        "{} sweeps, {} fires, max sweep {}ms",
        sweep.sweep_count, sweep.total_fires, sweep.max_sweep_ms
    );
    for index in [SAMPLE, DISPLAY, HEARTBEAT] {
        if let Some(stats) = timers.slot_stats(index) {
            println!(
                "timer {}: fires={} avg_interval={}ms jitter={}ms",
                index, stats.fire_count, stats.avg_interval_ms, stats.avg_jitter_ms
            );
        }
    }
}
