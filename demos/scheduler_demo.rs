//! Scheduler demonstration on the host
//!
//! Simulates one second of a 1 kHz timer interrupt and drives three tasks:
//! - heartbeat: every 250ms, forever
//! - sensor: every 10ms, forever, paused half way through
//! - startup: three runs at 100ms, then exhausted
//!
//! # Usage
//!
//! ```bash
//! cargo run --features mock --example scheduler_demo
//! ```

use std::cell::Cell;

use taskmaster::platform::mock::{MockClock, MockWatchdog};
use taskmaster::{tick_notify, Repetitions, Scheduler, TaskId, MILLISECONDS, SCHEDULER_TICK};

const HEARTBEAT: TaskId<4> = TaskId::slot(0);
const SENSOR: TaskId<4> = TaskId::slot(1);
const STARTUP: TaskId<4> = TaskId::slot(2);

fn main() {
    let clock = MockClock::new();
    let samples = Cell::new(0u32);

    let mut heartbeat = |elapsed_us: u32| println!("heartbeat ({}us since last)", elapsed_us);
    let mut sensor = |_: u32| {
        samples.set(samples.get() + 1);
        clock.advance(40 + samples.get() % 7);
    };
    let mut startup = |_: u32| {
        println!("startup step");
        clock.advance(250);
    };

    let mut scheduler: Scheduler<'_, 'static, _, _, 4> =
        Scheduler::new(MILLISECONDS, &SCHEDULER_TICK, &clock, MockWatchdog::new());

    scheduler
        .add_task(
            HEARTBEAT,
            Some(&mut heartbeat),
            250 * MILLISECONDS,
            250 * MILLISECONDS,
            Repetitions::Unlimited,
        )
        .expect("heartbeat registration");
    scheduler
        .add_task(
            SENSOR,
            Some(&mut sensor),
            MILLISECONDS,
            10 * MILLISECONDS,
            Repetitions::Unlimited,
        )
        .expect("sensor registration");
    scheduler
        .add_task(
            STARTUP,
            Some(&mut startup),
            100 * MILLISECONDS,
            100 * MILLISECONDS,
            Repetitions::times(3),
        )
        .expect("startup registration");

    for ms in 1..=1000 {
        // Stand-in for the timer interrupt
        tick_notify();
        scheduler.poll();

        if ms == 500 {
            scheduler.pause_task(SENSOR);
        }
    }

    let stuck = scheduler.report();
    let sensor_profile = scheduler.tasks().profile(SENSOR);

    println!("sensor samples: {}", samples.get());
    println!(
        "sensor exec ticks: min={} avg={} max={}",
        sensor_profile.min_ticks, sensor_profile.avg_ticks, sensor_profile.max_ticks
    );
    println!("exhausted tasks still scheduled: {}", stuck);
    println!("watchdog feeds: {}", scheduler.watchdog().feeds());
}
