//! Tick scheduling and timing utilities.
//!
//! Provides portable pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};

use crate::DisplayDriver;
use crate::clock::WordClock;
use crate::wall_time::{AddressSource, TimeSource};

/// Default tick interval, fine enough for the 20 ms sweep to look smooth.
pub const DEFAULT_TICK: Duration = Duration::from_millis(50);

/// Result of a tick
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable scheduler that drives the clock at a fixed rate.
///
/// Every tick it polls the time source, lets the clock compute the cells
/// and hands them to the display. Falling more than two ticks behind resets
/// the schedule instead of catching up.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(clock, display, rtc, wifi_address);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, D, T, A, const INTENT_CHANNEL_SIZE: usize>
where
    D: DisplayDriver,
    T: TimeSource,
    A: AddressSource,
{
    display: D,
    time: T,
    address: A,
    clock: WordClock<'a, INTENT_CHANNEL_SIZE>,
    next_tick: Instant,
    tick_duration: Duration,
}

impl<'a, D, T, A, const INTENT_CHANNEL_SIZE: usize>
    FrameScheduler<'a, D, T, A, INTENT_CHANNEL_SIZE>
where
    D: DisplayDriver,
    T: TimeSource,
    A: AddressSource,
{
    /// Create a new scheduler ticking every [`DEFAULT_TICK`].
    pub fn new(
        clock: WordClock<'a, INTENT_CHANNEL_SIZE>,
        display: D,
        time: T,
        address: A,
    ) -> Self {
        Self::with_tick_duration(clock, display, time, address, DEFAULT_TICK)
    }

    /// Create a new scheduler with a custom tick interval.
    pub fn with_tick_duration(
        clock: WordClock<'a, INTENT_CHANNEL_SIZE>,
        display: D,
        time: T,
        address: A,
        tick_duration: Duration,
    ) -> Self {
        Self {
            display,
            time,
            address,
            clock,
            next_tick: Instant::from_ticks(0),
            tick_duration,
        }
    }

    /// Process one tick and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after long stalls
        let max_drift = self.tick_duration * 2;
        if now > self.next_tick + max_drift {
            self.next_tick = now;
        }

        let wall_time = self.time.local_time();
        let cells = self.clock.tick(now, wall_time, &self.address);
        self.display.show(cells);

        self.next_tick += self.tick_duration;

        FrameResult {
            next_deadline: self.next_tick,
            sleep_duration: self
                .next_tick
                .checked_duration_since(now)
                .unwrap_or(Duration::from_ticks(0)),
        }
    }

    pub fn clock(&self) -> &WordClock<'a, INTENT_CHANNEL_SIZE> {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut WordClock<'a, INTENT_CHANNEL_SIZE> {
        &mut self.clock
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}
