//! Tick throttling
//!
//! A minimal time gate for cooperative loops that are polled as fast as
//! possible. It does not try to catch up on missed ticks.

use embassy_time::{Duration, Instant};

/// Default minimum spacing between accepted ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Accepts a tick once at least `interval` has passed since the last one.
///
/// # Usage
///
/// ```ignore
/// let mut throttle = Throttle::new(Duration::from_millis(1));
///
/// loop {
///     if throttle.ready(clock.now()) {
///         // do the work for this tick
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Throttle {
    last_tick: Instant,
    interval: Duration,
}

impl Throttle {
    /// Create a throttle whose reference point is the zero instant.
    pub const fn new(interval: Duration) -> Self {
        Self {
            last_tick: Instant::from_millis(0),
            interval,
        }
    }

    /// Returns `true` and records `now` if the tick is due.
    ///
    /// An instant earlier than the last accepted tick is never due.
    pub fn ready(&mut self, now: Instant) -> bool {
        match now.checked_duration_since(self.last_tick) {
            Some(elapsed) if elapsed >= self.interval => {
                self.last_tick = now;
                true
            }
            _ => false,
        }
    }

    /// Instant of the last accepted tick
    pub const fn last_tick(&self) -> Instant {
        self.last_tick
    }
}
