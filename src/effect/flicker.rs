//! Candle flicker effect
//!
//! Each flame holds a target color that is re-randomized whenever its
//! countdown runs out. The jitter is subtracted from every channel, so a
//! flame only ever dims from its base color.

use core::ops::Range;

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

use crate::{
    OutputDriver,
    color::{Rgb, swap_red_green},
    random::{FlickerRng, draw, rng_from_seed},
    strip::LedStrip,
    switches::SwitchReader,
    throttle::{DEFAULT_TICK_INTERVAL, Throttle},
};

/// Warm red/yellow flame color every flicker starts from
pub const DEFAULT_BASE_COLOR: Rgb = Rgb {
    r: 226,
    g: 121,
    b: 35,
};

const DEFAULT_DELAY_TICKS: Range<u8> = 0..50;
const DEFAULT_MAGNITUDE: Range<u8> = 0..40;

/// Configuration for the flicker effect
#[derive(Debug, Clone)]
pub struct FlickerConfig {
    /// Base flame color
    pub base: Rgb,
    /// Ticks until the next re-randomization
    pub delay: Range<u8>,
    /// Amount subtracted from every channel of the base color
    pub magnitude: Range<u8>,
    /// Minimum time between ticks
    pub tick_interval: Duration,
}

impl Default for FlickerConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_COLOR,
            delay: DEFAULT_DELAY_TICKS,
            magnitude: DEFAULT_MAGNITUDE,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

/// Flame state of a single candle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlickerState {
    red: u8,
    green: u8,
    blue: u8,
    delay_remaining: i16,
    magnitude: u8,
    elapsed: u32,
}

impl FlickerState {
    /// Flame at `base` color, due for randomization on the next tick
    pub const fn new(base: Rgb) -> Self {
        Self {
            red: base.r,
            green: base.g,
            blue: base.b,
            delay_remaining: 0,
            magnitude: 0,
            elapsed: 0,
        }
    }

    /// Current flame color in (red, green, blue) order
    pub const fn color(&self) -> Rgb {
        Rgb {
            r: self.red,
            g: self.green,
            b: self.blue,
        }
    }

    /// Ticks left before the next randomization
    pub const fn delay_remaining(&self) -> i16 {
        self.delay_remaining
    }

    /// Jitter drawn at the last randomization
    pub const fn magnitude(&self) -> u8 {
        self.magnitude
    }

    /// Ticks since the last randomization
    pub const fn elapsed(&self) -> u32 {
        self.elapsed
    }

    const fn is_due(&self) -> bool {
        self.delay_remaining <= 0
    }

    /// Draw a new countdown and jitter, then dim the base color by it
    fn rekindle(&mut self, config: &FlickerConfig, rng: &mut FlickerRng) {
        self.delay_remaining = i16::from(draw(rng, &config.delay));
        self.magnitude = draw(rng, &config.magnitude);
        self.red = config.base.r.saturating_sub(self.magnitude);
        self.green = config.base.g.saturating_sub(self.magnitude);
        self.blue = config.base.b.saturating_sub(self.magnitude);
        self.elapsed = 0;
    }

    fn count_down(&mut self) {
        self.delay_remaining = self.delay_remaining.saturating_sub(1);
        self.elapsed = self.elapsed.saturating_add(1);
    }
}

/// Flicker animation over `N` candles
#[derive(Debug, Clone)]
pub struct FlickerEffect<const N: usize> {
    config: FlickerConfig,
    flames: [FlickerState; N],
    throttle: Throttle,
    rng: FlickerRng,
}

impl<const N: usize> FlickerEffect<N> {
    /// Create the effect with every flame at the base color
    pub fn new(config: FlickerConfig, seed: u64) -> Self {
        Self {
            flames: [FlickerState::new(config.base); N],
            throttle: Throttle::new(config.tick_interval),
            rng: rng_from_seed(seed),
            config,
        }
    }

    pub const fn flames(&self) -> &[FlickerState; N] {
        &self.flames
    }

    /// Run one throttled tick
    ///
    /// Returns `false` without touching anything if the tick is not due yet.
    /// Otherwise polls the switches, updates every flame and flushes one
    /// frame. Lit flames are pushed in (green, red, blue) order.
    pub fn tick<P: InputPin, O: OutputDriver>(
        &mut self,
        now: Instant,
        switches: &mut SwitchReader<P, N>,
        strip: &mut LedStrip<O, N>,
    ) -> bool {
        if !self.throttle.ready(now) {
            return false;
        }

        switches.read();

        for (flame, candle) in self.flames.iter_mut().zip(switches.candles()) {
            if flame.is_due() {
                flame.rekindle(&self.config, &mut self.rng);
            }

            let index = candle.order();
            if candle.is_lit() {
                strip.set_pixel(index, swap_red_green(flame.color()));
            } else {
                strip.set_pixel_off(index);
            }

            flame.count_down();
        }

        strip.show();
        true
    }
}
