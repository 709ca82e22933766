#![no_std]

pub mod color;
pub mod controller;
pub mod effect;
pub mod random;
pub mod strip;
pub mod switches;
pub mod throttle;

pub use controller::{Menorah, MenorahConfig, StepOutcome};
pub use effect::{FlickerConfig, FlickerState, RainbowConfig, SweepOutcome};
pub use random::seed_from_noise;
pub use strip::LedStrip;
pub use switches::{Candle, Mode, SwitchPolicy, SwitchReader};
pub use throttle::Throttle;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Number of candles on a menorah
pub const CANDLE_COUNT: usize = 9;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// Monotonic time source
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Clock backed by the `embassy-time` driver of the target
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Source of analog noise, typically an unconnected ADC input
pub trait AnalogNoise {
    /// Take one raw sample
    fn sample(&mut self) -> u16;
}
