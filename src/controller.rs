use embassy_time::Instant;
use embedded_hal::{delay::DelayNs, digital::InputPin};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::effect::{FlickerConfig, FlickerEffect, RainbowConfig, RainbowEffect, SweepOutcome};
use crate::strip::{DEFAULT_BRIGHTNESS, LedStrip};
use crate::switches::{Mode, SwitchPolicy, SwitchReader};
use crate::{Clock, OutputDriver};

/// Configuration for the menorah controller
#[derive(Debug, Clone)]
pub struct MenorahConfig {
    /// Global strip brightness, applied once at startup
    pub brightness: u8,
    /// Mapping from candle switches to lit candles
    pub switch_policy: SwitchPolicy,
    /// Mode assumed before the first switch poll
    pub initial_mode: Mode,
    pub flicker: FlickerConfig,
    pub rainbow: RainbowConfig,
}

impl Default for MenorahConfig {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            switch_policy: SwitchPolicy::default(),
            initial_mode: Mode::default(),
            flicker: FlickerConfig::default(),
            rainbow: RainbowConfig::default(),
        }
    }
}

/// Result of a single dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Flicker ran; `ticked` is `false` if the time gate was closed
    Flicker { ticked: bool },
    /// A rainbow sweep ran to completion or was aborted
    Rainbow(SweepOutcome),
}

/// Menorah controller - owns all state and the hardware seams
///
/// `P` are the switch inputs, `O` the LED driver, `C` the time source and
/// `D` the delay used between rainbow frames.
pub struct Menorah<P, O, C, D, const N: usize>
where
    P: InputPin,
    O: OutputDriver,
    C: Clock,
    D: DelayNs,
{
    // External dependencies
    clock: C,
    delay: D,
    brightness: u8,

    // Internal state
    switches: SwitchReader<P, N>,
    strip: LedStrip<O, N>,

    // Animations
    flicker: FlickerEffect<N>,
    rainbow: RainbowEffect<N>,
}

impl<P, O, C, D, const N: usize> Menorah<P, O, C, D, N>
where
    P: InputPin,
    O: OutputDriver,
    C: Clock,
    D: DelayNs,
{
    /// Create a new controller
    ///
    /// Candle `i` is wired to `candle_pins[i]` and drives strip pixel `i`.
    /// `seed` feeds the flicker randomness, see
    /// [`seed_from_noise`](crate::random::seed_from_noise).
    pub fn new(
        config: MenorahConfig,
        candle_pins: [P; N],
        mode_pin: P,
        driver: O,
        clock: C,
        delay: D,
        seed: u64,
    ) -> Self {
        Self {
            clock,
            delay,
            brightness: config.brightness,
            switches: SwitchReader::new(
                candle_pins,
                mode_pin,
                config.initial_mode,
                config.switch_policy,
            ),
            strip: LedStrip::new(driver),
            flicker: FlickerEffect::new(config.flicker, seed),
            rainbow: RainbowEffect::new(config.rainbow),
        }
    }

    /// Apply the global brightness, read the switches once and flush a
    /// blank frame
    pub fn begin(&mut self) {
        self.strip.set_brightness(self.brightness);
        self.switches.read();
        self.strip.clear();
        self.strip.show();
        #[cfg(feature = "esp32-log")]
        println!(
            "[Menorah.begin] {} candles, mode {}, brightness {}",
            N,
            self.switches.mode().as_str(),
            self.strip.brightness()
        );
    }

    /// Dispatch to the animation for the current mode once
    pub fn step(&mut self) -> StepOutcome {
        match self.switches.mode() {
            Mode::Flicker => StepOutcome::Flicker {
                ticked: self.flicker_tick(),
            },
            Mode::Rainbow => StepOutcome::Rainbow(self.rainbow_sweep()),
        }
    }

    /// Main loop
    pub fn run(&mut self) -> ! {
        self.begin();
        loop {
            self.step();
        }
    }

    /// Run one flicker tick if it is due
    pub fn flicker_tick(&mut self) -> bool {
        let now: Instant = self.clock.now();
        self.flicker.tick(now, &mut self.switches, &mut self.strip)
    }

    /// Run one rainbow sweep
    pub fn rainbow_sweep(&mut self) -> SweepOutcome {
        self.rainbow
            .sweep(&mut self.switches, &mut self.strip, &mut self.delay)
    }

    pub const fn mode(&self) -> Mode {
        self.switches.mode()
    }

    pub const fn switches(&self) -> &SwitchReader<P, N> {
        &self.switches
    }

    pub const fn strip(&self) -> &LedStrip<O, N> {
        &self.strip
    }
}
