//! Rainbow sweep effect
//!
//! Spreads one full hue wheel across the strip and rotates it a fixed
//! number of times. The sweep owns the loop for its whole duration and
//! returns early if the mode switch moves.

use embedded_hal::{delay::DelayNs, digital::InputPin};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    OutputDriver,
    color::{HUE_WHEEL, Hsv, gamma32, hsv2rgb, wheel_hue},
    strip::LedStrip,
    switches::SwitchReader,
};

const DEFAULT_FRAME_DELAY_MS: u32 = 10;
const DEFAULT_CYCLES: u32 = 5;
const DEFAULT_HUE_STEP: u32 = 256;

/// Configuration for the rainbow effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainbowConfig {
    /// Pause after every flushed frame
    pub frame_delay_ms: u32,
    /// Full wheel rotations per sweep
    pub cycles: u32,
    /// Hue advance per frame (wheel is 65536 units, 256 per 8-bit hue step)
    pub hue_step: u32,
    /// Saturation (0-255)
    pub saturation: u8,
    /// Brightness value (0-255)
    pub value: u8,
}

impl Default for RainbowConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            cycles: DEFAULT_CYCLES,
            hue_step: DEFAULT_HUE_STEP,
            saturation: 255,
            value: 255,
        }
    }
}

/// How a sweep ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepOutcome {
    /// Every frame was shown
    Completed { frames: u32 },
    /// The mode switch moved before the next frame
    Aborted { frames: u32 },
}

impl SweepOutcome {
    /// Number of frames flushed before the sweep ended
    pub const fn frames(self) -> u32 {
        match self {
            Self::Completed { frames } | Self::Aborted { frames } => frames,
        }
    }

    pub const fn is_aborted(self) -> bool {
        matches!(self, Self::Aborted { .. })
    }
}

/// Hue offset of pixel `index` on a strip of `count` pixels
///
/// Pixel 0 has no offset; the last pixel stays short of a full rotation.
#[allow(clippy::cast_possible_truncation)]
pub fn pixel_hue_offset(index: usize, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    (index as u64 * u64::from(HUE_WHEEL) / count as u64) as u32
}

/// Rainbow animation over `N` candles
#[derive(Debug, Clone)]
pub struct RainbowEffect<const N: usize> {
    config: RainbowConfig,
}

impl<const N: usize> Default for RainbowEffect<N> {
    fn default() -> Self {
        Self::new(RainbowConfig::default())
    }
}

impl<const N: usize> RainbowEffect<N> {
    pub const fn new(config: RainbowConfig) -> Self {
        Self { config }
    }

    /// Number of frames in an uninterrupted sweep
    pub fn total_frames(&self) -> u32 {
        let end = self.config.cycles.saturating_mul(HUE_WHEEL);
        end.div_ceil(self.config.hue_step.max(1))
    }

    /// Run a full sweep
    ///
    /// Switches are polled before every frame. A mode change ends the sweep
    /// immediately, leaving the new mode in `switches`.
    pub fn sweep<P: InputPin, O: OutputDriver, D: DelayNs>(
        &self,
        switches: &mut SwitchReader<P, N>,
        strip: &mut LedStrip<O, N>,
        delay: &mut D,
    ) -> SweepOutcome {
        let end = self.config.cycles.saturating_mul(HUE_WHEEL);
        let step = usize::try_from(self.config.hue_step.max(1)).unwrap_or(usize::MAX);
        let mut frames: u32 = 0;

        for first_hue in (0..end).step_by(step) {
            if switches.read() {
                #[cfg(feature = "esp32-log")]
                println!("[RainbowEffect.sweep] aborted after {} frames", frames);
                return SweepOutcome::Aborted { frames };
            }

            self.render(first_hue, switches, strip);
            strip.show();
            delay.delay_ms(self.config.frame_delay_ms);
            frames += 1;
        }

        SweepOutcome::Completed { frames }
    }

    /// Stage one frame with the wheel rotated by `first_hue`
    fn render<P: InputPin, O: OutputDriver>(
        &self,
        first_hue: u32,
        switches: &SwitchReader<P, N>,
        strip: &mut LedStrip<O, N>,
    ) {
        for (i, candle) in switches.candles().iter().enumerate() {
            let index = candle.order();
            if !candle.is_lit() {
                strip.set_pixel_off(index);
                continue;
            }

            let color = gamma32(hsv2rgb(Hsv {
                hue: wheel_hue(first_hue.wrapping_add(pixel_hue_offset(i, N))),
                sat: self.config.saturation,
                val: self.config.value,
            }));
            strip.set_pixel(index, color);
        }
    }
}
