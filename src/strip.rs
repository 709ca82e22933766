//! Frame buffer in front of the LED driver
//!
//! Pixels are staged here and only reach the hardware on [`LedStrip::show`],
//! so the driver never sees a partially updated frame.

use crate::OutputDriver;
use crate::color::{OFF, Rgb};

/// Default global brightness applied at startup
pub const DEFAULT_BRIGHTNESS: u8 = 50;

/// Buffered LED strip with global brightness
pub struct LedStrip<O: OutputDriver, const N: usize> {
    driver: O,
    frame_buffer: [Rgb; N],
    brightness: u8,
}

impl<O: OutputDriver, const N: usize> LedStrip<O, N> {
    /// Create a strip with every pixel off at full brightness
    pub const fn new(driver: O) -> Self {
        Self {
            driver,
            frame_buffer: [OFF; N],
            brightness: u8::MAX,
        }
    }

    /// Set the global brightness (0-255) used by [`Self::show`]
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Stage a color for one pixel
    ///
    /// Indices past the end of the strip are ignored.
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.frame_buffer.get_mut(index) {
            *pixel = color;
        }
    }

    /// Stage one pixel as off
    pub fn set_pixel_off(&mut self, index: usize) {
        self.set_pixel(index, OFF);
    }

    /// Stage every pixel as off
    pub fn clear(&mut self) {
        self.frame_buffer = [OFF; N];
    }

    /// Staged pixels, before brightness scaling
    pub const fn pixels(&self) -> &[Rgb; N] {
        &self.frame_buffer
    }

    /// Scale the staged frame by the global brightness and write it out
    pub fn show(&mut self) {
        let mut frame = [OFF; N];
        let scaled = smart_leds::brightness(self.frame_buffer.iter().copied(), self.brightness);
        for (out, pixel) in frame.iter_mut().zip(scaled) {
            *out = pixel;
        }
        self.driver.write(&frame);
    }
}
