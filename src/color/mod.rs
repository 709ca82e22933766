use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use smart_leds::hsv::hsv2rgb;

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Fully dark pixel
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Number of hue units in one full wheel rotation
///
/// The 8-bit hue of [`Hsv`] is the top byte of this 16-bit wheel.
pub const HUE_WHEEL: u32 = 65_536;

/// Convert a position on the 16-bit wheel into an 8-bit hue
///
/// Positions past one rotation wrap around.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn wheel_hue(position: u32) -> u8 {
    (position >> 8) as u8
}

/// Gamma-correct a color for perceptually even LED output
pub fn gamma32(color: Rgb) -> Rgb {
    smart_leds::gamma(core::iter::once(color))
        .next()
        .unwrap_or(color)
}

/// Swap the red and green channels
///
/// Used when a color is pushed in (green, red, blue) order.
#[inline]
pub const fn swap_red_green(color: Rgb) -> Rgb {
    Rgb {
        r: color.g,
        g: color.r,
        b: color.b,
    }
}
