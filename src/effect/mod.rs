//! Menorah animations
//!
//! Each animation re-polls the switches itself, so candles can be toggled
//! and the mode changed while it runs.

mod flicker;
mod rainbow;

pub use flicker::{FlickerConfig, FlickerEffect, FlickerState};
pub use rainbow::{RainbowConfig, RainbowEffect, SweepOutcome, pixel_hue_offset};
