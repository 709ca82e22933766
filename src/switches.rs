//! Candle switches and the mode selector
//!
//! Every input is wired with a pull-up: an open switch reads high and a
//! closed switch (shorted to ground) reads low.

use embedded_hal::digital::InputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Animation mode selected by the mode switch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Simulated candle flame
    #[default]
    Flicker,
    /// Hue gradient moving along the strip
    Rainbow,
}

impl Mode {
    /// Mode selected by the switch position
    pub const fn from_switch(closed: bool) -> Self {
        if closed { Self::Rainbow } else { Self::Flicker }
    }

    /// The other mode
    pub const fn toggled(self) -> Self {
        match self {
            Self::Flicker => Self::Rainbow,
            Self::Rainbow => Self::Flicker,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flicker => "flicker",
            Self::Rainbow => "rainbow",
        }
    }
}

/// How candle switch readings map to the lit state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwitchPolicy {
    /// A candle is lit exactly when its switch is closed
    #[default]
    Honor,
    /// Every candle is lit whatever its switch reads
    ForceLit,
}

/// One candle position: its strip index, input line and lit state
#[derive(Debug)]
pub struct Candle<P> {
    order: usize,
    pin: P,
    lit: bool,
}

impl<P: InputPin> Candle<P> {
    pub const fn new(order: usize, pin: P) -> Self {
        Self {
            order,
            pin,
            lit: false,
        }
    }

    /// Index of this candle on the LED strip
    pub const fn order(&self) -> usize {
        self.order
    }

    pub const fn is_lit(&self) -> bool {
        self.lit
    }

    /// Sample the switch and update the lit state
    fn poll(&mut self, policy: SwitchPolicy) {
        self.lit = match policy {
            SwitchPolicy::Honor => is_closed(&mut self.pin),
            SwitchPolicy::ForceLit => {
                // Sampled anyway, the reading is discarded
                let _ = is_closed(&mut self.pin);
                true
            }
        };
    }
}

/// Reads all candle switches and the mode switch
pub struct SwitchReader<P: InputPin, const N: usize> {
    candles: [Candle<P>; N],
    mode_pin: P,
    mode: Mode,
    policy: SwitchPolicy,
}

impl<P: InputPin, const N: usize> SwitchReader<P, N> {
    /// Create a reader with candle `i` on strip index `i`
    ///
    /// All candles start unlit and the mode starts as `initial_mode` until
    /// the first [`Self::read`].
    pub fn new(pins: [P; N], mode_pin: P, initial_mode: Mode, policy: SwitchPolicy) -> Self {
        let mut order = 0;
        let candles = pins.map(|pin| {
            let candle = Candle::new(order, pin);
            order += 1;
            candle
        });

        Self {
            candles,
            mode_pin,
            mode: initial_mode,
            policy,
        }
    }

    /// Poll every switch
    ///
    /// Returns `true` only when the mode switch moved since the last poll.
    pub fn read(&mut self) -> bool {
        for candle in &mut self.candles {
            candle.poll(self.policy);
        }

        let selected = Mode::from_switch(is_closed(&mut self.mode_pin));
        if selected == self.mode {
            return false;
        }

        self.mode = self.mode.toggled();
        #[cfg(feature = "esp32-log")]
        println!("[SwitchReader.read] mode changed to {}", self.mode.as_str());
        true
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn candles(&self) -> &[Candle<P>; N] {
        &self.candles
    }

    /// Lit state of candle `index`; unknown candles are unlit
    pub fn is_lit(&self, index: usize) -> bool {
        self.candles.get(index).is_some_and(Candle::is_lit)
    }
}

/// A failed read counts as an open switch
fn is_closed<P: InputPin>(pin: &mut P) -> bool {
    pin.is_low().unwrap_or(false)
}
