//! Host fakes for the menorah hardware seams

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin};
use menorah_lights::{
    CANDLE_COUNT, Clock, Instant, Menorah, MenorahConfig, OutputDriver, Rgb, SwitchPolicy,
    SwitchReader,
};

pub const SEED: u64 = 0x5eed_1234;

/// Switch line shared between the test and the code under test
#[derive(Debug, Clone, Default)]
pub struct FakePin {
    closed: Rc<Cell<bool>>,
    reads: Rc<Cell<u32>>,
}

impl FakePin {
    pub fn set_closed(&self, closed: bool) {
        self.closed.set(closed);
    }

    pub fn toggle(&self) {
        self.closed.set(!self.closed.get());
    }

    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl InputPin for FakePin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.reads.set(self.reads.get() + 1);
        Ok(!self.closed.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.closed.get())
    }
}

/// Pin whose reads always fail
#[derive(Debug, Clone, Copy, Default)]
pub struct BrokenPin;

#[derive(Debug, Clone, Copy)]
pub struct BrokenPinError;

impl embedded_hal::digital::Error for BrokenPinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl ErrorType for BrokenPin {
    type Error = BrokenPinError;
}

impl InputPin for BrokenPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(BrokenPinError)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(BrokenPinError)
    }
}

/// The nine candle switches plus the mode switch
#[derive(Debug, Clone, Default)]
pub struct SwitchBank {
    pub candles: [FakePin; CANDLE_COUNT],
    pub mode: FakePin,
}

impl SwitchBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_all(&self, closed: bool) {
        for pin in &self.candles {
            pin.set_closed(closed);
        }
    }

    pub fn pins(&self) -> [FakePin; CANDLE_COUNT] {
        self.candles.clone()
    }

    pub fn reader(&self, policy: SwitchPolicy) -> SwitchReader<FakePin, CANDLE_COUNT> {
        SwitchReader::new(self.pins(), self.mode.clone(), Default::default(), policy)
    }
}

/// Millisecond clock advanced by hand
#[derive(Debug, Clone, Default)]
pub struct FakeClock {
    millis: Rc<Cell<u64>>,
}

impl FakeClock {
    pub fn set(&self, millis: u64) {
        self.millis.set(millis);
    }

    pub fn advance(&self, millis: u64) {
        self.millis.set(self.millis.get() + millis);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.millis.get())
    }
}

/// Delay that records every call and can flip a pin after a number of calls
#[derive(Debug, Clone, Default)]
pub struct FakeDelay {
    calls: Rc<Cell<u32>>,
    total_ns: Rc<Cell<u64>>,
    flip: Rc<RefCell<Option<(u32, FakePin)>>>,
}

impl FakeDelay {
    /// Toggle `pin` right after the `after`-th delay
    pub fn toggle_after(&self, after: u32, pin: FakePin) {
        *self.flip.borrow_mut() = Some((after, pin));
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns.get() / 1_000_000
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls.set(self.calls.get() + 1);
        self.total_ns.set(self.total_ns.get() + u64::from(ns));
        if let Some((after, pin)) = self.flip.borrow().as_ref() {
            if self.calls.get() == *after {
                pin.toggle();
            }
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay_ns(ms.saturating_mul(1_000_000));
    }
}

/// Driver that keeps every frame it was asked to write
#[derive(Debug, Clone, Default)]
pub struct RecordingDriver {
    frames: Rc<RefCell<Vec<Vec<Rgb>>>>,
}

impl RecordingDriver {
    pub fn frames(&self) -> Vec<Vec<Rgb>> {
        self.frames.borrow().clone()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn last_frame(&self) -> Option<Vec<Rgb>> {
        self.frames.borrow().last().cloned()
    }
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.borrow_mut().push(colors.to_vec());
    }
}

pub type TestMenorah = Menorah<FakePin, RecordingDriver, FakeClock, FakeDelay, CANDLE_COUNT>;

/// Test rig: the controller plus handles to all of its fakes
pub struct Rig {
    pub menorah: TestMenorah,
    pub switches: SwitchBank,
    pub driver: RecordingDriver,
    pub clock: FakeClock,
    pub delay: FakeDelay,
}

/// Full brightness so recorded frames equal staged colors
pub fn full_brightness_config() -> MenorahConfig {
    MenorahConfig {
        brightness: 255,
        ..MenorahConfig::default()
    }
}

pub fn rig(config: MenorahConfig) -> Rig {
    let switches = SwitchBank::new();
    let driver = RecordingDriver::default();
    let clock = FakeClock::default();
    let delay = FakeDelay::default();
    let menorah = Menorah::new(
        config,
        switches.pins(),
        switches.mode.clone(),
        driver.clone(),
        clock.clone(),
        delay.clone(),
        SEED,
    );
    Rig {
        menorah,
        switches,
        driver,
        clock,
        delay,
    }
}

pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };
