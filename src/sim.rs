//! Host-side stand-ins for the platform used by the unit tests: a virtual
//! clock, a delay that advances it, and a data line that plays back a
//! sensor waveform against it.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use crate::clock::Clock;

/// Virtual time spent by one read of the line.
const POLL_NS: u64 = 1_000;

/// Segment length for a level that never changes.
pub const FOREVER: u64 = u64::MAX;

/// Shared virtual clock with nanosecond resolution.
#[derive(Clone, Default)]
pub struct SimClock {
    ns: Rc<Cell<u64>>,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_us(&self) -> u64 {
        self.ns.get() / 1_000
    }

    pub fn advance_ns(&self, ns: u64) {
        self.ns.set(self.ns.get() + ns);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance_ns(ms * 1_000_000);
    }

    /// Jumps to an absolute time, backwards included.
    pub fn set_ms(&self, ms: u64) {
        self.ns.set(ms * 1_000_000);
    }
}

impl Clock for SimClock {
    fn now_ms(&mut self) -> u32 {
        (self.ns.get() / 1_000_000) as u32
    }

    fn now_us(&mut self) -> u32 {
        (self.ns.get() / 1_000) as u32
    }
}

/// Delay that only advances the virtual clock.
pub struct SimDelay(SimClock);

impl SimDelay {
    pub fn new(clock: &SimClock) -> Self {
        SimDelay(clock.clone())
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.advance_ns(ns as u64);
    }
}

/// Clock that moves forward by a fixed step every time microseconds are read.
pub struct StepClock {
    now_us: u32,
    step_us: u32,
}

impl StepClock {
    pub fn new(step_us: u32) -> Self {
        Self::starting_at(0, step_us)
    }

    pub fn starting_at(now_us: u32, step_us: u32) -> Self {
        StepClock { now_us, step_us }
    }
}

impl Clock for StepClock {
    fn now_ms(&mut self) -> u32 {
        self.now_us / 1_000
    }

    fn now_us(&mut self) -> u32 {
        let now = self.now_us;
        self.now_us = now.wrapping_add(self.step_us);
        now
    }
}

struct LineState {
    waveform: Vec<(bool, u64)>,
    driven_low: bool,
    released_at_ns: Option<u64>,
    requests: u32,
}

/// Open-drain data line with a simulated sensor attached.
///
/// Every time the host ends a start request (drives the line low, then
/// releases it) the sensor plays `waveform` from the beginning. Each entry is
/// a level and how long it lasts in microseconds. Outside the waveform the
/// pull-up keeps the line high.
#[derive(Clone)]
pub struct SimLine {
    clock: SimClock,
    state: Rc<RefCell<LineState>>,
}

impl SimLine {
    pub fn new(clock: &SimClock, waveform: Vec<(bool, u64)>) -> Self {
        SimLine {
            clock: clock.clone(),
            state: Rc::new(RefCell::new(LineState {
                waveform,
                driven_low: false,
                released_at_ns: None,
                requests: 0,
            })),
        }
    }

    /// Replaces what the sensor answers to the next request.
    pub fn set_waveform(&self, waveform: Vec<(bool, u64)>) {
        self.state.borrow_mut().waveform = waveform;
    }

    /// Number of start requests the host has sent.
    pub fn requests(&self) -> u32 {
        self.state.borrow().requests
    }

    fn level(&self) -> bool {
        self.clock.advance_ns(POLL_NS);
        let state = self.state.borrow();

        if state.driven_low {
            return false;
        }
        let Some(released_at_ns) = state.released_at_ns else {
            return true;
        };

        let mut offset_us = (self.clock.ns.get() - released_at_ns) / 1_000;
        for &(level, duration_us) in &state.waveform {
            if offset_us < duration_us {
                return level;
            }
            offset_us -= duration_us;
        }
        true
    }
}

impl ErrorType for SimLine {
    type Error = Infallible;
}

impl InputPin for SimLine {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level())
    }
}

impl OutputPin for SimLine {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        state.driven_low = true;
        state.requests += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        if state.driven_low {
            state.driven_low = false;
            state.released_at_ns = Some(self.clock.ns.get());
        }
        Ok(())
    }
}

/// Sensor response preceding the data bits: ~20us of released line, then
/// 80us low and 80us high.
pub fn handshake() -> Vec<(bool, u64)> {
    vec![(true, 20), (false, 80), (true, 80)]
}

/// Complete sensor answer carrying `bytes`, MSB first.
pub fn frame(bytes: [u8; 5]) -> Vec<(bool, u64)> {
    let mut waveform = handshake();
    for byte in bytes {
        for i in (0..8).rev() {
            let high_us = if (byte >> i) & 1 == 1 { 70 } else { 26 };
            waveform.push((false, 50));
            waveform.push((true, high_us));
        }
    }
    waveform.push((false, 50));
    waveform
}
