use crate::config::BLINK_HALF_PERIOD_MS;
use crate::hal::gpio::{Levels, Output, Pin, PinMode, PortRegisters};
use embedded_hal::blocking::delay::DelayMs;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    On,
    Off,
}

impl Phase {
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Phase::On => Phase::Off,
            Phase::Off => Phase::On,
        }
    }
}

/// Drives one port pin high and low for `BLINK_HALF_PERIOD_MS` each.
///
/// The port is sampled once when the blinker is built. Every later write is
/// a full-register store of one of the two precomputed [`Levels`], so the
/// other pins of the port keep the values they had at that moment.
pub struct Blinker<R, D, const N: u8> {
    led: Pin<R, N, Output>,
    levels: Levels,
    delay: D,
    phase: Phase,
}

impl<R, D, const N: u8> Blinker<R, D, N>
where
    R: PortRegisters,
    D: DelayMs<u16>,
{
    /// Makes the pin an output and captures the port. Global interrupts must
    /// already be off.
    pub fn new<MODE: PinMode>(pin: Pin<R, N, MODE>, delay: D) -> Self {
        let led = pin.into_output();
        let levels = led.levels();
        Self {
            led,
            levels,
            delay,
            phase: Phase::On,
        }
    }

    pub fn levels(&self) -> Levels {
        self.levels
    }

    /// Phase the next `step` will drive.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Drives the current phase, holds it for half a period, then advances.
    /// Returns the phase that was driven.
    pub fn step(&mut self) -> Phase {
        let driven = self.phase;
        let bits = match driven {
            Phase::On => self.levels.on,
            Phase::Off => self.levels.off,
        };
        self.led.write_port(bits);
        self.delay.delay_ms(BLINK_HALF_PERIOD_MS);
        self.phase = driven.next();
        driven
    }

    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }

    pub fn release(self) -> (Pin<R, N, Output>, D) {
        (self.led, self.delay)
    }
}
