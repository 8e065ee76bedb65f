//! In-memory register blocks for host tests.

use crate::hal::gpio::PortRegisters;
use crate::hal::timer::TimerRegisters;
use crate::hal::usart::{UsartRegisters, UBRRH_MASK};
use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayMs;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

/// Port with a log of every PORTx write.
#[derive(Debug, Default)]
pub struct FakePort {
    pub ddr: u8,
    pub port: u8,
    pub writes: Vec<u8>,
}

impl FakePort {
    pub fn new(ddr: u8, port: u8) -> Self {
        Self {
            ddr,
            port,
            writes: Vec::new(),
        }
    }
}

impl PortRegisters for FakePort {
    fn ddr(&self) -> u8 {
        self.ddr
    }

    fn write_ddr(&mut self, bits: u8) {
        self.ddr = bits;
    }

    fn port(&self) -> u8 {
        self.port
    }

    fn write_port(&mut self, bits: u8) {
        self.port = bits;
        self.writes.push(bits);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Port(u8),
    Delay(u16),
}

/// Ordered record of port writes and delays shared by `TracedPort` and
/// `TracedDelay`.
pub type Trace = Rc<RefCell<Vec<Event>>>;

pub struct TracedPort {
    pub ddr: u8,
    pub port: u8,
    trace: Trace,
}

impl TracedPort {
    pub fn new(port: u8, trace: &Trace) -> Self {
        Self {
            ddr: 0,
            port,
            trace: Rc::clone(trace),
        }
    }
}

impl PortRegisters for TracedPort {
    fn ddr(&self) -> u8 {
        self.ddr
    }

    fn write_ddr(&mut self, bits: u8) {
        self.ddr = bits;
    }

    fn port(&self) -> u8 {
        self.port
    }

    fn write_port(&mut self, bits: u8) {
        self.port = bits;
        self.trace.borrow_mut().push(Event::Port(bits));
    }
}

pub struct TracedDelay {
    trace: Trace,
}

impl TracedDelay {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: Rc::clone(trace),
        }
    }
}

impl DelayMs<u16> for TracedDelay {
    fn delay_ms(&mut self, ms: u16) {
        self.trace.borrow_mut().push(Event::Delay(ms));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsartWrite {
    Ubrr { high: u8, low: u8 },
    Ucsrc(u8),
    Ucsrb(u8),
}

#[derive(Debug, Default)]
pub struct FakeUsart {
    pub ubrrh: u8,
    pub ubrrl: u8,
    pub ucsrb: u8,
    pub ucsrc: u8,
    pub writes: Vec<UsartWrite>,
}

impl FakeUsart {
    /// Every writable bit set, as if a previous configuration left the
    /// transmitter and interrupts on.
    pub fn dirty() -> Self {
        Self {
            ubrrh: 0x0F,
            ubrrl: 0xFF,
            ucsrb: 0xFF,
            ucsrc: 0xFF,
            writes: Vec::new(),
        }
    }
}

impl UsartRegisters for FakeUsart {
    fn write_ubrr(&mut self, high: u8, low: u8) {
        let high = high & UBRRH_MASK;
        self.ubrrh = high;
        self.ubrrl = low;
        self.writes.push(UsartWrite::Ubrr { high, low });
    }

    fn write_ucsrc(&mut self, bits: u8) {
        self.ucsrc = bits;
        self.writes.push(UsartWrite::Ucsrc(bits));
    }

    fn write_ucsrb(&mut self, bits: u8) {
        self.ucsrb = bits;
        self.writes.push(UsartWrite::Ucsrb(bits));
    }
}

/// Timer0 whose counter advances by one on every read while a clock is
/// selected.
#[derive(Debug, Default)]
pub struct FakeTimer {
    pub tccra: u8,
    pub tccrb: u8,
    pub tcnt: Cell<u8>,
    pub prescalers: Vec<u8>,
    pub counter_resets: u32,
    pub ticks_elapsed: Cell<u32>,
}

impl TimerRegisters for FakeTimer {
    fn write_tccra(&mut self, bits: u8) {
        self.tccra = bits;
    }

    fn write_tccrb(&mut self, bits: u8) {
        self.tccrb = bits;
        self.prescalers.push(bits);
    }

    fn counter(&self) -> u8 {
        if self.tccrb & 0x07 != 0 {
            self.tcnt.set(self.tcnt.get().wrapping_add(1));
            self.ticks_elapsed.set(self.ticks_elapsed.get() + 1);
        }
        self.tcnt.get()
    }

    fn write_counter(&mut self, value: u8) {
        if value == 0 {
            self.counter_resets += 1;
        }
        self.tcnt.set(value);
    }
}

/// `uWrite` sink collecting output into a `String`.
#[derive(Debug, Default)]
pub struct Sink(pub String);

impl ufmt::uWrite for Sink {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.0.push_str(s);
        Ok(())
    }
}
