use crate::config::CPU_FREQ_HZ;
use embedded_hal::blocking::delay::DelayMs;

/// Timer/Counter0 registers used for polled delays.
pub trait TimerRegisters {
    fn write_tccra(&mut self, bits: u8);
    fn write_tccrb(&mut self, bits: u8);
    fn counter(&self) -> u8;
    fn write_counter(&mut self, value: u8);
}

const PRESCALER_MASK: u8 = 0x07;

/// Clock select (CS02:0) values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Prescaler {
    Stop = 0,
    Direct = 1,
    Div8 = 2,
    Div64 = 3,
    Div256 = 4,
    Div1024 = 5,
}

pub struct Timer<T> {
    regs: T,
}

impl<T: TimerRegisters> Timer<T> {
    pub fn new(mut regs: T) -> Self {
        // Normal mode, stopped
        regs.write_tccra(0);
        regs.write_tccrb(0);
        regs.write_counter(0);
        Self { regs }
    }

    pub fn start(&mut self, prescaler: Prescaler) {
        self.regs.write_tccrb(prescaler as u8 & PRESCALER_MASK);
    }

    pub fn stop(&mut self) {
        self.regs.write_tccrb(Prescaler::Stop as u8);
    }

    pub fn set_counter(&mut self, value: u8) {
        self.regs.write_counter(value);
    }

    pub fn get_counter(&self) -> u8 {
        self.regs.counter()
    }

    pub fn release(self) -> T {
        self.regs
    }
}

/// Timer0 ticks in one millisecond at prescaler /64 (250 at 16 MHz)
pub const TICKS_PER_MS: u8 = {
    let ticks = CPU_FREQ_HZ / 64 / 1000;
    assert!(ticks > 0 && ticks <= u8::MAX as u32, "clock unsuitable for /64 delay");
    ticks as u8
};

/// Busy-wait delay that polls Timer0. Interrupts are not needed.
///
/// Each millisecond restarts the count from zero, so loop overhead adds a
/// small amount of drift that is not compensated.
pub struct Delay<T> {
    timer: Timer<T>,
}

impl<T: TimerRegisters> Delay<T> {
    pub fn new(regs: T) -> Self {
        Self {
            timer: Timer::new(regs),
        }
    }

    pub fn release(self) -> T {
        self.timer.release()
    }
}

impl<T: TimerRegisters> DelayMs<u16> for Delay<T> {
    fn delay_ms(&mut self, ms: u16) {
        self.timer.set_counter(0);
        self.timer.start(Prescaler::Div64);

        for _ in 0..ms {
            while self.timer.get_counter() < TICKS_PER_MS {}
            self.timer.set_counter(0);
        }

        self.timer.stop();
    }
}

impl<T: TimerRegisters> DelayMs<u8> for Delay<T> {
    fn delay_ms(&mut self, ms: u8) {
        DelayMs::<u16>::delay_ms(self, u16::from(ms));
    }
}

#[cfg(target_arch = "avr")]
impl TimerRegisters for avr_device::atmega328p::TC0 {
    #[inline]
    fn write_tccra(&mut self, bits: u8) {
        self.tccr0a.write(|w| unsafe { w.bits(bits) });
    }

    #[inline]
    fn write_tccrb(&mut self, bits: u8) {
        self.tccr0b.write(|w| unsafe { w.bits(bits) });
    }

    #[inline]
    fn counter(&self) -> u8 {
        self.tcnt0.read().bits()
    }

    #[inline]
    fn write_counter(&mut self, value: u8) {
        self.tcnt0.write(|w| unsafe { w.bits(value) });
    }
}
