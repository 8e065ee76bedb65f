//! `ufmt` renderings of firmware state for a caller-supplied console.

use crate::config::{BLINK_HALF_PERIOD_MS, CPU_FREQ_HZ, LED_BIT, UART_BAUD, UBRR_9600};
use crate::drivers::blink::Phase;
use crate::hal::gpio::Levels;
use ufmt::{uDisplay, uWrite, uwrite, uwriteln, Formatter};

const HEX_DIGITS: &str = "0123456789ABCDEF";

/// Register value printed as `0xNN`
#[derive(Clone, Copy)]
pub struct Hex(pub u8);

impl uDisplay for Hex {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        let hi = usize::from(self.0 >> 4);
        let lo = usize::from(self.0 & 0xF);
        f.write_str("0x")?;
        f.write_str(&HEX_DIGITS[hi..=hi])?;
        f.write_str(&HEX_DIGITS[lo..=lo])
    }
}

impl uDisplay for Levels {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uwrite!(f, "on={} off={}", Hex(self.on), Hex(self.off))
    }
}

impl uDisplay for Phase {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            Phase::On => f.write_str("ON"),
            Phase::Off => f.write_str("OFF"),
        }
    }
}

/// Writes the build configuration as one line.
pub fn report_config<W: uWrite + ?Sized>(w: &mut W) -> Result<(), W::Error> {
    uwriteln!(
        w,
        "[CFG] f_cpu={} led=PB{} half_period={}ms baud={} ubrr={}",
        CPU_FREQ_HZ,
        LED_BIT,
        BLINK_HALF_PERIOD_MS,
        UART_BAUD,
        UBRR_9600
    )
}

/// Writes the blink levels and the phase about to be driven.
pub fn report_blink<W: uWrite + ?Sized>(
    w: &mut W,
    levels: &Levels,
    phase: Phase,
) -> Result<(), W::Error> {
    uwriteln!(w, "[DBG] led {} next={}", levels, phase)
}
