use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{OutputPin, ToggleableOutputPin};

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

/// Direction (DDRx) and output (PORTx) registers of one 8-bit port.
pub trait PortRegisters {
    fn ddr(&self) -> u8;
    fn write_ddr(&mut self, bits: u8);
    fn port(&self) -> u8;
    fn write_port(&mut self, bits: u8);
}

/// Whole-port values that drive one pin high or low and leave the other
/// seven bits as they were captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Levels {
    pub on: u8,
    pub off: u8,
}

impl Levels {
    #[inline]
    pub const fn new(captured: u8, mask: u8) -> Self {
        Self {
            on: captured | mask,
            off: captured & !mask,
        }
    }
}

/// Pin `N` of a port. Holds the port's register block.
#[derive(Debug)]
pub struct Pin<R, const N: u8, MODE> {
    regs: R,
    _mode: PhantomData<MODE>,
}

impl<R: PortRegisters, const N: u8> Pin<R, N, Input> {
    /// Pins come out of reset as inputs.
    pub fn new(regs: R) -> Self {
        Pin {
            regs,
            _mode: PhantomData,
        }
    }
}

impl<R: PortRegisters, const N: u8, MODE: PinMode> Pin<R, N, MODE> {
    /// Bit of this pin within the port. Using a pin past bit 7 fails to
    /// compile:
    ///
    /// ```compile_fail,E0080
    /// use light_runner::hal::gpio::{Input, Pin, PortRegisters};
    ///
    /// struct Regs(u8, u8);
    ///
    /// impl PortRegisters for Regs {
    ///     fn ddr(&self) -> u8 { self.0 }
    ///     fn write_ddr(&mut self, bits: u8) { self.0 = bits; }
    ///     fn port(&self) -> u8 { self.1 }
    ///     fn write_port(&mut self, bits: u8) { self.1 = bits; }
    /// }
    ///
    /// let pin = Pin::<_, 8, Input>::new(Regs(0, 0)).into_output();
    /// let _ = pin.levels();
    /// ```
    ///
    /// The same program with bit 7 builds:
    ///
    /// ```
    /// use light_runner::hal::gpio::{Input, Pin, PortRegisters};
    ///
    /// struct Regs(u8, u8);
    ///
    /// impl PortRegisters for Regs {
    ///     fn ddr(&self) -> u8 { self.0 }
    ///     fn write_ddr(&mut self, bits: u8) { self.0 = bits; }
    ///     fn port(&self) -> u8 { self.1 }
    ///     fn write_port(&mut self, bits: u8) { self.1 = bits; }
    /// }
    ///
    /// let pin = Pin::<_, 7, Input>::new(Regs(0, 0)).into_output();
    /// assert_eq!(pin.levels().on, 0x80);
    /// ```
    pub const MASK: u8 = 1 << N;

    pub fn into_output(mut self) -> Pin<R, N, Output> {
        // Set DDRx bit
        let ddr = self.regs.ddr();
        self.regs.write_ddr(ddr | Self::MASK);
        Pin {
            regs: self.regs,
            _mode: PhantomData,
        }
    }

    pub fn release(self) -> R {
        self.regs
    }
}

impl<R: PortRegisters, const N: u8> Pin<R, N, Output> {
    /// Captures PORTx and derives the on/off values for this pin.
    pub fn levels(&self) -> Levels {
        Levels::new(self.regs.port(), Self::MASK)
    }

    /// Overwrites the whole port register.
    #[inline]
    pub fn write_port(&mut self, bits: u8) {
        self.regs.write_port(bits);
    }

    #[inline]
    pub fn set_high(&mut self) {
        let port = self.regs.port();
        self.regs.write_port(port | Self::MASK);
    }

    #[inline]
    pub fn set_low(&mut self) {
        let port = self.regs.port();
        self.regs.write_port(port & !Self::MASK);
    }

    #[inline]
    pub fn toggle(&mut self) {
        let port = self.regs.port();
        self.regs.write_port(port ^ Self::MASK);
    }

    #[inline]
    pub fn is_set_high(&self) -> bool {
        self.regs.port() & Self::MASK != 0
    }
}

impl<R: PortRegisters, const N: u8> OutputPin for Pin<R, N, Output> {
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Pin::set_high(self);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Pin::set_low(self);
        Ok(())
    }
}

impl<R: PortRegisters, const N: u8> ToggleableOutputPin for Pin<R, N, Output> {
    type Error = Infallible;

    fn toggle(&mut self) -> Result<(), Self::Error> {
        Pin::toggle(self);
        Ok(())
    }
}

#[cfg(target_arch = "avr")]
macro_rules! impl_port {
    ($PORT:ident, $ddr:ident, $port:ident) => {
        impl PortRegisters for avr_device::atmega328p::$PORT {
            #[inline]
            fn ddr(&self) -> u8 {
                self.$ddr.read().bits()
            }

            #[inline]
            fn write_ddr(&mut self, bits: u8) {
                self.$ddr.write(|w| unsafe { w.bits(bits) });
            }

            #[inline]
            fn port(&self) -> u8 {
                self.$port.read().bits()
            }

            #[inline]
            fn write_port(&mut self, bits: u8) {
                self.$port.write(|w| unsafe { w.bits(bits) });
            }
        }
    };
}

#[cfg(target_arch = "avr")]
impl_port!(PORTB, ddrb, portb);

// Arduino Uno pin definitions
#[cfg(target_arch = "avr")]
pub mod board {
    use super::*;
    use avr_device::atmega328p::PORTB;

    /// On-board LED, digital pin 13
    pub type D13 = Pin<PORTB, { crate::config::LED_BIT }, Input>;
}
