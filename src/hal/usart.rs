//! USART0 receiver setup.
//!
//! Nothing in the firmware calls into this module; it arms the receiver for
//! a caller that polls or services RXC0 itself.

// UCSR0B bits
pub const RXCIE0: u8 = 1 << 7;
pub const TXCIE0: u8 = 1 << 6;
pub const UDRIE0: u8 = 1 << 5;
pub const RXEN0: u8 = 1 << 4;
pub const TXEN0: u8 = 1 << 3;
pub const UCSZ02: u8 = 1 << 2;

// UCSR0C bits
pub const UMSEL01: u8 = 1 << 7;
pub const UMSEL00: u8 = 1 << 6;
pub const UPM01: u8 = 1 << 5;
pub const UPM00: u8 = 1 << 4;
pub const USBS0: u8 = 1 << 3;
pub const UCSZ01: u8 = 1 << 2;
pub const UCSZ00: u8 = 1 << 1;

/// 8 data bits, asynchronous, no parity, 1 stop bit
pub const UCSR0C_8N1: u8 = UCSZ01 | UCSZ00;
/// Receiver only, transmitter and all USART interrupts off
pub const UCSR0B_RX_ONLY: u8 = RXEN0;

/// UBRRnH bits 7:4 are reserved; only bits 11:8 of the divisor exist.
pub const UBRRH_MASK: u8 = 0x0F;

/// Write access to the USART registers touched by `initialize_receiver`.
pub trait UsartRegisters {
    /// Writes UBRRnH then UBRRnL. Bits of `high` outside `UBRRH_MASK` are
    /// dropped.
    fn write_ubrr(&mut self, high: u8, low: u8);
    fn write_ucsrc(&mut self, bits: u8);
    fn write_ucsrb(&mut self, bits: u8);
}

/// Programs USART0 for 8N1 asynchronous reception at the baud rate selected
/// by `ubrr_lo`, with UBRR0H forced to zero.
///
/// The divisor must fit in 8 bits (`f_osc / (16 * baud) - 1 < 256`); see
/// [`crate::config::ubrr_for`]. UCSR0B and UCSR0C are overwritten, not
/// merged, so the transmitter and the RXC, TXC and UDRE interrupts end up
/// disabled whatever their previous state. UCSR0A is left untouched.
pub fn initialize_receiver<U: UsartRegisters>(usart: &mut U, ubrr_lo: u8) {
    usart.write_ubrr(0, ubrr_lo);
    usart.write_ucsrc(UCSR0C_8N1);
    usart.write_ucsrb(UCSR0B_RX_ONLY);
}

#[cfg(target_arch = "avr")]
impl UsartRegisters for avr_device::atmega328p::USART0 {
    #[inline]
    fn write_ubrr(&mut self, high: u8, low: u8) {
        // 16-bit I/O writes go out high byte first
        let ubrr = (u16::from(high & UBRRH_MASK) << 8) | u16::from(low);
        self.ubrr0.write(|w| unsafe { w.bits(ubrr) });
    }

    #[inline]
    fn write_ucsrc(&mut self, bits: u8) {
        self.ucsr0c.write(|w| unsafe { w.bits(bits) });
    }

    #[inline]
    fn write_ucsrb(&mut self, bits: u8) {
        self.ucsr0b.write(|w| unsafe { w.bits(bits) });
    }
}
