//! Configuration constants for the ATmega328P light runner

use crate::error::DivisorError;

/// CPU frequency in Hz. `build.rs` exports `MCU_FREQ_HZ` for AVR builds.
pub const CPU_FREQ_HZ: u32 = match option_env!("MCU_FREQ_HZ") {
    Some(hz) => parse_hz(hz),
    None => 16_000_000,
};

/// PORTB bit wired to the on-board LED (Arduino pin 13)
pub const LED_BIT: u8 = 5;

/// Time the LED spends in each of the on and off phases
pub const BLINK_HALF_PERIOD_MS: u16 = 500;

/// UART baud rate a receiver is expected to run at
pub const UART_BAUD: u32 = 9600;

/// UBRR0 low byte for `UART_BAUD` at `CPU_FREQ_HZ`
pub const UBRR_9600: u8 = match ubrr_for(CPU_FREQ_HZ, UART_BAUD) {
    Ok(ubrr) => ubrr,
    Err(_) => panic!("default baud rate needs UBRR0H"),
};

/// Computes the asynchronous normal-mode divisor `f_osc / (16 * baud) - 1`.
///
/// Only divisors that fit in UBRR0L are accepted, since the receiver setup
/// always writes zero to UBRR0H.
pub const fn ubrr_for(cpu_hz: u32, baud: u32) -> Result<u8, DivisorError> {
    if baud == 0 {
        return Err(DivisorError::ZeroBaud);
    }
    let ticks = cpu_hz / baud.saturating_mul(16);
    if ticks == 0 {
        return Err(DivisorError::TooFast);
    }
    let divisor = ticks - 1;
    if divisor > u8::MAX as u32 {
        // UBRR0 is 12 bits wide
        let clamped = if divisor > 0x0FFF { 0x0FFF } else { divisor };
        return Err(DivisorError::NeedsHighBits(clamped as u16));
    }
    Ok(divisor as u8)
}

const fn parse_hz(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut hz = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        if digit < b'0' || digit > b'9' {
            panic!("MCU_FREQ_HZ must be a decimal number");
        }
        hz = hz * 10 + (digit - b'0') as u32;
        i += 1;
    }
    hz
}
