use core::fmt;
use ufmt::derive::uDebug;

/// Reasons a baud rate has no UBRR0L-only divisor
#[derive(Clone, Copy, Debug, PartialEq, Eq, uDebug)]
pub enum DivisorError {
    ZeroBaud,
    /// The rate exceeds `f_osc / 16`
    TooFast,
    /// The divisor (saturated to 12 bits) does not fit in UBRR0L
    NeedsHighBits(u16),
}

impl fmt::Display for DivisorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivisorError::ZeroBaud => f.write_str("baud rate is zero"),
            DivisorError::TooFast => f.write_str("baud rate exceeds f_osc / 16"),
            DivisorError::NeedsHighBits(ubrr) => {
                write!(f, "divisor {} does not fit in UBRR0L", ubrr)
            }
        }
    }
}
