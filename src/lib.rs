//! ATmega328P LED blink firmware with a standalone USART0 receiver setup.
//!
//! Register access sits behind small traits in [`hal`] so the drivers run
//! against the `avr-device` peripherals on target and against in-memory
//! register blocks in host tests.
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod diagnostics;
pub mod drivers;
pub mod error;
pub mod hal;

#[cfg(test)]
mod testing;

pub use drivers::{Blinker, Phase};
pub use error::DivisorError;
pub use hal::initialize_receiver;
