pub mod blink;

pub use blink::{Blinker, Phase};
