pub mod gpio;
pub mod timer;
pub mod usart;

// Re-export commonly used types
pub use gpio::{Input, Levels, Output, Pin, PortRegisters};
pub use timer::{Delay, Prescaler, Timer, TimerRegisters};
pub use usart::{initialize_receiver, UsartRegisters};
