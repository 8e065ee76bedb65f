#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use avr_device::atmega328p::Peripherals;
    use light_runner::hal::gpio::board::D13;
    use light_runner::hal::Delay;
    use light_runner::Blinker;

    #[avr_device::entry]
    fn main() -> ! {
        // No interrupts are serviced by this firmware
        avr_device::interrupt::disable();

        let dp = match Peripherals::take() {
            Some(dp) => dp,
            None => halt(),
        };

        let led = D13::new(dp.PORTB);
        let delay = Delay::new(dp.TC0);

        // USART0 stays unconfigured; light_runner::initialize_receiver is
        // available to firmware that consumes serial input.
        Blinker::new(led, delay).run()
    }

    fn halt() -> ! {
        loop {
            avr_device::asm::sleep();
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    eprintln!("light_runner is ATmega328P firmware; build it for the avr-atmega328p target");
}
