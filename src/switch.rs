//! Set up a single pin as a grounded output.

use crate::gpio::{GpioDriver, InterruptType, PinConfig, PinMode};

/// Configure `pin` as a digital output with pull resistors and interrupts
/// disabled, then drive it low.
///
/// Driver statuses are not checked: GPIO setup is treated as infallible
/// startup code, so a failed call leaves the pin in whatever state the
/// driver left it, with no diagnostic from here.
pub fn configure_output<D: GpioDriver>(gpio: &mut D, pin: u8) {
    let cfg = PinConfig {
        pin_bit_mask: 1u64 << pin,
        mode: PinMode::Output,
        pull_up: false,
        pull_down: false,
        intr_type: InterruptType::Disable,
    };
    let _ = gpio.apply_config(&cfg);
    let _ = gpio.set_level(pin, 0);
}
