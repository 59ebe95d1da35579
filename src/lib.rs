//! Single-pin output setup over a narrow, mockable GPIO driver capability.

#![cfg_attr(not(test), no_std)]

pub mod drivers;
pub mod gpio;
pub mod switch;

pub use gpio::{GpioDriver, GpioError, InterruptType, PinConfig, PinMode};
pub use switch::configure_output;
