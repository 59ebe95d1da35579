//! `GpioDriver` backend over esp-hal for the ESP32.

use core::cell::RefCell;

use critical_section::{with, Mutex};
use esp_hal::gpio::{AnyPin, Flex, InputConfig, Level, OutputConfig, Pull};

use super::{DriverCell, DriverError, DriverHandle};
use crate::gpio::{GpioDriver, GpioError, InterruptType, PinConfig, PinMode};

/// Package pins GPIO0..GPIO39.
const PIN_COUNT: usize = 40;

const UNCLAIMED: Option<Flex<'static>> = None;

/// Pin-number addressed GPIO driver. Pins must be claimed from the
/// peripheral set before they can be configured.
pub struct Esp32Gpio {
    pins: [Option<Flex<'static>>; PIN_COUNT],
}

impl Esp32Gpio {
    pub const fn new() -> Self {
        Self {
            pins: [UNCLAIMED; PIN_COUNT],
        }
    }

    /// Hand a degraded hardware pin to the driver under its pin number.
    pub fn claim(&mut self, pin: u8, hw: AnyPin<'static>) -> Result<(), DriverError> {
        let slot = self
            .pins
            .get_mut(usize::from(pin))
            .ok_or(DriverError::InitFailed("pin out of range"))?;
        if slot.is_some() {
            return Err(DriverError::AlreadyInitialized);
        }
        *slot = Some(Flex::new(hw));
        Ok(())
    }

    fn pin_mut(&mut self, pin: u8) -> Result<&mut Flex<'static>, GpioError> {
        if usize::from(pin) >= PIN_COUNT {
            return Err(GpioError::InvalidPin(pin));
        }
        self.pins[usize::from(pin)]
            .as_mut()
            .ok_or(GpioError::NotClaimed(pin))
    }
}

impl GpioDriver for Esp32Gpio {
    fn apply_config(&mut self, config: &PinConfig) -> Result<(), GpioError> {
        if config.intr_type != InterruptType::Disable {
            return Err(GpioError::Unsupported("interrupt trigger"));
        }
        let pull = match (config.pull_up, config.pull_down) {
            (true, true) => return Err(GpioError::Unsupported("pull-up with pull-down")),
            (true, false) => Pull::Up,
            (false, true) => Pull::Down,
            (false, false) => Pull::None,
        };
        for pin in 0..u64::BITS as u8 {
            if config.pin_bit_mask & (1u64 << pin) == 0 {
                continue;
            }
            let flex = self.pin_mut(pin)?;
            match config.mode {
                PinMode::Output => {
                    flex.apply_output_config(&OutputConfig::default().with_pull(pull));
                    flex.set_output_enable(true);
                }
                PinMode::Input => {
                    flex.apply_input_config(&InputConfig::default().with_pull(pull));
                    flex.set_input_enable(true);
                }
            }
        }
        Ok(())
    }

    fn set_level(&mut self, pin: u8, level: u32) -> Result<(), GpioError> {
        let hw_level = if level == 0 { Level::Low } else { Level::High };
        self.pin_mut(pin)?.set_level(hw_level);
        Ok(())
    }
}

static GPIO_DRIVER: DriverCell<Esp32Gpio> = Mutex::new(RefCell::new(None));

pub type GpioHandle = DriverHandle<Esp32Gpio>;

pub fn init_gpio() -> Result<GpioHandle, DriverError> {
    with(|cs| {
        let mut cell = GPIO_DRIVER.borrow_ref_mut(cs);
        if cell.is_some() {
            return Err(DriverError::AlreadyInitialized);
        }
        *cell = Some(Esp32Gpio::new());
        Ok(())
    })?;
    esp_println::println!("GPIO driver ready");
    Ok(GpioHandle::new(&GPIO_DRIVER))
}
