//! GPIO driver capability: configuration record and the two-call interface.

/// Direction a configured pin operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Input,
    Output,
}

/// Interrupt trigger for a configured pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptType {
    Disable,
    RisingEdge,
    FallingEdge,
    AnyEdge,
}

/// Batched pin configuration. `pin_bit_mask` selects the pins the remaining
/// fields apply to, one bit per pin number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfig {
    pub pin_bit_mask: u64,
    pub mode: PinMode,
    pub pull_up: bool,
    pub pull_down: bool,
    pub intr_type: InterruptType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// Mask bit outside the device's pin range.
    InvalidPin(u8),
    /// Pin was never handed to the driver.
    NotClaimed(u8),
    Unsupported(&'static str),
}

/// The two operations this crate needs from a GPIO driver.
///
/// Hardware backends implement this over the vendor HAL; tests substitute a
/// recording stub.
pub trait GpioDriver {
    /// Program every pin selected by `config.pin_bit_mask`.
    fn apply_config(&mut self, config: &PinConfig) -> Result<(), GpioError>;

    /// Drive `pin` to `level`: 0 is low, anything else is high.
    fn set_level(&mut self, pin: u8, level: u32) -> Result<(), GpioError>;
}
