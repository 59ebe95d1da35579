//! Driver singleton plumbing: a critical-section guarded slot plus a
//! copyable handle for reaching it.

use core::cell::RefCell;

use critical_section::Mutex;

#[cfg(feature = "esp32")]
pub mod esp32;

pub type DriverCell<T> = Mutex<RefCell<Option<T>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    AlreadyInitialized,
    NotReady,
    InitFailed(&'static str),
}

/// Cheap accessor for a driver living in a static [`DriverCell`].
pub struct DriverHandle<T: 'static> {
    cell: &'static DriverCell<T>,
}

// Manual impls: the handle is only a reference, `T` need not be `Copy`.
impl<T: 'static> Clone for DriverHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for DriverHandle<T> {}

impl<T: 'static> DriverHandle<T> {
    pub const fn new(cell: &'static DriverCell<T>) -> Self {
        Self { cell }
    }

    pub fn is_ready(&self) -> bool {
        critical_section::with(|cs| self.cell.borrow_ref(cs).is_some())
    }

    /// Run `f` against the driver, or return `None` when the slot is empty.
    pub fn try_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| self.cell.borrow_ref_mut(cs).as_mut().map(f))
    }

    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.cell.borrow_ref_mut(cs).take())
    }

    pub fn replace(&self, value: T) -> Option<T> {
        critical_section::with(|cs| self.cell.borrow_ref_mut(cs).replace(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use critical_section::Mutex;

    static SLOT: DriverCell<u32> = Mutex::new(RefCell::new(None));

    // One case end to end; the slot is a shared static.
    #[test]
    fn handle_tracks_slot_state() {
        let handle = DriverHandle::new(&SLOT);

        assert!(!handle.is_ready());
        assert_eq!(handle.try_with(|v| *v), None);

        assert_eq!(handle.replace(7), None);
        assert!(handle.is_ready());
        assert_eq!(handle.try_with(|v| *v + 1), Some(8));

        assert_eq!(handle.take(), Some(7));
        assert!(!handle.is_ready());
        assert_eq!(handle.take(), None);
    }
}
