//! Interrupt-safe driver hand-off cell.
//!
//! The refill callbacks usually run from an interrupt handler while the
//! pixel API runs from thread context. `Shared` wraps the driver in a
//! `critical-section` mutex so a `static` can hold it without `static mut`.
//!
//! ```ignore
//! static STRIP: Shared<StripDriver<PwmDma, 900>> = Shared::new();
//!
//! // init, thread context
//! STRIP.put(driver);
//!
//! // DMA half-transfer interrupt
//! STRIP.with(|driver| driver.on_half_transfer());
//! ```

use core::cell::RefCell;

use critical_section::Mutex;

/// A value shared between thread and interrupt context.
pub struct Shared<T> {
    inner: Mutex<RefCell<Option<T>>>,
}

impl<T> Shared<T> {
    /// Create an empty cell. Usable in `static` initializers.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Store a value, returning the previous one if any.
    pub fn put(&self, value: T) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().replace(value))
    }

    /// Take the value out of the cell.
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().take())
    }

    /// Run `f` on the stored value inside a critical section.
    ///
    /// Returns `None` when the cell is empty.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().as_mut().map(f))
    }
}

impl<T> Default for Shared<T> {
    fn default() -> Self {
        Self::new()
    }
}
