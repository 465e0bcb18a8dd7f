//! Per-plot binary lock.

use std::sync::atomic::{AtomicBool, Ordering};

/// A non-blocking exclusive lock guarding one lawn cell.
///
/// Starts unheld.  Only [`try_acquire`](Self::try_acquire) and
/// [`release`](Self::release) mutate it.
#[derive(Debug, Default)]
pub struct PlotLock {
    held: AtomicBool,
}

impl PlotLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the lock if it is free.  Returns `false` immediately if held.
    #[inline]
    pub fn try_acquire(&self) -> bool {
        self.held
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    /// Free the lock.  Returns `false` (and changes nothing) if it was not held.
    #[inline]
    pub fn release(&self) -> bool {
        self.held
            .compare_exchange(true, false, Ordering::Release, Ordering::Relaxed)
            .is_ok()
    }

    #[inline]
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }
}
