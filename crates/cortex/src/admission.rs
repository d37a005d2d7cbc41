//! Admission control: a hard concurrency ceiling, not a queue.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts in-flight analyses and rejects work beyond the ceiling.
///
/// Acquisition is a single compare-and-swap; there is no fairness or
/// priority beyond "first past the ceiling check wins".
#[derive(Default)]
pub struct AdmissionControl {
    active: AtomicUsize,
}

impl AdmissionControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a slot under `limit`. `None` means the ceiling is reached and
    /// the request must be rejected immediately.
    pub fn try_acquire(&self, limit: usize) -> Option<AdmissionPermit<'_>> {
        self.active
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |active| {
                (active < limit).then_some(active + 1)
            })
            .ok()?;
        Some(AdmissionPermit { control: self })
    }

    /// In-flight analyses right now.
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

/// RAII slot: dropping it releases the admission count, so every exit path
/// (success, rejection downstream, timeout, panic unwind) decrements.
pub struct AdmissionPermit<'a> {
    control: &'a AdmissionControl,
}

impl Drop for AdmissionPermit<'_> {
    fn drop(&mut self) {
        self.control.active.fetch_sub(1, Ordering::SeqCst);
    }
}
