//! Recurring timers with guaranteed release.
//!
//! The countdown never talks to a clock directly. It asks a [`Scheduler`]
//! for a recurring callback and keeps the returned [`TimerHandle`]; dropping
//! or cancelling the handle unregisters the callback, so a torn-down banner
//! can never be ticked again.
//!
//! Two schedulers ship with the crate:
//!
//! - [`ManualScheduler`] - virtual clock advanced explicitly (tests, hosts
//!   that drive their own frame loop).
//! - [`IntervalScheduler`] - wall clock. Background threads count elapsed
//!   periods; [`IntervalScheduler::pump`] delivers them on the owning thread.

use std::ops::ControlFlow;
use std::time::Duration;

mod interval;
mod manual;

pub use interval::IntervalScheduler;
pub use manual::ManualScheduler;

// =============================================================================
// Callback + Handle
// =============================================================================

/// Recurring timer callback.
///
/// Return `ControlFlow::Break(())` to unregister the timer from inside.
pub type TickCallback = Box<dyn FnMut() -> ControlFlow<()>>;

/// Owner of one scheduled callback.
///
/// Cancelling is idempotent and also happens on drop.
#[must_use = "dropping a TimerHandle cancels its timer"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    /// Wrap the function that unregisters a timer.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Handle for a timer that was never scheduled.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Unregister the timer now.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

// =============================================================================
// Scheduler
// =============================================================================

/// Source of recurring callbacks.
pub trait Scheduler {
    /// Invoke `callback` every `period` until it breaks or the handle is
    /// cancelled.
    fn every(&self, period: Duration, callback: TickCallback) -> TimerHandle;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_handle_cancels_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let handle = TimerHandle::new(move || counter.set(counter.get() + 1));

        handle.cancel();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_handle_cancels_on_drop() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        {
            let _handle = TimerHandle::new(move || counter.set(counter.get() + 1));
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_noop_handle() {
        let handle = TimerHandle::noop();
        assert_eq!(format!("{handle:?}"), "TimerHandle { armed: false }");
        handle.cancel();
    }
}
