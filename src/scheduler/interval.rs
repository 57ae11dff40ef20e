//! Wall-clock scheduler backed by one sleeper thread per timer.
//!
//! Signals are single-threaded, so the sleeper threads never run callbacks.
//! They only count elapsed periods into an atomic; [`IntervalScheduler::pump`]
//! drains those counts on the owning thread and runs the callbacks there.
//!
//! # Example
//!
//! ```ignore
//! let scheduler = IntervalScheduler::new();
//! let handle = scheduler.every(Duration::from_secs(1), callback);
//!
//! loop {
//!     scheduler.pump();
//!     std::thread::sleep(Duration::from_millis(50));
//! }
//! ```

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::ops::ControlFlow;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::{Scheduler, TickCallback, TimerHandle};

struct IntervalTimer {
    /// Periods elapsed since the last pump.
    pending: Arc<AtomicU64>,
    /// Cleared to stop the sleeper thread.
    running: Arc<AtomicBool>,
    /// Taken out while the callback runs.
    callback: Option<TickCallback>,
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        // Stops the sleeper however the timer leaves the map.
        self.running.store(false, Ordering::SeqCst);
    }
}

/// Scheduler that follows the wall clock.
#[derive(Clone, Default)]
pub struct IntervalScheduler {
    timers: Rc<RefCell<BTreeMap<u64, IntervalTimer>>>,
    next_id: Rc<Cell<u64>>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered timers.
    pub fn active_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Run every callback whose period elapsed since the last pump.
    ///
    /// A timer that missed several periods is invoked once per period, so a
    /// stalled owner thread catches up in one burst and counters driven by
    /// the callback stay aligned with wall time. Returns how many callbacks
    /// ran.
    pub fn pump(&self) -> usize {
        let ids: Vec<u64> = self.timers.borrow().keys().copied().collect();
        let mut delivered = 0;

        for id in ids {
            let taken = {
                let mut timers = self.timers.borrow_mut();
                let Some(timer) = timers.get_mut(&id) else {
                    continue;
                };
                let due = timer.pending.swap(0, Ordering::SeqCst);
                if due == 0 {
                    continue;
                }
                timer
                    .callback
                    .take()
                    .map(|callback| (due, callback, timer.running.clone()))
            };
            let Some((due, mut callback, running)) = taken else {
                continue;
            };

            let mut flow = ControlFlow::Continue(());
            for _ in 0..due {
                if !running.load(Ordering::SeqCst) {
                    break;
                }
                flow = callback();
                delivered += 1;
                if flow.is_break() {
                    break;
                }
            }

            let mut timers = self.timers.borrow_mut();
            if flow.is_break() {
                timers.remove(&id);
            } else if let Some(timer) = timers.get_mut(&id) {
                timer.callback = Some(callback);
            }
        }

        delivered
    }
}

impl Scheduler for IntervalScheduler {
    fn every(&self, period: Duration, callback: TickCallback) -> TimerHandle {
        if period.is_zero() {
            warn!("refusing to schedule a zero-period timer");
            return TimerHandle::noop();
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let pending = Arc::new(AtomicU64::new(0));
        let running = Arc::new(AtomicBool::new(true));

        let thread_pending = pending.clone();
        let thread_running = running.clone();
        thread::spawn(move || {
            let start = Instant::now();
            let mut periods: u32 = 0;
            while thread_running.load(Ordering::SeqCst) {
                periods = periods.saturating_add(1);
                // Sleep toward an absolute deadline so ticks don't drift.
                let deadline = start + period * periods;
                thread::sleep(deadline.saturating_duration_since(Instant::now()));
                if thread_running.load(Ordering::SeqCst) {
                    thread_pending.fetch_add(1, Ordering::SeqCst);
                }
            }
        });

        self.timers.borrow_mut().insert(
            id,
            IntervalTimer {
                pending,
                running,
                callback: Some(callback),
            },
        );
        debug!(id, period_ms = period.as_millis() as u64, "interval timer started");

        let timers = Rc::downgrade(&self.timers);
        TimerHandle::new(move || {
            let Some(timers) = timers.upgrade() else {
                return;
            };
            // The sleeper exits on its next wake-up; it is never joined.
            let removed = timers.borrow_mut().remove(&id);
            if removed.is_some() {
                debug!(id, "interval timer cancelled");
            }
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(calls: &Rc<Cell<u32>>) -> TickCallback {
        let calls = calls.clone();
        Box::new(move || {
            calls.set(calls.get() + 1);
            ControlFlow::Continue(())
        })
    }

    #[test]
    fn test_pump_delivers_elapsed_periods() {
        let scheduler = IntervalScheduler::new();
        let calls = Rc::new(Cell::new(0));
        let _handle = scheduler.every(Duration::from_millis(10), counting(&calls));

        thread::sleep(Duration::from_millis(60));
        let delivered = scheduler.pump();

        assert!(delivered >= 1);
        assert_eq!(calls.get() as usize, delivered);
    }

    #[test]
    fn test_nothing_runs_without_pump() {
        let scheduler = IntervalScheduler::new();
        let calls = Rc::new(Cell::new(0));
        let _handle = scheduler.every(Duration::from_millis(5), counting(&calls));

        thread::sleep(Duration::from_millis(30));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_cancel_discards_pending_ticks() {
        let scheduler = IntervalScheduler::new();
        let calls = Rc::new(Cell::new(0));
        let handle = scheduler.every(Duration::from_millis(5), counting(&calls));

        thread::sleep(Duration::from_millis(30));
        handle.cancel();

        assert_eq!(scheduler.pump(), 0);
        assert_eq!(calls.get(), 0);
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn test_break_unregisters() {
        let scheduler = IntervalScheduler::new();
        let _handle = scheduler.every(Duration::from_millis(5), Box::new(|| ControlFlow::Break(())));

        thread::sleep(Duration::from_millis(30));
        assert_eq!(scheduler.pump(), 1);
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn test_stalled_owner_catches_up() {
        let scheduler = IntervalScheduler::new();
        let calls = Rc::new(Cell::new(0));
        let _handle = scheduler.every(Duration::from_millis(5), counting(&calls));

        thread::sleep(Duration::from_millis(100));
        let delivered = scheduler.pump();

        assert!(delivered >= 2, "expected a burst of missed ticks, got {delivered}");
        assert_eq!(calls.get() as usize, delivered);
    }

    #[test]
    fn test_scheduler_drop_stops_sleepers() {
        let scheduler = IntervalScheduler::new();
        let handle = scheduler.every(Duration::from_millis(5), Box::new(|| ControlFlow::Continue(())));
        let running = scheduler.timers.borrow()[&0].running.clone();

        drop(scheduler);
        assert!(!running.load(Ordering::SeqCst));

        drop(handle);
        thread::sleep(Duration::from_millis(30));
        assert!(!running.load(Ordering::SeqCst));
    }

    #[test]
    fn test_cancel_stops_sleeper() {
        let scheduler = IntervalScheduler::new();
        let handle = scheduler.every(Duration::from_millis(5), Box::new(|| ControlFlow::Continue(())));
        let running = scheduler.timers.borrow()[&0].running.clone();

        handle.cancel();
        assert!(!running.load(Ordering::SeqCst));
    }

    #[test]
    fn test_zero_period_is_noop() {
        let scheduler = IntervalScheduler::new();
        let calls = Rc::new(Cell::new(0));
        let _handle = scheduler.every(Duration::ZERO, counting(&calls));
        assert_eq!(scheduler.active_timers(), 0);
    }
}
