//! Virtual clock scheduler.
//!
//! Nothing fires until [`ManualScheduler::advance`] is called; callbacks then
//! run synchronously in due-time order. Clones share the same clock.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::ops::ControlFlow;
use std::rc::Rc;
use std::time::Duration;

use tracing::warn;

use super::{Scheduler, TickCallback, TimerHandle};

struct ManualTimer {
    period: Duration,
    due: Duration,
    /// Taken out while the callback runs.
    callback: Option<TickCallback>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    fired: u64,
    timers: BTreeMap<u64, ManualTimer>,
}

/// Deterministic scheduler driven by explicit time advances.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of registered timers.
    pub fn active_timers(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Total callback invocations so far.
    pub fn fired(&self) -> u64 {
        self.clock.borrow().fired
    }

    /// Move the clock forward, running every callback that falls due.
    ///
    /// Returns how many callbacks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut fired = 0;

        while let Some(id) = self.next_due(target) {
            let callback = {
                let mut clock = self.clock.borrow_mut();
                let Some(timer) = clock.timers.get_mut(&id) else {
                    continue;
                };
                let (due, callback) = (timer.due, timer.callback.take());
                clock.now = due;
                callback
            };
            let Some(mut callback) = callback else {
                continue;
            };

            let flow = callback();
            fired += 1;

            // Whatever is not re-armed is dropped after the borrow ends.
            let finished = {
                let mut clock = self.clock.borrow_mut();
                clock.fired += 1;
                match (flow, clock.timers.get_mut(&id)) {
                    (ControlFlow::Continue(()), Some(timer)) => {
                        timer.due += timer.period;
                        timer.callback = Some(callback);
                        None
                    }
                    (ControlFlow::Break(()), Some(_)) => {
                        clock.timers.remove(&id);
                        Some(callback)
                    }
                    (_, None) => Some(callback),
                }
            };
            drop(finished);
        }

        self.clock.borrow_mut().now = target;
        fired
    }

    /// Earliest runnable timer due at or before `target`.
    fn next_due(&self, target: Duration) -> Option<u64> {
        let clock = self.clock.borrow();
        clock
            .timers
            .iter()
            .filter(|(_, timer)| timer.due <= target && timer.callback.is_some())
            .min_by_key(|(id, timer)| (timer.due, **id))
            .map(|(id, _)| *id)
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, period: Duration, callback: TickCallback) -> TimerHandle {
        if period.is_zero() {
            warn!("refusing to schedule a zero-period timer");
            return TimerHandle::noop();
        }

        let id = {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + period;
            clock.timers.insert(
                id,
                ManualTimer {
                    period,
                    due,
                    callback: Some(callback),
                },
            );
            id
        };

        let clock = Rc::downgrade(&self.clock);
        TimerHandle::new(move || {
            if let Some(clock) = clock.upgrade() {
                // Drop the callback after the borrow ends; it may own handles too.
                let removed = clock.borrow_mut().timers.remove(&id);
                drop(removed);
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
    use std::cell::Cell;

    fn counting(calls: &Rc<Cell<u32>>) -> TickCallback {
        let calls = calls.clone();
        Box::new(move || {
            calls.set(calls.get() + 1);
            ControlFlow::Continue(())
        })
    }

    #[test]
    fn test_nothing_fires_before_period() {
        let scheduler = ManualScheduler::new();
        let calls = Rc::new(Cell::new(0));
        let _handle = scheduler.every(Duration::from_secs(1), counting(&calls));

        scheduler.advance(Duration::from_millis(999));
        assert_eq!(calls.get(), 0);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_advance_fires_every_elapsed_period() {
        let scheduler = ManualScheduler::new();
        let calls = Rc::new(Cell::new(0));
        let _handle = scheduler.every(Duration::from_secs(1), counting(&calls));

        assert_eq!(scheduler.advance(Duration::from_millis(3500)), 3);
        assert_eq!(calls.get(), 3);
        assert_eq!(scheduler.now(), Duration::from_millis(3500));
    }

    #[test]
    fn test_cancel_before_first_fire() {
        let scheduler = ManualScheduler::new();
        let calls = Rc::new(Cell::new(0));
        let handle = scheduler.every(Duration::from_secs(1), counting(&calls));

        handle.cancel();
        scheduler.advance(Duration::from_secs(10));

        assert_eq!(calls.get(), 0);
        assert_eq!(scheduler.active_timers(), 0);
        assert_eq!(scheduler.fired(), 0);
    }

    #[test]
    fn test_break_unregisters() {
        let scheduler = ManualScheduler::new();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let _handle = scheduler.every(
            Duration::from_secs(1),
            Box::new(move || {
                counter.set(counter.get() + 1);
                if counter.get() == 2 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }),
        );

        scheduler.advance(Duration::from_secs(5));
        assert_eq!(calls.get(), 2);
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn test_timers_interleave_in_due_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let fast_log = log.clone();
        let _fast = scheduler.every(
            Duration::from_millis(400),
            Box::new(move || {
                fast_log.borrow_mut().push("fast");
                ControlFlow::Continue(())
            }),
        );
        let slow_log = log.clone();
        let _slow = scheduler.every(
            Duration::from_secs(1),
            Box::new(move || {
                slow_log.borrow_mut().push("slow");
                ControlFlow::Continue(())
            }),
        );

        scheduler.advance(Duration::from_secs(1));
        assert_eq!(*log.borrow(), vec!["fast", "fast", "slow"]);
    }

    #[test]
    fn test_zero_period_is_noop() {
        let scheduler = ManualScheduler::new();
        let calls = Rc::new(Cell::new(0));
        let _handle = scheduler.every(Duration::ZERO, counting(&calls));

        assert_eq!(scheduler.active_timers(), 0);
        scheduler.advance(Duration::from_secs(1));
        assert_eq!(calls.get(), 0);
    }
}
