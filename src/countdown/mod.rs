//! Countdown controller - one-shot, one-second state machine.
//!
//! The remaining seconds live in a [`Signal`], so anything that reads it
//! inside an effect re-renders on every tick. The controller is the only
//! writer.
//!
//! # States
//!
//! ```text
//! Running (remaining > 0) --tick--> Running | Expired
//! Expired (remaining == 0) --tick--> Expired
//! ```
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use banner_timer::countdown::{CountdownController, CountdownState};
//! use banner_timer::scheduler::ManualScheduler;
//!
//! let scheduler = ManualScheduler::new();
//! let mut countdown = CountdownController::new(3);
//! countdown.start(&scheduler);
//!
//! scheduler.advance(Duration::from_secs(5));
//! assert_eq!(countdown.remaining(), 0);
//! assert_eq!(countdown.state(), CountdownState::Expired);
//! assert_eq!(countdown.clock(), "0:00");
//! ```

use std::ops::ControlFlow;
use std::time::Duration;

use spark_signals::{flush_sync, signal, Signal};
use tracing::{debug, trace};

use crate::scheduler::{Scheduler, TimerHandle};

mod format;

pub use format::{format_time, resolve_duration, DEFAULT_DURATION_SECS};

/// Cadence of the countdown.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

// =============================================================================
// State
// =============================================================================

/// Countdown state, derived from the remaining seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Running,
    Expired,
}

impl CountdownState {
    fn of(remaining: u32) -> Self {
        if remaining == 0 {
            Self::Expired
        } else {
            Self::Running
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Owns one banner's countdown and its recurring timer.
///
/// Dropping the controller cancels the timer.
pub struct CountdownController {
    remaining: Signal<u32>,
    timer: Option<TimerHandle>,
}

impl CountdownController {
    /// Create a stopped countdown at `initial` seconds.
    pub fn new(initial: u32) -> Self {
        Self {
            remaining: signal(initial),
            timer: None,
        }
    }

    /// Seconds left.
    pub fn remaining(&self) -> u32 {
        self.remaining.get()
    }

    /// Reactive handle on the seconds left, for effects and deriveds.
    pub fn remaining_signal(&self) -> Signal<u32> {
        self.remaining.clone()
    }

    pub fn state(&self) -> CountdownState {
        CountdownState::of(self.remaining.get())
    }

    /// Remaining time formatted as `m:ss`.
    pub fn clock(&self) -> String {
        format_time(self.remaining.get())
    }

    /// True while a timer is scheduled and the countdown is still running.
    pub fn is_active(&self) -> bool {
        self.timer.is_some() && self.state() == CountdownState::Running
    }

    /// Advance the countdown by one second.
    ///
    /// No-op once expired. Returns the state after the tick.
    pub fn tick(&self) -> CountdownState {
        step(&self.remaining)
    }

    /// Schedule the recurring one-second tick.
    ///
    /// Does nothing if a timer is already scheduled or the countdown has
    /// expired. The timer unregisters itself when the countdown reaches zero.
    pub fn start(&mut self, scheduler: &dyn Scheduler) {
        if self.timer.is_some() {
            return;
        }
        if self.state() == CountdownState::Expired {
            debug!("countdown already expired, not scheduling");
            return;
        }

        let remaining = self.remaining.clone();
        let handle = scheduler.every(
            TICK_PERIOD,
            Box::new(move || match step(&remaining) {
                CountdownState::Running => ControlFlow::Continue(()),
                CountdownState::Expired => ControlFlow::Break(()),
            }),
        );
        debug!(remaining = self.remaining(), "countdown started");
        self.timer = Some(handle);
    }

    /// Cancel the timer, keeping the current value. `start` may resume it.
    pub fn stop(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.cancel();
            debug!(remaining = self.remaining(), "countdown stopped");
        }
    }

    /// Tear the countdown down. No tick fires afterwards.
    pub fn teardown(mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for CountdownController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountdownController")
            .field("remaining", &self.remaining.get())
            .field("active", &self.timer.is_some())
            .finish()
    }
}

/// Decrement `remaining` by one, floored at zero.
fn step(remaining: &Signal<u32>) -> CountdownState {
    let current = remaining.get();
    if current == 0 {
        return CountdownState::Expired;
    }

    let next = current - 1;
    remaining.set(next);
    // Dependent effects (the render) see the new value before we return
    flush_sync();
    trace!(remaining = next, "countdown tick");

    let state = CountdownState::of(next);
    if state == CountdownState::Expired {
        debug!("countdown expired");
    }
    state
}

// =============================================================================
// Tests
// =============================================================================
