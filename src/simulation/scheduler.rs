//! # Step scheduler
//!
//! A cancellable periodic timer driving the step-and-render loop at a
//! target frame rate. Run state is an explicit two-variant enum rather
//! than a nullable timer handle, and arming is always replace-not-stack:
//! starting while already running re-arms the single interval.
//!
//! The scheduler is cooperative: it never spawns a thread. The host event
//! loop pumps [`Scheduler::due_ticks`] with the current instant and runs
//! one step per returned tick, so a full step-and-render always completes
//! before the next event is processed, and pausing trivially guarantees
//! that no in-flight tick can fire against stale grid dimensions.

use std::time::{Duration, Instant};

/// Slowest supported rate in steps per second.
pub const MIN_RATE: u32 = 1;

/// Fastest supported rate in steps per second.
pub const MAX_RATE: u32 = 33;

/// Increment used by the rate-up/rate-down controls.
pub const RATE_STEP: u32 = 1;

const MILLIS_PER_SECOND: u64 = 1000;

/// Whether the periodic timer is armed, and at what rate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RunState {
    Stopped,
    Running { rate: u32 },
}

/// Periodic tick source for the simulation loop.
pub struct Scheduler {
    state: RunState,
    target_rate: u32,
    next_tick: Option<Instant>,
}

impl Scheduler {
    /// New scheduler, stopped, with the target rate at the maximum (the
    /// rate the original simulation boots with).
    pub fn new() -> Self {
        Self {
            state: RunState::Stopped,
            target_rate: MAX_RATE,
            next_tick: None,
        }
    }

    /// Arm the timer at `rate` steps per second, measured from `now`.
    ///
    /// Any previously armed interval is replaced, never stacked. Rates
    /// outside `[MIN_RATE, MAX_RATE]` are clamped at this boundary so an
    /// invalid rate can never reach the step loop.
    pub fn start(&mut self, rate: u32, now: Instant) {
        let rate = rate.clamp(MIN_RATE, MAX_RATE);
        self.target_rate = rate;
        self.state = RunState::Running { rate };
        self.next_tick = Some(now + self.interval());
        log::debug!("scheduler running at {} steps/sec", rate);
    }

    /// Disarm the timer. Idempotent: pausing while already stopped is a
    /// no-op, not an error.
    pub fn pause(&mut self) {
        if self.state != RunState::Stopped {
            log::debug!("scheduler paused");
        }
        self.state = RunState::Stopped;
        self.next_tick = None;
    }

    /// Change the target rate without touching simulation state.
    ///
    /// While running this re-arms the interval from `now` at the new
    /// rate; while stopped it only records the target so the next start
    /// (and the rate label) pick it up. Returns true when the timer was
    /// running, so the caller knows a forced render is needed otherwise.
    pub fn change_rate(&mut self, new_rate: u32, now: Instant) -> bool {
        let rate = new_rate.clamp(MIN_RATE, MAX_RATE);
        self.target_rate = rate;
        match self.state {
            RunState::Running { .. } => {
                self.start(rate, now);
                true
            }
            RunState::Stopped => false,
        }
    }

    /// Number of whole intervals that have elapsed up to `now`.
    ///
    /// Each returned tick owes the caller one step-and-render. Stopped
    /// schedulers always report zero.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let RunState::Running { .. } = self.state else {
            return 0;
        };
        let Some(mut next_tick) = self.next_tick else {
            return 0;
        };

        let interval = self.interval();
        let mut ticks = 0;
        while now >= next_tick {
            ticks += 1;
            next_tick += interval;
        }
        self.next_tick = Some(next_tick);
        ticks
    }

    /// The rate the timer runs at (or will run at once started).
    pub fn target_rate(&self) -> u32 {
        self.target_rate
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running { .. })
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(MILLIS_PER_SECOND) / self.target_rate
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
