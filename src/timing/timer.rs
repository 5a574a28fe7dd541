//! Countdown timer built on a stopwatch

use crate::error::{Error, Result};
use crate::timing::BackoffConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy)]
enum Stopwatch {
    Unstarted,
    Running { started: Instant },
    Stopped { elapsed: Duration },
}

/// A countdown over a fixed duration.
///
/// All operations take `&self` so a timer can be shared (behind an `Arc`)
/// between the code that drives it and the [`Backoff`](crate::timing::Backoff)
/// that reads it.
#[derive(Debug)]
pub struct Timer {
    duration: Duration,
    stopwatch: Mutex<Stopwatch>,
    aborted: AtomicBool,
}

impl Timer {
    /// Create an unstarted timer
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            stopwatch: Mutex::new(Stopwatch::Unstarted),
            aborted: AtomicBool::new(false),
        }
    }

    /// The total duration of the timer
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Milliseconds left before expiry.
    ///
    /// Negative once a running timer has overrun. A timer that is not running
    /// reports its full duration.
    pub fn milliseconds_remaining(&self) -> i64 {
        let total = duration_millis(self.duration);
        match *self.stopwatch() {
            Stopwatch::Running { started } => total - duration_millis(started.elapsed()),
            _ => total,
        }
    }

    /// Time measured so far. Frozen once stopped.
    pub fn elapsed(&self) -> Duration {
        match *self.stopwatch() {
            Stopwatch::Unstarted => Duration::ZERO,
            Stopwatch::Running { started } => started.elapsed(),
            Stopwatch::Stopped { elapsed } => elapsed,
        }
    }

    /// Check whether the timer was aborted or has run its full duration
    pub fn is_expired(&self) -> bool {
        self.aborted.load(Ordering::SeqCst) || self.elapsed() >= self.duration
    }

    /// Check whether the timer is running
    pub fn is_running(&self) -> bool {
        matches!(*self.stopwatch(), Stopwatch::Running { .. })
    }

    /// Mark the timer expired until the next `start` or `reset`
    pub fn abort(&self) {
        self.aborted.store(true, Ordering::SeqCst);
    }

    /// Start the timer. Fails if it is running or stopped without a reset.
    pub fn start(&self) -> Result<()> {
        let mut stopwatch = self.stopwatch();
        match *stopwatch {
            Stopwatch::Running { .. } => Err(Error::timer_state("Stopwatch already started.")),
            Stopwatch::Stopped { .. } => Err(Error::timer_state(
                "Stopwatch must be reset before being restarted.",
            )),
            Stopwatch::Unstarted => {
                self.aborted.store(false, Ordering::SeqCst);
                *stopwatch = Stopwatch::Running {
                    started: Instant::now(),
                };
                Ok(())
            }
        }
    }

    /// Stop a running timer
    pub fn stop(&self) -> Result<()> {
        let mut stopwatch = self.stopwatch();
        match *stopwatch {
            Stopwatch::Running { started } => {
                *stopwatch = Stopwatch::Stopped {
                    elapsed: started.elapsed(),
                };
                Ok(())
            }
            _ => Err(Error::timer_state("Stopwatch is not running.")),
        }
    }

    /// Return to the unstarted state and clear any abort
    pub fn reset(&self) {
        self.aborted.store(false, Ordering::SeqCst);
        *self.stopwatch() = Stopwatch::Unstarted;
    }

    fn stopwatch(&self) -> MutexGuard<'_, Stopwatch> {
        self.stopwatch.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BackoffConfig for Timer {
    fn time_remaining(&self) -> i64 {
        self.milliseconds_remaining()
    }

    fn abort(&self) {
        Timer::abort(self);
    }
}

fn duration_millis(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}
