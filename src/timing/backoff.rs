//! Jittered exponential backoff bounded by a time budget

use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tracing::debug;

/// Upper bound (exclusive) of the raw jitter value
pub const MAX_JITTER: i64 = 1024;

/// Subtracted from the raw jitter to center it on zero
pub const JITTER_SUBTRAHEND: i64 = MAX_JITTER / 2;

// ============================================================================
// Configuration
// ============================================================================

/// The time budget a [`Backoff`] works against
pub trait BackoffConfig: Send + Sync {
    /// Milliseconds left in the budget. May be negative.
    fn time_remaining(&self) -> i64;

    /// Signal that the next delay would exceed the budget
    fn abort(&self);

    /// When `true` the backoff stops sleeping once it has reached its maximum
    /// number of doublings. Disable when there is no timer that can run out.
    fn apply_timer_rule(&self) -> bool {
        true
    }
}

/// A [`BackoffConfig`] built from closures
pub struct FnBackoffConfig<R, A> {
    remaining: R,
    abort: A,
    apply_timer_rule: bool,
}

impl<R, A> FnBackoffConfig<R, A>
where
    R: Fn() -> i64 + Send + Sync,
    A: Fn() + Send + Sync,
{
    /// Create a config with the timer rule enabled
    pub fn new(remaining: R, abort: A) -> Self {
        Self {
            remaining,
            abort,
            apply_timer_rule: true,
        }
    }

    /// Enable or disable the timer rule
    pub fn with_timer_rule(mut self, apply: bool) -> Self {
        self.apply_timer_rule = apply;
        self
    }
}

impl<R, A> BackoffConfig for FnBackoffConfig<R, A>
where
    R: Fn() -> i64 + Send + Sync,
    A: Fn() + Send + Sync,
{
    fn time_remaining(&self) -> i64 {
        (self.remaining)()
    }

    fn abort(&self) {
        (self.abort)()
    }

    fn apply_timer_rule(&self) -> bool {
        self.apply_timer_rule
    }
}

impl<R, A> fmt::Debug for FnBackoffConfig<R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnBackoffConfig")
            .field("apply_timer_rule", &self.apply_timer_rule)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Interruption
// ============================================================================

/// Handle that interrupts a pending [`Backoff::delay`].
///
/// An interrupt sent while no delay is sleeping is kept and ends the next sleep.
#[derive(Debug, Clone, Default)]
pub struct Interrupter {
    notify: Arc<Notify>,
}

impl Interrupter {
    /// Interrupt the current or next sleep
    pub fn interrupt(&self) {
        self.notify.notify_one();
    }
}

// ============================================================================
// Backoff
// ============================================================================

/// Exponential backoff with jitter.
///
/// Each call to [`delay`](Self::delay) sleeps roughly twice as long as the
/// previous one, plus or minus [`JITTER_SUBTRAHEND`] milliseconds. The number
/// of doublings is limited to `log2` of the remaining time at the last reset,
/// and a delay that would not finish within the remaining time aborts the
/// config instead of sleeping.
pub struct Backoff {
    config: Arc<dyn BackoffConfig>,
    apply_timer_rule: bool,
    max_count: u32,
    wait_count: u32,
    min_delay: i64,
    rng: StdRng,
    interrupter: Interrupter,
}

impl Backoff {
    /// Create a backoff over the given config
    pub fn new(config: Arc<dyn BackoffConfig>) -> Self {
        let mut backoff = Self {
            apply_timer_rule: config.apply_timer_rule(),
            config,
            max_count: 0,
            wait_count: 0,
            min_delay: 0,
            rng: StdRng::from_entropy(),
            interrupter: Interrupter::default(),
        };
        backoff.reset();
        backoff
    }

    /// Set a floor that is added to every delay
    pub fn with_minimum_delay(mut self, min_delay: Duration) -> Self {
        self.set_minimum_delay(min_delay);
        self
    }

    /// Set a floor that is added to every delay
    pub fn set_minimum_delay(&mut self, min_delay: Duration) {
        self.min_delay = i64::try_from(min_delay.as_millis()).unwrap_or(i64::MAX);
    }

    /// Start again from the shortest delay, recomputing the maximum count
    /// from the time currently remaining.
    pub fn reset(&mut self) {
        let remaining = self.config.time_remaining();
        self.max_count = if remaining < 1 { 0 } else { remaining.ilog2() };
        self.wait_count = 0;
        debug!("Reset {self}");
    }

    /// The next delay in milliseconds, without jitter
    pub fn estimated_delay(&self) -> i64 {
        let remaining = self.config.time_remaining();
        let estimate = if remaining > 0 && self.wait_count < self.max_count {
            remaining.min(
                self.min_delay
                    .saturating_add(2i64.saturating_pow(self.wait_count + 1)),
            )
        } else {
            remaining
        };
        estimate.max(0)
    }

    /// The jitter bound in milliseconds; jitter is within +/- this value
    pub fn max_jitter(&self) -> i64 {
        MAX_JITTER - JITTER_SUBTRAHEND
    }

    /// Number of delays since the last reset, capped at the maximum count
    pub fn wait_count(&self) -> u32 {
        self.wait_count
    }

    /// Maximum number of doublings
    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    /// A handle for interrupting this backoff's sleeps
    pub fn interrupter(&self) -> Interrupter {
        self.interrupter.clone()
    }

    /// Sleep for the next backoff period.
    ///
    /// Returns [`Error::Interrupted`] if the sleep was interrupted.
    pub async fn delay(&mut self) -> Result<()> {
        let remaining = self.config.time_remaining();
        if !self.should_sleep(remaining) {
            return Ok(());
        }

        let next = self.time_with_jitter();
        if next <= 0 {
            return Ok(());
        }
        if next >= remaining {
            debug!("Backoff aborting timer");
            self.config.abort();
            return Ok(());
        }

        debug!(millis = next, "Backoff sleeping");
        let sleep = tokio::time::sleep(Duration::from_millis(next.unsigned_abs()));
        tokio::select! {
            biased;
            _ = self.interrupter.notify.notified() => Err(Error::Interrupted),
            _ = sleep => Ok(()),
        }
    }

    /// Like [`delay`](Self::delay) but ignores interruption
    pub async fn clean_delay(&mut self) {
        if let Err(e) = self.delay().await {
            debug!("Backoff delay ended early: {e}");
        }
    }

    /// Decide whether to sleep and advance the wait count
    fn should_sleep(&mut self, remaining: i64) -> bool {
        let result = remaining > 0 && (!self.apply_timer_rule || self.below_max_count());
        if self.wait_count < self.max_count {
            self.wait_count += 1;
        }
        result
    }

    fn below_max_count(&mut self) -> bool {
        // a budget that had run out at the last reset may have been refreshed
        if self.max_count == 0 {
            self.reset();
        }
        self.wait_count < self.max_count
    }

    fn time_with_jitter(&mut self) -> i64 {
        let jitter = self.rng.gen_range(0..MAX_JITTER) - JITTER_SUBTRAHEND;
        let base = 2i64.saturating_pow(self.wait_count) + jitter;
        base.max(0).saturating_add(self.min_delay)
    }
}

impl fmt::Display for Backoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Backoff {}/{}, {} milliseconds remaining.",
            self.wait_count,
            self.max_count,
            self.config.time_remaining()
        )
    }
}

impl fmt::Debug for Backoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backoff")
            .field("wait_count", &self.wait_count)
            .field("max_count", &self.max_count)
            .field("min_delay", &self.min_delay)
            .field("apply_timer_rule", &self.apply_timer_rule)
            .finish_non_exhaustive()
    }
}
