//! Retry timing
//!
//! A [`Timer`] is a countdown over a fixed duration. A [`Backoff`] produces
//! exponentially growing, jittered delays that never exceed the time left on
//! its [`BackoffConfig`], typically a running [`Timer`].
//!
//! ```ignore
//! let timer = Arc::new(Timer::new(Duration::from_secs(30)));
//! let mut backoff = Backoff::new(timer.clone());
//! timer.start()?;
//! while !timer.is_expired() {
//!     if try_operation().await.is_ok() {
//!         break;
//!     }
//!     backoff.delay().await?;
//! }
//! ```

mod backoff;
mod timer;

pub use backoff::{
    Backoff, BackoffConfig, FnBackoffConfig, Interrupter, JITTER_SUBTRAHEND, MAX_JITTER,
};
pub use timer::Timer;
