//! Periodic frame tick sources.
//!
//! A [`TickSource`] invokes a single subscribed callback on its own thread with the time
//! elapsed since the previous tick. [`IntervalTicker`] is a portable implementation that
//! sleeps between ticks; hosts with a display-synchronized timer implement the trait over it.

use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use thiserror::Error;

use crate::time::{StdTimeSource, TimeInstant, TimeSource};

/// Callback invoked once per tick with the elapsed time since the previous tick.
pub type TickCallback = Box<dyn FnMut(Duration) + Send + 'static>;

/// Errors that can occur when subscribing to a tick source.
#[derive(Debug, Error)]
pub enum TickError {
    #[error("tick source already has a subscriber")]
    AlreadySubscribed,

    #[error("failed to spawn tick thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// A source of periodic frame ticks.
pub trait TickSource {
    /// Starts delivering ticks to `on_tick`.
    ///
    /// The callback runs on the tick source's own thread and must return quickly.
    fn subscribe(&mut self, on_tick: TickCallback) -> Result<(), TickError>;

    /// Stops delivering ticks. Once this returns the callback is never invoked again.
    ///
    /// Does nothing when not subscribed.
    fn unsubscribe(&mut self);

    /// Returns true while a callback is subscribed.
    fn is_subscribed(&self) -> bool;
}

/// Default tick interval, roughly one 60 Hz display frame.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_micros(16_667);

/// Tick source backed by a dedicated sleeping thread.
///
/// Elapsed time is measured with a [`TimeSource`], so a late wakeup yields a larger delta
/// rather than a lost tick.
pub struct IntervalTicker<T = StdTimeSource, I = std::time::Instant> {
    interval: Duration,
    time_source: Arc<T>,
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
    _instant: PhantomData<fn() -> I>,
}

impl IntervalTicker {
    /// Creates a ticker firing every `interval` using the system monotonic clock.
    pub fn new(interval: Duration) -> Self {
        Self::with_time_source(interval, StdTimeSource)
    }
}

impl Default for IntervalTicker {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl<T, I> IntervalTicker<T, I> {
    /// Creates a ticker measuring elapsed time with `time_source`.
    pub fn with_time_source(interval: Duration, time_source: T) -> Self {
        Self {
            interval,
            time_source: Arc::new(time_source),
            running: Arc::new(AtomicBool::new(false)),
            worker: None,
            _instant: PhantomData,
        }
    }
}

impl<T, I> TickSource for IntervalTicker<T, I>
where
    T: TimeSource<I> + Send + Sync + 'static,
    I: TimeInstant<Duration = Duration> + 'static,
{
    fn subscribe(&mut self, mut on_tick: TickCallback) -> Result<(), TickError> {
        if self.worker.is_some() {
            return Err(TickError::AlreadySubscribed);
        }

        // One stop flag per subscription; a thread stopped from its own callback stays stopped.
        self.running = Arc::new(AtomicBool::new(true));
        let running = Arc::clone(&self.running);
        let time_source = Arc::clone(&self.time_source);
        let interval = self.interval;

        let spawned = thread::Builder::new()
            .name("gradient-tick".into())
            .spawn(move || {
                tracing::debug!(?interval, "tick thread started");
                let mut last = time_source.now();
                while running.load(Ordering::Acquire) {
                    thread::sleep(interval);
                    if !running.load(Ordering::Acquire) {
                        break;
                    }
                    let now = time_source.now();
                    on_tick(now.duration_since(last));
                    last = now;
                }
                tracing::debug!("tick thread exiting");
            });

        match spawned {
            Ok(handle) => {
                self.worker = Some(handle);
                Ok(())
            }
            Err(err) => {
                self.running.store(false, Ordering::Release);
                Err(TickError::Spawn(err))
            }
        }
    }

    fn unsubscribe(&mut self) {
        self.running.store(false, Ordering::Release);
        let Some(handle) = self.worker.take() else {
            return;
        };

        if handle.thread().id() == thread::current().id() {
            // Called from inside the callback; the loop exits once it returns.
            return;
        }
        if handle.join().is_err() {
            tracing::warn!("tick thread panicked");
        }
    }

    fn is_subscribed(&self) -> bool {
        self.worker.is_some()
    }
}

impl<T, I> Drop for IntervalTicker<T, I> {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.worker.take() {
            if handle.thread().id() != thread::current().id() && handle.join().is_err() {
                tracing::warn!("tick thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use tracing_test::traced_test;

    #[test]
    fn delivers_ticks_until_unsubscribed() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut ticker = IntervalTicker::new(Duration::from_millis(1));

        let counter = Arc::clone(&count);
        ticker
            .subscribe(Box::new(move |dt| {
                assert!(dt > Duration::ZERO);
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();
        assert!(ticker.is_subscribed());

        while count.load(Ordering::SeqCst) < 3 {
            thread::sleep(Duration::from_millis(1));
        }
        ticker.unsubscribe();
        assert!(!ticker.is_subscribed());

        let after_stop = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn second_subscription_is_rejected() {
        let mut ticker = IntervalTicker::new(Duration::from_millis(5));
        ticker.subscribe(Box::new(|_| {})).unwrap();
        let result = ticker.subscribe(Box::new(|_| {}));
        assert!(matches!(result, Err(TickError::AlreadySubscribed)));
        ticker.unsubscribe();
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let mut ticker = IntervalTicker::new(Duration::from_millis(5));
        ticker.unsubscribe();
        ticker.subscribe(Box::new(|_| {})).unwrap();
        ticker.unsubscribe();
        ticker.unsubscribe();
        assert!(!ticker.is_subscribed());
    }

    #[test]
    #[traced_test]
    fn drop_reports_panicked_tick_thread() {
        let fired = Arc::new(AtomicBool::new(false));
        let mut ticker = IntervalTicker::new(Duration::from_millis(1));

        let flag = Arc::clone(&fired);
        ticker
            .subscribe(Box::new(move |_| {
                flag.store(true, Ordering::SeqCst);
                panic!("tick callback failed");
            }))
            .unwrap();
        while !fired.load(Ordering::SeqCst) {
            thread::sleep(Duration::from_millis(1));
        }
        thread::sleep(Duration::from_millis(10));

        drop(ticker);
        assert!(logs_contain("tick thread panicked"));
    }
}
