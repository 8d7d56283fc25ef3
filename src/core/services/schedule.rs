//! Delayed events for timed widgets
//!
//! Widgets never sleep. They push events onto a [`Timeline`] with a deadline on a
//! logical clock, and whoever drives them polls the timeline with the current
//! time. Time is a [`Duration`] since the session started, which keeps every
//! widget testable with a [`ManualClock`].
//!
//! Every scheduled task is bound to a [`CancelToken`]. Cancelling the token (or
//! dropping the timeline) guarantees the event is never delivered, so a widget
//! torn down mid-sequence cannot be mutated afterwards.

use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Source of the current logical time
pub trait Clock {
    /// Time elapsed since the clock started
    fn now(&self) -> Duration;

    /// Block until the given time has been reached
    fn sleep_until(&self, deadline: Duration);
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Start a clock at zero
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep_until(&self, deadline: Duration) {
        let now = self.now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
    }
}

/// Clock that jumps straight to any deadline
///
/// Used by tests and by `--instant` sessions.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    /// Start a clock at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep_until(&self, deadline: Duration) {
        if deadline > self.now.get() {
            self.now.set(deadline);
        }
    }
}

/// Shared cancellation flag
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a live token
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel every task bound to this token
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether the token has been cancelled
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
struct Scheduled<E> {
    seq: u64,
    due: Duration,
    event: E,
    token: CancelToken,
}

/// Queue of delayed events
#[derive(Debug)]
pub struct Timeline<E> {
    tasks: Vec<Scheduled<E>>,
    next_seq: u64,
    token: CancelToken,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Timeline<E> {
    /// Create an empty timeline
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_seq: 0,
            token: CancelToken::new(),
        }
    }

    /// Schedule `event` to fire `delay` after `now`
    pub fn schedule(&mut self, now: Duration, delay: Duration, event: E) {
        self.tasks.push(Scheduled {
            seq: self.next_seq,
            due: now + delay,
            event,
            token: self.token.clone(),
        });
        self.next_seq += 1;
    }

    /// Cancel every pending task
    ///
    /// Clones of the previous token observe the cancellation; tasks scheduled
    /// afterwards get a fresh token.
    pub fn cancel_all(&mut self) {
        self.token.cancel();
        self.tasks.clear();
        self.token = CancelToken::new();
    }

    #[cfg(test)]
    pub(super) fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Earliest pending deadline
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.tasks.iter().filter(|t| !t.token.is_cancelled()).map(|t| t.due).min()
    }

    /// Take every live event due at or before `now`, earliest first
    pub fn poll(&mut self, now: Duration) -> Vec<E> {
        self.poll_timed(now).into_iter().map(|(_, event)| event).collect()
    }

    /// Like [`Timeline::poll`], keeping each event's deadline
    pub fn poll_timed(&mut self, now: Duration) -> Vec<(Duration, E)> {
        self.tasks.retain(|t| !t.token.is_cancelled());

        let (mut due, pending): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.tasks).into_iter().partition(|t| t.due <= now);
        self.tasks = pending;

        due.sort_by_key(|t| (t.due, t.seq));
        due.into_iter().map(|t| (t.due, t.event)).collect()
    }
}

impl<E> Drop for Timeline<E> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
