//! Debounce as an explicit cancellable delayed task.
//!
//! Each `submit` replaces the pending value and restarts the delay window;
//! `poll` commits the value only once the window has elapsed uninterrupted.
//! No threads and no timers: the caller drives the clock, which keeps the
//! whole thing deterministic under test.

use std::time::{Duration, Instant};

/// Delay the search box uses between keystroke and query.
pub const SEARCH_DELAY: Duration = Duration::from_millis(1000);

/// Fallback delay when none is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    due: Instant,
}

/// Coalesces bursts of input into the single last value.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedule `value` for commit at `at + delay`, discarding any value
    /// still pending.
    pub fn submit(&mut self, value: T, at: Instant) {
        self.pending = Some(Pending {
            value,
            due: at + self.delay,
        });
    }

    /// Commit the pending value if its window has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| p.due <= now) {
            return self.pending.take().map(|p| p.value);
        }
        None
    }

    /// Drop the pending value without committing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_DELAY, Debouncer, SEARCH_DELAY};
    use std::time::{Duration, Instant};

    #[test]
    fn commits_after_the_window_elapses() {
        let mut debouncer = Debouncer::new(Duration::from_millis(100));
        let start = Instant::now();

        debouncer.submit("printer", start);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.poll(start + Duration::from_millis(50)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(100)),
            Some("printer")
        );
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn new_input_restarts_the_window_and_only_the_last_value_commits() {
        let mut debouncer = Debouncer::new(Duration::from_millis(100));
        let start = Instant::now();

        debouncer.submit("p", start);
        debouncer.submit("pr", start + Duration::from_millis(60));
        debouncer.submit("pri", start + Duration::from_millis(120));

        // The first value's window would have elapsed by now, but it was
        // replaced before committing.
        assert_eq!(debouncer.poll(start + Duration::from_millis(150)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(220)),
            Some("pri")
        );
    }

    #[test]
    fn poll_commits_at_most_once() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        let start = Instant::now();

        debouncer.submit(1, start);
        let later = start + Duration::from_millis(20);
        assert_eq!(debouncer.poll(later), Some(1));
        assert_eq!(debouncer.poll(later), None);
    }

    #[test]
    fn cancel_drops_the_pending_value() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        let start = Instant::now();

        debouncer.submit("gone", start);
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + Duration::from_millis(20)), None);
    }

    #[test]
    fn default_delays_are_the_documented_constants() {
        assert_eq!(Debouncer::<String>::default().delay(), DEFAULT_DELAY);
        assert_eq!(SEARCH_DELAY, Duration::from_millis(1000));
    }
}
