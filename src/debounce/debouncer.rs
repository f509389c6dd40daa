use std::time::{Duration, Instant};

/// A value waiting for its quiet period to elapse
#[derive(Debug, Clone)]
struct Pending<V> {
    value: V,
    due: Instant,
}

/// Trailing-edge debouncer
///
/// `settled()` lags behind the latest `update()` by at least the quiet period.
/// Every update restarts the timer, so a burst of updates yields exactly one
/// emission carrying the last value.
#[derive(Debug, Clone)]
pub struct Debouncer<V> {
    quiet_period: Duration,
    /// Most recent value passed to `update`
    latest: V,
    /// Last emitted value
    settled: V,
    pending: Option<Pending<V>>,
}

impl<V: Clone + PartialEq> Debouncer<V> {
    /// Create a debouncer whose settled value is `initial` right away
    pub fn new(initial: V, quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            latest: initial.clone(),
            settled: initial,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Record a new value, restarting the quiet period
    ///
    /// Passing the value that is already latest does not touch the timer.
    pub fn update(&mut self, value: V, now: Instant) {
        if value == self.latest {
            return;
        }
        self.latest = value.clone();
        self.pending = Some(Pending {
            value,
            due: now + self.quiet_period,
        });
    }

    /// Emit the pending value once its quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<V> {
        let due = self.pending.as_ref()?.due;
        if now < due {
            return None;
        }
        let pending = self.pending.take()?;
        self.settled = pending.value.clone();
        Some(pending.value)
    }

    /// Discard the pending timer without emitting
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.latest = self.settled.clone();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// How long until the pending value is due (zero if overdue)
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.due.saturating_duration_since(now))
    }

    pub fn settled(&self) -> &V {
        &self.settled
    }

    pub fn latest(&self) -> &V {
        &self.latest
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
