//! Trailing-edge debouncer for rapidly changing input.
//!
//! Every `push` restarts the quiet period. Only the newest value is kept, so
//! a superseded value can never be emitted after a newer one was pushed.

use std::time::Duration;

use tokio::time::Instant;

/// Holds the most recent value until it has been stable for the quiet period.
///
/// The debouncer owns no task; callers await [`Debouncer::settled`] inside
/// their own event loop, typically as one arm of a `tokio::select!`.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet_period: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with nothing pending.
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Quiet period a value must survive before it is emitted.
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Records a new value and restarts the quiet period.
    ///
    /// Any previously pending value is dropped without being emitted.
    pub fn push(&mut self, value: T) {
        self.pending = Some(Pending {
            value,
            deadline: Instant::now() + self.quiet_period,
        });
    }

    /// Returns true while a value is waiting for its quiet period to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant at which the pending value will be emitted.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Discards the pending value, returning it if there was one.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.value)
    }

    /// Takes the pending value if its deadline has already passed.
    pub fn take_ready(&mut self) -> Option<T> {
        match self.deadline() {
            Some(deadline) if deadline <= Instant::now() => self.cancel(),
            _ => None,
        }
    }

    /// Waits until the pending value has been stable for the quiet period.
    ///
    /// Never resolves while nothing is pending. Cancel-safe: dropping the
    /// future before the deadline leaves the pending value in place, which is
    /// what makes it usable as a `select!` arm that is recreated after every
    /// `push`.
    pub async fn settled(&mut self) -> T {
        loop {
            let Some(deadline) = self.deadline() else {
                std::future::pending::<()>().await;
                continue;
            };

            tokio::time::sleep_until(deadline).await;

            if let Some(value) = self.take_ready() {
                return value;
            }
        }
    }
}
