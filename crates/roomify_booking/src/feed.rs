// --- File: crates/roomify_booking/src/feed.rs ---
//! Live booking feed.
//!
//! A background task periodically reloads the complete booking set for the
//! namespace and publishes it through a watch channel. Subscribers always
//! receive the full current set, never a delta; the initial load counts as a
//! change. The task stops when the feed is cancelled or dropped.

use roomify_common::models::Booking;
use roomify_common::services::{BookingStore, BoxedError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// Default reload interval when the configuration does not set one.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Handle to the live booking feed subscription.
pub struct BookingFeed {
    receiver: watch::Receiver<Vec<Booking>>,
    task: JoinHandle<()>,
}

impl BookingFeed {
    /// Spawns the feed task for the given store and namespace.
    ///
    /// The first reload happens immediately, so subscribers observe the
    /// initial set without waiting a full interval.
    pub fn spawn(
        store: Arc<dyn BookingStore<Error = BoxedError>>,
        namespace: String,
        poll_interval: Duration,
    ) -> Self {
        let (sender, receiver) = watch::channel(Vec::new());

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut initial = true;

            loop {
                ticker.tick().await;
                match store.list_bookings(&namespace).await {
                    Ok(bookings) => {
                        let count = bookings.len();
                        let notified = sender.send_if_modified(|current| {
                            if initial || *current != bookings {
                                *current = bookings;
                                true
                            } else {
                                false
                            }
                        });
                        initial = false;
                        if notified {
                            debug!("Booking feed published {} bookings", count);
                        }
                    }
                    // The feed keeps its last good snapshot on errors and
                    // retries on the next tick.
                    Err(err) => warn!("Booking feed refresh failed: {}", err),
                }
            }
        });

        Self { receiver, task }
    }

    /// Subscribe to the feed. The receiver yields the complete current set
    /// on every change; the snapshot at subscribe time counts as unseen, so
    /// a new subscriber observes the initial load as its first change.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Booking>> {
        let mut receiver = self.receiver.clone();
        receiver.mark_changed();
        receiver
    }

    /// The most recently published booking set.
    pub fn current(&self) -> Vec<Booking> {
        self.receiver.borrow().clone()
    }

    /// Stops the feed task. Subscribers keep the last published set.
    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for BookingFeed {
    fn drop(&mut self) {
        self.task.abort();
    }
}
