// Scheduled order transitions. Placing an order registers explicit schedule
// entries; a single driver task sleeps until the earliest one is due and
// applies it through the store's guarded transition. Stale entries (order
// removed, status already advanced) skip silently inside the guard.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::sync::{Arc, Mutex};

use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::config::LifecycleConfig;
use crate::id_gen::RecordId;
use crate::models::OrderStatus;
use crate::notify::{NotificationSink, OrderStatusEvent};
use crate::store::{EntityStore, TransitionOutcome};

/// One planned status change. Both entries for an order are registered at
/// placement time, with due instants measured from that moment; the second
/// entry's guard holds it back if the first somehow has not run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTransition {
    pub due: Instant,
    pub order_id: RecordId,
    pub expected: OrderStatus,
    pub target: OrderStatus,
}

impl Ord for ScheduledTransition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.order_id.cmp(&other.order_id))
            .then_with(|| self.target.cmp(&other.target))
            .then_with(|| self.expected.cmp(&other.expected))
    }
}

impl PartialOrd for ScheduledTransition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of pending transitions plus a wakeup for the driver.
#[derive(Debug, Default)]
struct Schedule {
    heap: Mutex<BinaryHeap<Reverse<ScheduledTransition>>>,
    wake: Notify,
}

impl Schedule {
    fn push(&self, transition: ScheduledTransition) {
        if let Ok(mut heap) = self.heap.lock() {
            heap.push(Reverse(transition));
        }
        // Wake the driver in case the new entry is due before its current
        // sleep deadline
        self.wake.notify_one();
    }

    fn pop_due(&self, now: Instant) -> Option<ScheduledTransition> {
        let mut heap = self.heap.lock().ok()?;
        match heap.peek() {
            Some(Reverse(next)) if next.due <= now => heap.pop().map(|Reverse(t)| t),
            _ => None,
        }
    }

    fn next_due(&self) -> Option<Instant> {
        self.heap
            .lock()
            .ok()
            .and_then(|heap| heap.peek().map(|Reverse(next)| next.due))
    }

    fn pending(&self) -> Vec<ScheduledTransition> {
        match self.heap.lock() {
            Ok(heap) => {
                let mut entries: Vec<_> = heap.iter().map(|Reverse(t)| t.clone()).collect();
                entries.sort();
                entries
            }
            Err(_) => Vec::new(),
        }
    }

    fn len(&self) -> usize {
        self.heap.lock().map(|heap| heap.len()).unwrap_or(0)
    }
}

/// Drives orders through Requested -> Processing -> Ready on the configured
/// delays. Owns a single background task for the lifetime of the engine.
pub struct LifecycleEngine {
    schedule: Arc<Schedule>,
    config: LifecycleConfig,
    shutdown: watch::Sender<bool>,
    driver: Mutex<Option<JoinHandle<()>>>,
}

impl LifecycleEngine {
    pub fn start(
        store: Arc<EntityStore>,
        sink: Arc<dyn NotificationSink>,
        config: LifecycleConfig,
    ) -> Self {
        let schedule = Arc::new(Schedule::default());
        let (shutdown, shutdown_rx) = watch::channel(false);

        let driver = tokio::spawn(drive(
            Arc::clone(&schedule),
            store,
            sink,
            shutdown_rx,
        ));

        info!(
            "Lifecycle engine started (processing after {}ms, ready after {}ms)",
            config.processing_delay_ms, config.ready_delay_ms
        );

        Self {
            schedule,
            config,
            shutdown,
            driver: Mutex::new(Some(driver)),
        }
    }

    /// Register both scheduled transitions for a freshly placed order.
    /// Delays are relative to now, which is the placement instant.
    pub fn schedule_order(&self, order_id: RecordId) {
        let placed = Instant::now();

        self.schedule.push(ScheduledTransition {
            due: placed + self.config.processing_delay(),
            order_id,
            expected: OrderStatus::Requested,
            target: OrderStatus::Processing,
        });
        self.schedule.push(ScheduledTransition {
            due: placed + self.config.ready_delay(),
            order_id,
            expected: OrderStatus::Processing,
            target: OrderStatus::Ready,
        });

        debug!("Scheduled lifecycle transitions for order {}", order_id);
    }

    /// Register a single transition. Mostly useful to hosts replaying or
    /// extending the standard schedule.
    pub fn schedule_transition(&self, transition: ScheduledTransition) {
        self.schedule.push(transition);
    }

    /// Pending entries, earliest first.
    pub fn pending(&self) -> Vec<ScheduledTransition> {
        self.schedule.pending()
    }

    pub fn pending_count(&self) -> usize {
        self.schedule.len()
    }

    /// Stop the driver. Entries still pending are dropped; this mirrors the
    /// process-exit behavior, where undelivered simulated transitions are
    /// simply lost.
    pub async fn shutdown(&self) {
        let _ = self.shutdown.send(true);
        let driver = self.driver.lock().ok().and_then(|mut slot| slot.take());
        if let Some(driver) = driver {
            let _ = driver.await;
        }
    }
}

async fn drive(
    schedule: Arc<Schedule>,
    store: Arc<EntityStore>,
    sink: Arc<dyn NotificationSink>,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        while let Some(transition) = schedule.pop_due(Instant::now()) {
            apply(&store, sink.as_ref(), transition).await;
        }

        let next_due = schedule.next_due();
        tokio::select! {
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    debug!("Lifecycle driver stopping");
                    return;
                }
            }
            _ = schedule.wake.notified() => {}
            _ = sleep_until_or_forever(next_due) => {}
        }
    }
}

async fn sleep_until_or_forever(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

async fn apply(store: &EntityStore, sink: &dyn NotificationSink, transition: ScheduledTransition) {
    let outcome = store
        .apply_order_transition(transition.order_id, transition.expected, transition.target)
        .await;

    match outcome {
        TransitionOutcome::Applied(order) => {
            info!(
                "Order {} moved to {:?}",
                order.id, order.status
            );
            if let Some((title, message)) = order.status.announcement() {
                sink.order_status_changed(OrderStatusEvent {
                    order_id: order.id,
                    new_status: order.status,
                    title: title.to_string(),
                    message: message.to_string(),
                });
            }
        }
        // Already logged at debug inside the guard
        TransitionOutcome::Skipped(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn transition(due: Instant, order_id: RecordId) -> ScheduledTransition {
        ScheduledTransition {
            due,
            order_id,
            expected: OrderStatus::Requested,
            target: OrderStatus::Processing,
        }
    }

    #[tokio::test]
    async fn schedule_pops_in_due_order() {
        let schedule = Schedule::default();
        let now = Instant::now();

        schedule.push(transition(now + Duration::from_secs(8), 2));
        schedule.push(transition(now + Duration::from_secs(3), 1));
        schedule.push(transition(now + Duration::from_secs(5), 3));

        let later = now + Duration::from_secs(10);
        assert_eq!(schedule.pop_due(later).map(|t| t.order_id), Some(1));
        assert_eq!(schedule.pop_due(later).map(|t| t.order_id), Some(3));
        assert_eq!(schedule.pop_due(later).map(|t| t.order_id), Some(2));
        assert_eq!(schedule.pop_due(later), None);
    }

    #[tokio::test]
    async fn nothing_pops_before_it_is_due() {
        let schedule = Schedule::default();
        let now = Instant::now();

        schedule.push(transition(now + Duration::from_secs(3), 1));

        assert_eq!(schedule.pop_due(now), None);
        assert_eq!(
            schedule.pop_due(now + Duration::from_secs(3)).map(|t| t.order_id),
            Some(1)
        );
    }

    #[tokio::test]
    async fn pending_lists_earliest_first() {
        let schedule = Schedule::default();
        let now = Instant::now();

        schedule.push(transition(now + Duration::from_secs(8), 1));
        schedule.push(transition(now + Duration::from_secs(3), 2));

        let pending = schedule.pending();
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].order_id, 2);
        assert_eq!(pending[1].order_id, 1);
    }

    #[tokio::test]
    async fn next_due_tracks_the_earliest_entry() {
        let schedule = Schedule::default();
        let now = Instant::now();
        assert_eq!(schedule.next_due(), None);

        schedule.push(transition(now + Duration::from_secs(8), 1));
        schedule.push(transition(now + Duration::from_secs(3), 2));

        assert_eq!(schedule.next_due(), Some(now + Duration::from_secs(3)));
    }
}
