// Notification contract between the domain layer and whatever surface hosts
// it. The host registers a sink at construction time; the domain layer
// never renders anything itself.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::id_gen::RecordId;
use crate::models::OrderStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }
}

/// Emitted when the lifecycle engine (or a manual action) moves an order to
/// a new status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusEvent {
    pub order_id: RecordId,
    pub new_status: OrderStatus,
    pub title: String,
    pub message: String,
}

impl OrderStatusEvent {
    pub fn into_notification(self) -> Notification {
        Notification::info(self.title, self.message)
    }
}

pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);

    /// Status-change events default to plain notifications; hosts that
    /// track orders (badges, order detail pages) override this.
    fn order_status_changed(&self, event: OrderStatusEvent) {
        self.notify(event.into_notification());
    }
}

/// Sink that writes notifications to the log. The default collaborator for
/// headless runs.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => info!(
                title = %notification.title,
                "{}", notification.description
            ),
            Severity::Error => warn!(
                title = %notification.title,
                "{}", notification.description
            ),
        }
    }
}

/// Sink that remembers everything it was handed, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    notifications: Mutex<Vec<Notification>>,
    events: Mutex<Vec<OrderStatusEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().map(|n| n.clone()).unwrap_or_default()
    }

    pub fn events(&self) -> Vec<OrderStatusEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn titles(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|n| n.title)
            .collect()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(notification);
        }
    }

    fn order_status_changed(&self, event: OrderStatusEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
        self.notify(event.into_notification());
    }
}

/// Sink that drops everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _notification: Notification) {}
}
