use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Tone;
use crate::id_gen::RecordId;

/// Statuses a medicine order moves through. `Ord` follows lifecycle order,
/// so a later observation of the same order never compares below an
/// earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Requested,
    Processing,
    Ready,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Requested => "requested",
            OrderStatus::Processing => "processing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Requested => "Order Requested",
            OrderStatus::Processing => "Processing",
            OrderStatus::Ready => "Ready for Pickup",
            OrderStatus::Delivered => "Delivered",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            OrderStatus::Requested => Tone::Blue,
            OrderStatus::Processing => Tone::Yellow,
            OrderStatus::Ready => Tone::Green,
            OrderStatus::Delivered => Tone::Purple,
        }
    }

    /// Title and description announced to the owner when an order reaches
    /// this status. `Requested` is announced by the order-placed flow
    /// instead, so it carries no transition notice.
    pub fn announcement(&self) -> Option<(&'static str, &'static str)> {
        match self {
            OrderStatus::Requested => None,
            OrderStatus::Processing => {
                Some(("Order Update", "Your order is now being processed."))
            }
            OrderStatus::Ready => Some(("Order Ready!", "Your medicine is ready for pickup.")),
            OrderStatus::Delivered => {
                Some(("Order Delivered", "Your medicine order has been delivered."))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryOption {
    #[serde(rename = "pickup")]
    Pickup,
    #[serde(rename = "delivery")]
    HomeDelivery,
}

impl DeliveryOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryOption::Pickup => "pickup",
            DeliveryOption::HomeDelivery => "delivery",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryOption::Pickup => "Store Pickup",
            DeliveryOption::HomeDelivery => "Home Delivery",
        }
    }
}

impl Default for DeliveryOption {
    fn default() -> Self {
        DeliveryOption::Pickup
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: RecordId,
    pub pet_name: String,
    pub medicine_name: String,
    pub dosage: String,
    pub quantity: String,
    pub delivery: DeliveryOption,
    pub notes: String,
    pub pharmacy_id: RecordId,
    pub pharmacy_name: String,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub estimated_ready: DateTime<Utc>,
}

/// Payload for placing a medicine order. `pet_name` and `medicine_name`
/// are required.
#[derive(Debug, Clone, Default)]
pub struct OrderInput {
    pub pet_name: String,
    pub medicine_name: String,
    pub dosage: String,
    pub quantity: String,
    pub delivery: DeliveryOption,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_order_follows_lifecycle() {
        assert!(OrderStatus::Requested < OrderStatus::Processing);
        assert!(OrderStatus::Processing < OrderStatus::Ready);
        assert!(OrderStatus::Ready < OrderStatus::Delivered);
    }

    #[test]
    fn status_metadata_is_total() {
        for status in [
            OrderStatus::Requested,
            OrderStatus::Processing,
            OrderStatus::Ready,
            OrderStatus::Delivered,
        ] {
            assert!(!status.label().is_empty());
            assert!(!status.as_str().is_empty());
        }
        assert_eq!(OrderStatus::Requested.tone(), Tone::Blue);
        assert_eq!(OrderStatus::Processing.tone(), Tone::Yellow);
        assert_eq!(OrderStatus::Ready.tone(), Tone::Green);
        assert_eq!(OrderStatus::Delivered.tone(), Tone::Purple);
    }

    #[test]
    fn only_requested_lacks_an_announcement() {
        assert!(OrderStatus::Requested.announcement().is_none());
        let (title, _) = OrderStatus::Processing.announcement().unwrap();
        assert_eq!(title, "Order Update");
        let (title, _) = OrderStatus::Ready.announcement().unwrap();
        assert_eq!(title, "Order Ready!");
        let (title, _) = OrderStatus::Delivered.announcement().unwrap();
        assert_eq!(title, "Order Delivered");
    }

    #[test]
    fn delivery_defaults_to_pickup() {
        assert_eq!(DeliveryOption::default(), DeliveryOption::Pickup);
        assert_eq!(DeliveryOption::HomeDelivery.label(), "Home Delivery");
    }
}
