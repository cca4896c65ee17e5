use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::PetType;
use crate::id_gen::RecordId;

/// A pet attached to a nearby owner's profile card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedPet {
    pub name: String,
    pub pet_type: PetType,
    pub breed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerProfile {
    pub id: RecordId,
    pub name: String,
    pub avatar: String,
    pub location: String,
    pub distance: String,
    pub pets: Vec<OwnedPet>,
    pub bio: String,
    pub joined: NaiveDate,
    pub rating: f32,
}

/// Receipt for a message sent to a nearby owner. Messaging is a local
/// simulation: nothing is transmitted or retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub owner_id: RecordId,
    pub owner_name: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// Receipt for a friend request, same simulation caveat as messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRequest {
    pub owner_id: RecordId,
    pub owner_name: String,
    pub sent_at: DateTime<Utc>,
}
