use serde::{Deserialize, Serialize};

use crate::id_gen::RecordId;

/// A pharmacy the owner can order medicine from. The catalog is seeded and
/// read-only; orders reference a pharmacy by id and keep its display name
/// denormalized so receipts survive catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pharmacy {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub distance: String,
    pub rating: f32,
    pub hours: String,
    pub services: Vec<String>,
}
