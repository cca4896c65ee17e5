// Domain records for the pet-care state layer.

pub mod activity;
pub mod job;
pub mod medical;
pub mod order;
pub mod owner;
pub mod pet;
pub mod pharmacy;
pub mod post;

pub use activity::{Activity, ActivityDetail, ActivityInput, ActivityKind};
pub use job::{JobApplication, JobCategory, JobListing, JobType};
pub use medical::{
    MedicalRecord, MedicalRecordKind, MedicalRecordStatus, Vaccination, VaccinationStatus,
};
pub use order::{DeliveryOption, Order, OrderInput, OrderStatus};
pub use owner::{ConnectionRequest, OutboundMessage, OwnedPet, OwnerProfile};
pub use pet::{Gender, Pet, PetInput, PetStatus, PetType};
pub use pharmacy::Pharmacy;
pub use post::{MediaKind, Post, PostAuthor, PostInput, PostMedia};

/// Presentation tone attached to a status badge. The UI maps these to its
/// color scheme; the domain layer only guarantees the mapping is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Blue,
    Yellow,
    Green,
    Purple,
    Red,
    Orange,
}
