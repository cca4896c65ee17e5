use serde::{Deserialize, Serialize};

use super::Tone;
use crate::id_gen::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Hamster,
    Fish,
    Other,
}

impl PetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
            PetType::Bird => "bird",
            PetType::Rabbit => "rabbit",
            PetType::Hamster => "hamster",
            PetType::Fish => "fish",
            PetType::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dog" => Some(PetType::Dog),
            "cat" => Some(PetType::Cat),
            "bird" => Some(PetType::Bird),
            "rabbit" => Some(PetType::Rabbit),
            "hamster" => Some(PetType::Hamster),
            "fish" => Some(PetType::Fish),
            "other" => Some(PetType::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PetStatus {
    #[serde(rename = "healthy")]
    Healthy,
    #[serde(rename = "checkup-due")]
    CheckupDue,
}

impl PetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PetStatus::Healthy => "Healthy",
            PetStatus::CheckupDue => "Checkup Due",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            PetStatus::Healthy => Tone::Green,
            PetStatus::CheckupDue => Tone::Yellow,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: RecordId,
    pub name: String,
    pub pet_type: PetType,
    pub breed: String,
    /// Free-form age as entered by the owner, e.g. "3 years".
    pub age: String,
    pub gender: Option<Gender>,
    pub weight: String,
    pub microchip: String,
    pub image: String,
    pub notes: String,
    pub status: PetStatus,
}

/// Payload for registering a pet. `name`, `breed` and `pet_type` are
/// required; everything else may stay blank.
#[derive(Debug, Clone, Default)]
pub struct PetInput {
    pub name: String,
    pub pet_type: Option<PetType>,
    pub breed: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub weight: String,
    pub microchip: String,
    pub image: String,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_type_round_trips_through_str() {
        for pet_type in [
            PetType::Dog,
            PetType::Cat,
            PetType::Bird,
            PetType::Rabbit,
            PetType::Hamster,
            PetType::Fish,
            PetType::Other,
        ] {
            assert_eq!(PetType::parse(pet_type.as_str()), Some(pet_type));
        }
        assert_eq!(PetType::parse("dragon"), None);
    }

    #[test]
    fn status_metadata_is_total() {
        assert_eq!(PetStatus::Healthy.label(), "Healthy");
        assert_eq!(PetStatus::CheckupDue.label(), "Checkup Due");
        assert_eq!(PetStatus::Healthy.tone(), Tone::Green);
        assert_eq!(PetStatus::CheckupDue.tone(), Tone::Yellow);
    }

    #[test]
    fn pet_serializes_with_stable_status_names() {
        let json = serde_json::to_string(&PetStatus::CheckupDue).unwrap();
        assert_eq!(json, "\"checkup-due\"");
        let json = serde_json::to_string(&PetType::Dog).unwrap();
        assert_eq!(json, "\"dog\"");
    }
}
