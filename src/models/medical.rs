// Veterinary reference data shown on the pet profile. Seeded and read-only;
// editing medical history is a vet-side feature that never shipped here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Tone;
use crate::id_gen::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedicalRecordKind {
    Checkup,
    Vaccination,
}

impl MedicalRecordKind {
    pub fn label(&self) -> &'static str {
        match self {
            MedicalRecordKind::Checkup => "Checkup",
            MedicalRecordKind::Vaccination => "Vaccination",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedicalRecordStatus {
    Completed,
    Scheduled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: RecordId,
    pub pet_id: RecordId,
    pub date: NaiveDate,
    pub kind: MedicalRecordKind,
    pub provider: String,
    pub notes: String,
    pub status: MedicalRecordStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VaccinationStatus {
    #[serde(rename = "current")]
    Current,
    #[serde(rename = "due-soon")]
    DueSoon,
    #[serde(rename = "overdue")]
    Overdue,
}

impl VaccinationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VaccinationStatus::Current => "current",
            VaccinationStatus::DueSoon => "due-soon",
            VaccinationStatus::Overdue => "overdue",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            VaccinationStatus::Current => Tone::Green,
            VaccinationStatus::DueSoon => Tone::Yellow,
            VaccinationStatus::Overdue => Tone::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vaccination {
    pub id: RecordId,
    pub pet_id: RecordId,
    pub vaccine: String,
    pub date: NaiveDate,
    pub next_due: NaiveDate,
    pub status: VaccinationStatus,
}
