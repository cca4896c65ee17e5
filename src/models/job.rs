use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Tone;
use crate::id_gen::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "full-time")]
    FullTime,
    #[serde(rename = "part-time")]
    PartTime,
    #[serde(rename = "contract")]
    Contract,
    #[serde(rename = "freelance")]
    Freelance,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Freelance => "freelance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "full-time" => Some(JobType::FullTime),
            "part-time" => Some(JobType::PartTime),
            "contract" => Some(JobType::Contract),
            "freelance" => Some(JobType::Freelance),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Freelance => "Freelance",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            JobType::FullTime => Tone::Green,
            JobType::PartTime => Tone::Blue,
            JobType::Contract => Tone::Purple,
            JobType::Freelance => Tone::Orange,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobCategory {
    #[serde(rename = "veterinary")]
    Veterinary,
    #[serde(rename = "grooming")]
    Grooming,
    #[serde(rename = "pet-care")]
    PetCare,
    #[serde(rename = "retail")]
    Retail,
    #[serde(rename = "content")]
    Content,
}

impl JobCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobCategory::Veterinary => "veterinary",
            JobCategory::Grooming => "grooming",
            JobCategory::PetCare => "pet-care",
            JobCategory::Retail => "retail",
            JobCategory::Content => "content",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "veterinary" => Some(JobCategory::Veterinary),
            "grooming" => Some(JobCategory::Grooming),
            "pet-care" => Some(JobCategory::PetCare),
            "retail" => Some(JobCategory::Retail),
            "content" => Some(JobCategory::Content),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobCategory::Veterinary => "Veterinary",
            JobCategory::Grooming => "Pet Grooming",
            JobCategory::PetCare => "Pet Care",
            JobCategory::Retail => "Pet Retail",
            JobCategory::Content => "Content & Marketing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: RecordId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub salary: String,
    pub posted_at: DateTime<Utc>,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub category: JobCategory,
    pub remote: bool,
    pub urgent: bool,
}

/// Receipt for a submitted application. Applications are a local
/// simulation: the receipt is handed back to the caller, nothing is
/// retained or transmitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub job_id: RecordId,
    pub job_title: String,
    pub company: String,
    pub submitted_at: DateTime<Utc>,
}
